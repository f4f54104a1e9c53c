pub mod authentication_console_controller;
