pub mod schema_catalog_console_controller;
