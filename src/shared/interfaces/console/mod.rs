pub mod console_io;
pub mod main_menu;
