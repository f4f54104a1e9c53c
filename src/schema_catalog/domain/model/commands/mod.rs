pub mod create_table_command;
pub mod drop_table_command;
