pub mod schema_reader;
pub mod table_catalog_command_service;
pub mod table_catalog_query_service;
