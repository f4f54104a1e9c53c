pub mod read_table_schema_query;
pub mod show_records_query;
