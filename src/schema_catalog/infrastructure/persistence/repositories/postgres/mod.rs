pub mod sqlx_metadata_source_impl;
pub mod sqlx_table_administration_repository_impl;
