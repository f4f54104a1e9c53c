use async_trait::async_trait;

use crate::schema_catalog::domain::model::{
    entities::{field::Field, record_set::RecordSet},
    enums::schema_catalog_domain_error::SchemaCatalogDomainError,
    queries::{
        read_table_schema_query::ReadTableSchemaQuery, show_records_query::ShowRecordsQuery,
    },
};

#[async_trait]
pub trait TableCatalogQueryService: Send + Sync {
    async fn handle_test_connection(&self) -> Result<(), SchemaCatalogDomainError>;

    async fn handle_list_tables(&self) -> Result<Vec<String>, SchemaCatalogDomainError>;

    async fn handle_read_schema(
        &self,
        query: ReadTableSchemaQuery,
    ) -> Result<Vec<Field>, SchemaCatalogDomainError>;

    async fn handle_show_records(
        &self,
        query: ShowRecordsQuery,
    ) -> Result<RecordSet, SchemaCatalogDomainError>;
}
