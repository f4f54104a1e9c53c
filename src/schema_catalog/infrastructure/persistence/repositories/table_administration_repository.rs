use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::schema_catalog::domain::model::{
    enums::schema_catalog_domain_error::SchemaCatalogDomainError,
    value_objects::table_name::TableName,
};

#[async_trait]
pub trait TableAdministrationRepository: Send + Sync {
    async fn ping(&self) -> Result<(), SchemaCatalogDomainError>;

    async fn list_tables(&self) -> Result<Vec<String>, SchemaCatalogDomainError>;

    async fn execute_statement(&self, statement: &str) -> Result<(), SchemaCatalogDomainError>;

    async fn fetch_records(
        &self,
        table_name: &TableName,
    ) -> Result<Vec<Map<String, Value>>, SchemaCatalogDomainError>;
}
