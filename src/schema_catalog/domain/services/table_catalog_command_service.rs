use async_trait::async_trait;

use crate::schema_catalog::domain::model::{
    commands::{
        create_table_command::CreateTableCommand, drop_table_command::DropTableCommand,
    },
    enums::schema_catalog_domain_error::SchemaCatalogDomainError,
};

#[async_trait]
pub trait TableCatalogCommandService: Send + Sync {
    /// Executes the `CREATE TABLE` statement and returns it.
    async fn handle_create_table(
        &self,
        command: CreateTableCommand,
    ) -> Result<String, SchemaCatalogDomainError>;

    /// Executes the `DROP TABLE IF EXISTS` statement and returns it.
    async fn handle_drop_table(
        &self,
        command: DropTableCommand,
    ) -> Result<String, SchemaCatalogDomainError>;
}
