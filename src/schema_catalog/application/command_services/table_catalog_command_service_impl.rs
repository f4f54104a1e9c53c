use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::schema_catalog::{
    domain::{
        model::{
            commands::{
                create_table_command::CreateTableCommand, drop_table_command::DropTableCommand,
            },
            enums::schema_catalog_domain_error::SchemaCatalogDomainError,
        },
        services::table_catalog_command_service::TableCatalogCommandService,
    },
    infrastructure::persistence::repositories::table_administration_repository::TableAdministrationRepository,
};

pub struct TableCatalogCommandServiceImpl {
    administration_repository: Arc<dyn TableAdministrationRepository>,
}

impl TableCatalogCommandServiceImpl {
    pub fn new(administration_repository: Arc<dyn TableAdministrationRepository>) -> Self {
        Self {
            administration_repository,
        }
    }

    async fn run_ddl(
        &self,
        table_name: &str,
        statement: String,
    ) -> Result<String, SchemaCatalogDomainError> {
        match self
            .administration_repository
            .execute_statement(&statement)
            .await
        {
            Ok(()) => {
                info!(table = table_name, statement = %statement, "ddl executed");
                Ok(statement)
            }
            Err(e) => {
                error!(table = table_name, statement = %statement, error = %e, "ddl failed");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl TableCatalogCommandService for TableCatalogCommandServiceImpl {
    async fn handle_create_table(
        &self,
        command: CreateTableCommand,
    ) -> Result<String, SchemaCatalogDomainError> {
        self.run_ddl(command.table_name().value(), command.to_sql())
            .await
    }

    async fn handle_drop_table(
        &self,
        command: DropTableCommand,
    ) -> Result<String, SchemaCatalogDomainError> {
        self.run_ddl(command.table_name().value(), command.to_sql())
            .await
    }
}
