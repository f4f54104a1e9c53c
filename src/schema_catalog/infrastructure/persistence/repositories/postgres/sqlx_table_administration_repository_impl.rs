use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{PgPool, Row};

use crate::schema_catalog::{
    domain::model::{
        enums::schema_catalog_domain_error::SchemaCatalogDomainError,
        value_objects::table_name::{TableName, quote_identifier},
    },
    infrastructure::persistence::repositories::table_administration_repository::TableAdministrationRepository,
};

pub struct SqlxTableAdministrationRepositoryImpl {
    pool: PgPool,
    schema_name: String,
}

impl SqlxTableAdministrationRepositoryImpl {
    pub fn new(pool: PgPool, schema_name: String) -> Self {
        Self { pool, schema_name }
    }
}

fn map_infra_error(error: sqlx::Error) -> SchemaCatalogDomainError {
    SchemaCatalogDomainError::InfrastructureError(error.to_string())
}

#[async_trait]
impl TableAdministrationRepository for SqlxTableAdministrationRepositoryImpl {
    async fn ping(&self) -> Result<(), SchemaCatalogDomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn list_tables(&self) -> Result<Vec<String>, SchemaCatalogDomainError> {
        let statement = r#"
            SELECT t.table_name::text AS table_name
            FROM information_schema.tables t
            WHERE t.table_schema = $1
                AND t.table_type = 'BASE TABLE'
        "#;

        let rows = sqlx::query(statement)
            .bind(&self.schema_name)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter()
            .map(|row| row.try_get::<String, _>("table_name").map_err(map_infra_error))
            .collect()
    }

    async fn execute_statement(&self, statement: &str) -> Result<(), SchemaCatalogDomainError> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn fetch_records(
        &self,
        table_name: &TableName,
    ) -> Result<Vec<Map<String, Value>>, SchemaCatalogDomainError> {
        let statement = format!(
            "SELECT row_to_json(t)::text AS record FROM {}.{} t",
            quote_identifier(&self.schema_name),
            table_name.quoted()
        );

        let rows = sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter()
            .map(|row| {
                let raw: String = row.try_get("record").map_err(map_infra_error)?;
                serde_json::from_str::<Map<String, Value>>(&raw)
                    .map_err(|e| SchemaCatalogDomainError::InfrastructureError(e.to_string()))
            })
            .collect()
    }
}
