use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::schema_catalog::{
    domain::{
        model::{
            entities::{field::Field, record_set::RecordSet},
            enums::schema_catalog_domain_error::SchemaCatalogDomainError,
            queries::{
                read_table_schema_query::ReadTableSchemaQuery,
                show_records_query::ShowRecordsQuery,
            },
        },
        services::{
            schema_reader::SchemaReader, table_catalog_query_service::TableCatalogQueryService,
        },
    },
    infrastructure::persistence::repositories::{
        metadata_source::MetadataSource,
        table_administration_repository::TableAdministrationRepository,
    },
};

pub struct TableCatalogQueryServiceImpl {
    metadata_source: Arc<dyn MetadataSource>,
    administration_repository: Arc<dyn TableAdministrationRepository>,
    schema_reader: SchemaReader,
}

impl TableCatalogQueryServiceImpl {
    pub fn new(
        metadata_source: Arc<dyn MetadataSource>,
        administration_repository: Arc<dyn TableAdministrationRepository>,
    ) -> Self {
        Self {
            metadata_source,
            administration_repository,
            schema_reader: SchemaReader::new(),
        }
    }

    fn render_value(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            // Numbers keep the text PostgreSQL produced, e.g. `5.00`.
            Value::Number(number) => Some(number.to_string()),
            other => Some(other.to_string()),
        }
    }

    fn to_record_set(columns: Vec<String>, records: Vec<Map<String, Value>>) -> RecordSet {
        // Without catalog columns fall back to the keys of the first record,
        // which keep the table's column order.
        let columns = if columns.is_empty() {
            records
                .first()
                .map(|record| record.keys().cloned().collect())
                .unwrap_or_default()
        } else {
            columns
        };

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).and_then(Self::render_value))
                    .collect()
            })
            .collect();

        RecordSet { columns, rows }
    }
}

#[async_trait]
impl TableCatalogQueryService for TableCatalogQueryServiceImpl {
    async fn handle_test_connection(&self) -> Result<(), SchemaCatalogDomainError> {
        self.administration_repository.ping().await.inspect_err(|e| {
            error!(error = %e, "connection test failed");
        })
    }

    async fn handle_list_tables(&self) -> Result<Vec<String>, SchemaCatalogDomainError> {
        let mut tables = self.administration_repository.list_tables().await?;
        tables.sort();
        Ok(tables)
    }

    async fn handle_read_schema(
        &self,
        query: ReadTableSchemaQuery,
    ) -> Result<Vec<Field>, SchemaCatalogDomainError> {
        let fields = self
            .schema_reader
            .read_schema(query.table_name().value(), self.metadata_source.as_ref())
            .await
            .inspect_err(|e| {
                error!(table = query.table_name().value(), error = %e, "schema read failed");
            })?;

        debug!(
            table = query.table_name().value(),
            columns = fields.len(),
            "schema read"
        );

        Ok(fields)
    }

    async fn handle_show_records(
        &self,
        query: ShowRecordsQuery,
    ) -> Result<RecordSet, SchemaCatalogDomainError> {
        let fields = self
            .schema_reader
            .read_schema(query.table_name().value(), self.metadata_source.as_ref())
            .await?;
        let records = self
            .administration_repository
            .fetch_records(query.table_name())
            .await?;

        let columns = fields
            .iter()
            .map(|field| field.name().to_string())
            .collect::<Vec<_>>();

        Ok(Self::to_record_set(columns, records))
    }
}
