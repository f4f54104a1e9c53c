use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::schema_catalog::{
    domain::model::{
        enums::{
            column_nullability::ColumnNullability,
            schema_catalog_domain_error::SchemaCatalogDomainError,
        },
        value_objects::column_descriptor::ColumnDescriptor,
    },
    infrastructure::persistence::repositories::metadata_source::MetadataSource,
};

/// Reads `information_schema` of one PostgreSQL schema.
pub struct SqlxMetadataSourceImpl {
    pool: PgPool,
    schema_name: String,
}

impl SqlxMetadataSourceImpl {
    pub fn new(pool: PgPool, schema_name: String) -> Self {
        Self { pool, schema_name }
    }

    /// Maps PostgreSQL internal type names to the portable spelling used when
    /// tables are created from this console.
    pub fn normalize_type_name(udt_name: &str) -> String {
        match udt_name {
            "varchar" => "VARCHAR".to_string(),
            "bpchar" => "CHAR".to_string(),
            "int4" => "INTEGER".to_string(),
            "int8" => "BIGINT".to_string(),
            "int2" => "SMALLINT".to_string(),
            "float8" => "DOUBLE".to_string(),
            "float4" => "REAL".to_string(),
            "bool" => "BOOLEAN".to_string(),
            other => other.to_uppercase(),
        }
    }
}

fn map_metadata_error(error: sqlx::Error) -> SchemaCatalogDomainError {
    SchemaCatalogDomainError::MetadataUnavailable(error.to_string())
}

#[async_trait]
impl MetadataSource for SqlxMetadataSourceImpl {
    async fn list_primary_key_columns(
        &self,
        table_name: &str,
    ) -> Result<HashSet<String>, SchemaCatalogDomainError> {
        let statement = r#"
            SELECT kcu.column_name::text AS column_name
            FROM information_schema.table_constraints tc
            INNER JOIN information_schema.key_column_usage kcu
                ON tc.constraint_name = kcu.constraint_name
                AND tc.table_schema = kcu.table_schema
                AND tc.table_name = kcu.table_name
            WHERE tc.table_schema = $1
                AND tc.table_name = $2
                AND tc.constraint_type = 'PRIMARY KEY'
        "#;

        let rows = sqlx::query(statement)
            .bind(&self.schema_name)
            .bind(table_name)
            .fetch_all(&self.pool)
            .await
            .map_err(map_metadata_error)?;

        rows.into_iter()
            .map(|row| row.try_get::<String, _>("column_name").map_err(map_metadata_error))
            .collect()
    }

    async fn list_columns(
        &self,
        table_name: &str,
    ) -> Result<Vec<ColumnDescriptor>, SchemaCatalogDomainError> {
        let statement = r#"
            SELECT
                c.column_name::text AS column_name,
                c.udt_name::text AS udt_name,
                c.character_maximum_length::int4 AS column_size,
                c.is_nullable::text AS is_nullable
            FROM information_schema.columns c
            WHERE c.table_schema = $1 AND c.table_name = $2
            ORDER BY c.ordinal_position
        "#;

        let rows = sqlx::query(statement)
            .bind(&self.schema_name)
            .bind(table_name)
            .fetch_all(&self.pool)
            .await
            .map_err(map_metadata_error)?;

        rows.into_iter()
            .map(|row| {
                let name: String = row.try_get("column_name").map_err(map_metadata_error)?;
                let udt_name: String = row.try_get("udt_name").map_err(map_metadata_error)?;
                let size: Option<i32> = row.try_get("column_size").map_err(map_metadata_error)?;
                let nullable_flag: String =
                    row.try_get("is_nullable").map_err(map_metadata_error)?;

                Ok(ColumnDescriptor::new(
                    name,
                    Self::normalize_type_name(&udt_name),
                    size.unwrap_or(0),
                    ColumnNullability::from_catalog_flag(&nullable_flag),
                ))
            })
            .collect()
    }
}
