use std::collections::HashSet;

use async_trait::async_trait;

use crate::schema_catalog::domain::model::{
    enums::schema_catalog_domain_error::SchemaCatalogDomainError,
    value_objects::column_descriptor::ColumnDescriptor,
};

/// Catalog reads needed to rebuild a table's fields.
///
/// The two calls are independent queries. DDL running between them can pair
/// a stale primary key set with a fresh column list; callers needing a
/// consistent snapshot must serialize schema reads with DDL themselves.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Names of the primary key columns; empty when the table has none.
    async fn list_primary_key_columns(
        &self,
        table_name: &str,
    ) -> Result<HashSet<String>, SchemaCatalogDomainError>;

    /// Column descriptors in catalog (ordinal) order.
    async fn list_columns(
        &self,
        table_name: &str,
    ) -> Result<Vec<ColumnDescriptor>, SchemaCatalogDomainError>;
}
