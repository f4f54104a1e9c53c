use crate::schema_catalog::{
    domain::model::{
        entities::field::Field, enums::schema_catalog_domain_error::SchemaCatalogDomainError,
        value_objects::column_descriptor::ColumnDescriptor,
    },
    infrastructure::persistence::repositories::metadata_source::MetadataSource,
};

/// Rebuilds a table's fields from the catalog by merging the primary key
/// list into the column list.
///
/// An empty result means the table has no columns or does not exist; the two
/// cases are not told apart here. Source failures propagate unchanged and no
/// partial result is ever returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaReader;

impl SchemaReader {
    pub fn new() -> Self {
        Self
    }

    pub async fn read_schema(
        &self,
        table_name: &str,
        source: &dyn MetadataSource,
    ) -> Result<Vec<Field>, SchemaCatalogDomainError> {
        if table_name.trim().is_empty() {
            return Err(SchemaCatalogDomainError::InvalidArgument(
                "table name must not be blank".to_string(),
            ));
        }

        let primary_keys = source.list_primary_key_columns(table_name).await?;
        let columns = source.list_columns(table_name).await?;

        columns
            .into_iter()
            .map(|column| {
                let is_primary_key = primary_keys.contains(&column.name);
                Self::to_field(column, is_primary_key)
            })
            .collect()
    }

    fn to_field(
        column: ColumnDescriptor,
        is_primary_key: bool,
    ) -> Result<Field, SchemaCatalogDomainError> {
        let mut field = Field::new(&column.name, &column.type_name)?;

        if is_primary_key {
            field = field.primary_key();
        } else if !column.nullability.is_nullable() {
            field = field.not_null();
        }

        if field.accepts_length() && column.size > 0 {
            field = field.with_max_length(column.size)?;
        }

        Ok(field)
    }
}
