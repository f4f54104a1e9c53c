use crate::schema_catalog::domain::model::{
    entities::field::Field, enums::schema_catalog_domain_error::SchemaCatalogDomainError,
    value_objects::table_name::{TableName, quote_identifier},
};

#[derive(Clone, Debug)]
pub struct CreateTableCommand {
    table_name: TableName,
    fields: Vec<Field>,
}

impl CreateTableCommand {
    pub fn new(table_name: String, fields: Vec<Field>) -> Result<Self, SchemaCatalogDomainError> {
        let table_name = TableName::new(table_name)?;

        if fields.is_empty() {
            return Err(SchemaCatalogDomainError::EmptyTableDefinition);
        }
        if fields.iter().filter(|f| f.is_primary_key()).count() > 1 {
            return Err(SchemaCatalogDomainError::MultiplePrimaryKeys);
        }

        Ok(Self { table_name, fields })
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Identifiers are quoted so the catalog reports them exactly as given.
    pub fn to_sql(&self) -> String {
        let columns = self
            .fields
            .iter()
            .map(|field| {
                format!(
                    "{} {}",
                    quote_identifier(field.name()),
                    field.column_definition()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("CREATE TABLE {} ({columns})", self.table_name.quoted())
    }
}
