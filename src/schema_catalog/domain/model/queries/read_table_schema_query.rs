use crate::schema_catalog::domain::model::{
    enums::schema_catalog_domain_error::SchemaCatalogDomainError,
    value_objects::table_name::TableName,
};

#[derive(Clone, Debug)]
pub struct ReadTableSchemaQuery {
    table_name: TableName,
}

impl ReadTableSchemaQuery {
    pub fn new(table_name: String) -> Result<Self, SchemaCatalogDomainError> {
        Ok(Self {
            table_name: TableName::new(table_name)?,
        })
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
}
