use crate::schema_catalog::domain::model::{
    enums::schema_catalog_domain_error::SchemaCatalogDomainError,
    value_objects::table_name::TableName,
};

#[derive(Clone, Debug)]
pub struct DropTableCommand {
    table_name: TableName,
}

impl DropTableCommand {
    pub fn new(table_name: String) -> Result<Self, SchemaCatalogDomainError> {
        Ok(Self {
            table_name: TableName::new(table_name)?,
        })
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }

    pub fn to_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.table_name.quoted())
    }
}
