use std::fmt;

use crate::schema_catalog::domain::model::enums::schema_catalog_domain_error::SchemaCatalogDomainError;

lazy_static::lazy_static! {
    pub static ref SQL_IDENTIFIER_REGEX: regex::Regex =
        regex::Regex::new("^[A-Za-z_][A-Za-z0-9_]{0,62}$").expect("valid regex");
}

/// Double-quotes an identifier so PostgreSQL keeps its case; embedded quotes
/// are doubled.
pub fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Plain identifier, kept with its original case.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, SchemaCatalogDomainError> {
        let trimmed = value.as_ref().trim();

        if !SQL_IDENTIFIER_REGEX.is_match(trimmed) {
            return Err(SchemaCatalogDomainError::InvalidTableName);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn quoted(&self) -> String {
        quote_identifier(&self.0)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
