use std::fmt;

use crate::schema_catalog::domain::model::enums::schema_catalog_domain_error::SchemaCatalogDomainError;

/// Type names that accept a `(length)` modifier when rendered.
const LENGTH_TYPES: &[&str] = &["VARCHAR", "CHAR"];

const STRING_TYPES: &[&str] = &["VARCHAR", "CHAR", "TEXT"];

const NUMERIC_TYPES: &[&str] = &[
    "INTEGER", "INT", "BIGINT", "DECIMAL", "NUMERIC", "REAL", "DOUBLE",
];

/// One column definition: name, declared type, optional length and the
/// primary-key / not-null constraints.
///
/// Built with consuming methods:
///
/// ```
/// use table_console::schema_catalog::domain::model::entities::field::Field;
///
/// let field = Field::new("email", "varchar")?.with_max_length(120)?.not_null();
/// assert_eq!(field.to_sql(), "email VARCHAR(120) NOT NULL");
/// # Ok::<(), table_console::schema_catalog::domain::model::enums::schema_catalog_domain_error::SchemaCatalogDomainError>(())
/// ```
///
/// A primary key is always not-null; the reverse never holds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    data_type: String,
    max_length: Option<i32>,
    is_primary_key: bool,
    is_not_null: bool,
}

impl Field {
    pub fn new(
        name: impl AsRef<str>,
        data_type: impl AsRef<str>,
    ) -> Result<Self, SchemaCatalogDomainError> {
        let name = name.as_ref().trim();
        let data_type = data_type.as_ref().trim();

        if name.is_empty() {
            return Err(SchemaCatalogDomainError::InvalidArgument(
                "field name must not be blank".to_string(),
            ));
        }
        if data_type.is_empty() {
            return Err(SchemaCatalogDomainError::InvalidArgument(format!(
                "data type of field '{name}' must not be blank"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            data_type: data_type.to_uppercase(),
            max_length: None,
            is_primary_key: false,
            is_not_null: false,
        }
        .normalize_constraints())
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.normalize_constraints()
    }

    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }

    /// Stores the length for any type; only `VARCHAR` and `CHAR` render it.
    pub fn with_max_length(mut self, length: i32) -> Result<Self, SchemaCatalogDomainError> {
        if length <= 0 {
            return Err(SchemaCatalogDomainError::InvalidArgument(format!(
                "max length of field '{}' must be positive, got {length}",
                self.name
            )));
        }

        self.max_length = Some(length);
        Ok(self)
    }

    // Single place where primary key implies not null.
    fn normalize_constraints(mut self) -> Self {
        if self.is_primary_key {
            self.is_not_null = true;
        }
        self
    }

    pub fn to_sql(&self) -> String {
        format!("{} {}", self.name, self.column_definition())
    }

    /// Everything after the name: type label and the constraint clause.
    pub fn column_definition(&self) -> String {
        let mut definition = self.type_label();

        if self.is_primary_key {
            definition.push_str(" PRIMARY KEY");
        } else if self.is_not_null {
            definition.push_str(" NOT NULL");
        }

        definition
    }

    /// Type with its length modifier when one applies, e.g. `VARCHAR(50)`.
    pub fn type_label(&self) -> String {
        match self.max_length {
            Some(length) if self.accepts_length() => format!("{}({length})", self.data_type),
            _ => self.data_type.clone(),
        }
    }

    pub fn accepts_length(&self) -> bool {
        LENGTH_TYPES.contains(&self.data_type.as_str())
    }

    pub fn is_string_type(&self) -> bool {
        STRING_TYPES.contains(&self.data_type.as_str())
    }

    pub fn is_numeric_type(&self) -> bool {
        NUMERIC_TYPES.contains(&self.data_type.as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn max_length(&self) -> Option<i32> {
        self.max_length
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    pub fn is_not_null(&self) -> bool {
        self.is_not_null
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
