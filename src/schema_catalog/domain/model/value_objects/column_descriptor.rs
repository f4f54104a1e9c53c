use crate::schema_catalog::domain::model::enums::column_nullability::ColumnNullability;

/// One column row as reported by the catalog, before it becomes a `Field`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub type_name: String,
    pub size: i32,
    pub nullability: ColumnNullability,
}

impl ColumnDescriptor {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        size: i32,
        nullability: ColumnNullability,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            size,
            nullability,
        }
    }
}
