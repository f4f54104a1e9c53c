/// Nullability as the catalog reports it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnNullability {
    NoNulls,
    Nullable,
    Unknown,
}

impl ColumnNullability {
    /// Maps the `information_schema.columns.is_nullable` flag; anything other
    /// than `YES` or `NO` is `Unknown`.
    pub fn from_catalog_flag(flag: &str) -> Self {
        match flag.trim().to_ascii_uppercase().as_str() {
            "YES" => Self::Nullable,
            "NO" => Self::NoNulls,
            _ => Self::Unknown,
        }
    }

    /// Only an explicit `Nullable` counts; unknown columns are treated as not null.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable)
    }
}
