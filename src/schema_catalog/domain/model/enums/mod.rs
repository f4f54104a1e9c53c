pub mod column_nullability;
pub mod schema_catalog_domain_error;
