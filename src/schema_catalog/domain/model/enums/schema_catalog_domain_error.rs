use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaCatalogDomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("table name is invalid; use [A-Za-z_][A-Za-z0-9_] and length 1..63")]
    InvalidTableName,

    #[error("table definition needs at least one field")]
    EmptyTableDefinition,

    #[error("table definition declares more than one primary key")]
    MultiplePrimaryKeys,

    #[error("schema metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
