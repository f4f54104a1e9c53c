use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthenticationDomainError {
    #[error("username and password cannot be empty")]
    MissingCredentials,

    #[error("credentials table name is invalid")]
    InvalidCredentialsTable,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
