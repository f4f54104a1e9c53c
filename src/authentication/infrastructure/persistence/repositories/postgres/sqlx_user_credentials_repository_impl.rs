use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::{
    authentication::{
        domain::model::enums::authentication_domain_error::AuthenticationDomainError,
        infrastructure::persistence::repositories::user_credentials_repository::UserCredentialsRepository,
    },
    schema_catalog::domain::model::value_objects::table_name::SQL_IDENTIFIER_REGEX,
};

pub struct SqlxUserCredentialsRepositoryImpl {
    pool: PgPool,
    statement: String,
}

impl SqlxUserCredentialsRepositoryImpl {
    pub fn new(pool: PgPool, credentials_table: String) -> Result<Self, AuthenticationDomainError> {
        if !SQL_IDENTIFIER_REGEX.is_match(&credentials_table) {
            return Err(AuthenticationDomainError::InvalidCredentialsTable);
        }

        let statement = format!(
            "SELECT username::text AS username FROM {credentials_table} WHERE username = $1 AND passw = $2"
        );

        Ok(Self { pool, statement })
    }
}

#[async_trait]
impl UserCredentialsRepository for SqlxUserCredentialsRepositoryImpl {
    async fn find_username(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, AuthenticationDomainError> {
        let row = sqlx::query(&self.statement)
            .bind(username)
            .bind(password)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthenticationDomainError::InfrastructureError(e.to_string()))?;

        row.map(|row| row.try_get::<String, _>("username"))
            .transpose()
            .map_err(|e| AuthenticationDomainError::InfrastructureError(e.to_string()))
    }
}
