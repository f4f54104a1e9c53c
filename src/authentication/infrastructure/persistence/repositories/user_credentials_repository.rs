use async_trait::async_trait;

use crate::authentication::domain::model::enums::authentication_domain_error::AuthenticationDomainError;

#[async_trait]
pub trait UserCredentialsRepository: Send + Sync {
    /// Stored username of the row matching both values, if any.
    async fn find_username(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, AuthenticationDomainError>;
}
