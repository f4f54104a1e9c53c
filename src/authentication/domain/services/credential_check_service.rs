use async_trait::async_trait;

use crate::authentication::domain::model::{
    enums::{authentication_domain_error::AuthenticationDomainError, login_outcome::LoginOutcome},
    queries::check_credentials_query::CheckCredentialsQuery,
};

#[async_trait]
pub trait CredentialCheckService: Send + Sync {
    async fn handle_check(
        &self,
        query: CheckCredentialsQuery,
    ) -> Result<LoginOutcome, AuthenticationDomainError>;
}
