use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::authentication::{
    domain::{
        model::{
            enums::{
                authentication_domain_error::AuthenticationDomainError,
                login_outcome::LoginOutcome,
            },
            queries::check_credentials_query::CheckCredentialsQuery,
        },
        services::credential_check_service::CredentialCheckService,
    },
    infrastructure::persistence::repositories::user_credentials_repository::UserCredentialsRepository,
};

pub struct CredentialCheckServiceImpl {
    credentials_repository: Arc<dyn UserCredentialsRepository>,
}

impl CredentialCheckServiceImpl {
    pub fn new(credentials_repository: Arc<dyn UserCredentialsRepository>) -> Self {
        Self {
            credentials_repository,
        }
    }
}

#[async_trait]
impl CredentialCheckService for CredentialCheckServiceImpl {
    async fn handle_check(
        &self,
        query: CheckCredentialsQuery,
    ) -> Result<LoginOutcome, AuthenticationDomainError> {
        let found = self
            .credentials_repository
            .find_username(query.username(), query.password())
            .await
            .inspect_err(|e| error!(error = %e, "login check failed"))?;

        match found {
            Some(username) => {
                info!(username = %username, "successful login");
                Ok(LoginOutcome::Granted { username })
            }
            None => {
                warn!(username = query.username(), "failed login attempt");
                Ok(LoginOutcome::Denied)
            }
        }
    }
}
