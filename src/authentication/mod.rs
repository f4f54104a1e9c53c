use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    authentication::{
        application::query_services::credential_check_service_impl::CredentialCheckServiceImpl,
        domain::{
            model::enums::authentication_domain_error::AuthenticationDomainError,
            services::credential_check_service::CredentialCheckService,
        },
        infrastructure::persistence::repositories::postgres::sqlx_user_credentials_repository_impl::SqlxUserCredentialsRepositoryImpl,
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_authentication_service(
    config: &AppConfig,
    pool: PgPool,
) -> Result<Arc<dyn CredentialCheckService>, AuthenticationDomainError> {
    let repository = Arc::new(SqlxUserCredentialsRepositoryImpl::new(
        pool,
        config.credentials_table.clone(),
    )?);

    Ok(Arc::new(CredentialCheckServiceImpl::new(repository)))
}
