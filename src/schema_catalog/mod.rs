use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    schema_catalog::{
        application::{
            command_services::table_catalog_command_service_impl::TableCatalogCommandServiceImpl,
            query_services::table_catalog_query_service_impl::TableCatalogQueryServiceImpl,
        },
        domain::{
            model::{
                enums::schema_catalog_domain_error::SchemaCatalogDomainError,
                value_objects::table_name::SQL_IDENTIFIER_REGEX,
            },
            services::{
                table_catalog_command_service::TableCatalogCommandService,
                table_catalog_query_service::TableCatalogQueryService,
            },
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_metadata_source_impl::SqlxMetadataSourceImpl,
            sqlx_table_administration_repository_impl::SqlxTableAdministrationRepositoryImpl,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

#[derive(Clone)]
pub struct SchemaCatalogServices {
    pub command_service: Arc<dyn TableCatalogCommandService>,
    pub query_service: Arc<dyn TableCatalogQueryService>,
}

pub fn build_schema_catalog_services(
    config: &AppConfig,
    pool: PgPool,
) -> Result<SchemaCatalogServices, SchemaCatalogDomainError> {
    if !SQL_IDENTIFIER_REGEX.is_match(&config.postgres_schema) {
        return Err(SchemaCatalogDomainError::InvalidArgument(format!(
            "schema name '{}' is not a plain identifier",
            config.postgres_schema
        )));
    }

    let metadata_source = Arc::new(SqlxMetadataSourceImpl::new(
        pool.clone(),
        config.postgres_schema.clone(),
    ));
    let administration_repository = Arc::new(SqlxTableAdministrationRepositoryImpl::new(
        pool,
        config.postgres_schema.clone(),
    ));

    let command_service = Arc::new(TableCatalogCommandServiceImpl::new(
        administration_repository.clone(),
    ));
    let query_service = Arc::new(TableCatalogQueryServiceImpl::new(
        metadata_source,
        administration_repository,
    ));

    Ok(SchemaCatalogServices {
        command_service,
        query_service,
    })
}
