use std::io::{self, BufReader};

use clap::Parser;
use dotenvy::dotenv;
use table_console::{
    authentication::{
        build_authentication_service,
        interfaces::console::controllers::authentication_console_controller::AuthenticationConsoleController,
    },
    config::{app_config::AppConfig, cli_args::CliArgs},
    init_tracing,
    schema_catalog::{
        build_schema_catalog_services,
        interfaces::console::controllers::schema_catalog_console_controller::SchemaCatalogConsoleController,
    },
    shared::interfaces::console::{console_io::ConsoleIo, main_menu::MainMenu},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let args = CliArgs::parse();
    init_tracing();

    let config = AppConfig::from_env().with_overrides(&args);
    let pool = config.build_pool();
    info!(database = %config.display_url(), "console starting");

    let schema_catalog = build_schema_catalog_services(&config, pool.clone())?;
    let credential_check_service = build_authentication_service(&config, pool.clone())?;

    let menu = MainMenu {
        schema_catalog: SchemaCatalogConsoleController {
            command_service: schema_catalog.command_service,
            query_service: schema_catalog.query_service,
            database_name: config.postgres_database.clone(),
            connection_label: config.display_url(),
        },
        authentication: AuthenticationConsoleController {
            credential_check_service,
        },
    };

    let mut console = ConsoleIo::new(BufReader::new(io::stdin()), io::stdout());
    menu.run(&mut console).await?;

    pool.close().await;
    info!("database connection closed");

    Ok(())
}
