use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::cli_args::CliArgs;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_database: String,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_schema: String,
    pub credentials_table: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),
            postgres_schema: std::env::var("POSTGRES_SCHEMA")
                .unwrap_or_else(|_| "public".to_string()),
            credentials_table: std::env::var("CREDENTIALS_TABLE")
                .unwrap_or_else(|_| "userscredentials".to_string()),
        }
    }

    /// Command-line values win over the environment.
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if let Some(host) = &args.host {
            self.postgres_host = host.clone();
        }
        if let Some(port) = args.port {
            self.postgres_port = port;
        }
        if let Some(database) = &args.database {
            self.postgres_database = database.clone();
        }
        if let Some(user) = &args.user {
            self.postgres_user = user.clone();
        }
        if let Some(password) = &args.password {
            self.postgres_password = password.clone();
        }
        if let Some(schema) = &args.schema {
            self.postgres_schema = schema.clone();
        }
        self
    }

    /// Connection URL without the password, for display and logs.
    pub fn display_url(&self) -> String {
        format!(
            "postgres://{}@{}:{}/{}",
            self.postgres_user, self.postgres_host, self.postgres_port, self.postgres_database
        )
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.postgres_host)
            .port(self.postgres_port)
            .username(&self.postgres_user)
            .password(&self.postgres_password)
            .database(&self.postgres_database)
    }

    /// Pool that connects on first use, so the console starts without a server.
    pub fn build_pool(&self) -> PgPool {
        PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(self.connect_options())
    }
}
