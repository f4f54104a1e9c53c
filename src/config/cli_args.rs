use clap::Parser;

/// Console tool to create, drop and inspect PostgreSQL tables.
///
/// Unset flags fall back to the POSTGRES_* environment variables (a `.env`
/// file is read first).
#[derive(Clone, Debug, Default, Parser)]
#[command(name = "table-console", version, about)]
pub struct CliArgs {
    /// Server host
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database name
    #[arg(short, long)]
    pub database: Option<String>,

    /// Login role
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password of the login role
    #[arg(long)]
    pub password: Option<String>,

    /// Schema whose tables are listed and introspected
    #[arg(long)]
    pub schema: Option<String>,
}
