//! catalogctl - operator console for the catalog API
//!
//! Drives the same views a UI would: every command loads its view, runs one
//! command handler and prints the resulting snapshot.

mod commands;
mod logger;

use std::sync::Arc;

use catalog_client::ClientConfig;
use catalog_client::config::DEFAULT_TIMEOUT_SECS;
use clap::{Parser, Subcommand};

use commands::{CategoryAction, Console, ProductAction};

#[derive(Parser, Debug)]
#[command(name = "catalogctl")]
#[command(about = "Manage catalog categories and products")]
#[command(version)]
struct Cli {
    /// Catalog API base URL
    #[arg(long, env = "CATALOG_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Answer yes to delete confirmations
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Category management
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Product management
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Render the view behind a client route (e.g. /products/5)
    Open { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger(&cli.log_level, cli.json_logs)?;

    let mut config = ClientConfig::from_env().with_timeout(cli.timeout);
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }
    tracing::debug!(base_url = %config.base_url, timeout = config.timeout, "Client configured");

    let client = Arc::new(config.build_http_client()?);
    let console = Console::new(client, cli.yes);

    match cli.command {
        Command::Categories { action } => commands::categories::run(&console, action).await,
        Command::Products { action } => commands::products::run(&console, action).await,
        Command::Open { path } => commands::open::run(&console, &path).await,
    }
}
