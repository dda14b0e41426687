use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod output;
mod setup;

use cli::Cli;
use config::{app_config::AppConfig, database_config};
use persistence::db::{MIGRATIONS_PATH, run_migrations};
use setup::{dependency_injection::DependencyContainer, runner};

/// Outfit selector entry point
///
/// Loads configuration, wires the catalog adapter into the outfit use case,
/// runs one selection for the requested base item and prints the result as
/// JSON on stdout. Logs go to stderr.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    // 4. Initialize database
    let pool = database_config::init_database(&config.database).await?;
    if cli.run_migrations {
        run_migrations(&pool, MIGRATIONS_PATH).await?;
    }

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, config.rules);

    // 6. Run one selection
    let result = runner::run(&container, cli.into_request()).await;
    println!("{}", serde_json::to_string_pretty(&result.body)?);

    Ok(ExitCode::from(result.exit_code))
}
