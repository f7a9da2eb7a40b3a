use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use trivia_api::configuration::get_configuration;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file, `configuration.toml` is used when present
    #[clap(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let settings =
        get_configuration(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::info!("Opening database at {}", settings.database.path.display());
    let pool = establish_connection(&settings.database)
        .await
        .context("Failed to connect to the database")?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await.context("Migrations failed")?;

    run_server(pool, &settings.application).await
}
