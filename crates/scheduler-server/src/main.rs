use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use scheduler_core::clock::SystemClock;
use scheduler_core::db;
use scheduler_core::repository::SqliteRepository;
use scheduler_server::api::{self, AppState};
use scheduler_server::config::{Cli, ServerConfig};
use scheduler_server::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&config.log_level);

    if let Err(e) = run(config).await {
        tracing::error!(error = ?e, "scheduler server failed");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let pool = db::establish_connection(&config.dbfile)
        .await
        .with_context(|| format!("failed to open database '{}'", config.dbfile))?;

    let state = Arc::new(AppState::new(
        Arc::new(SqliteRepository::new(pool.clone())),
        Arc::new(SystemClock),
    ));
    let app = api::router(state, &config.web_dir);

    let (addr, handle) = api::start_server(&config.bind_addr(), app, api::shutdown_signal())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    tracing::info!(%addr, web_dir = %config.web_dir.display(), "scheduler server listening");

    handle
        .await
        .context("server task panicked")?
        .context("server stopped with an error")?;
    pool.close().await;
    tracing::info!("scheduler server stopped");
    Ok(())
}
