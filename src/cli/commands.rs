//! CLI command implementations
//!
//! `serve` performs the whole boot sequence: load configuration once,
//! initialize tracing, connect the connection pool, wire
//! repository → use-case → server, and block on the serving loop.

use std::path::Path;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::repository::PgUserRepository;
use crate::usecase::UserService;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the requested command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config } => serve(&config).await,
    }
}

/// Boot the service and serve until interrupted
pub async fn serve(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    init_tracing(config.debug);

    if config.debug {
        tracing::info!("service running in debug mode");
    }

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.connection_url())
        .await?;

    let repository = Arc::new(PgUserRepository::new(pool));
    let usecase = Arc::new(UserService::new(repository, config.context_timeout()));
    let server = HttpServer::new(config.server.clone(), usecase);

    server.start().await?;
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
