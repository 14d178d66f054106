mod cli;

use brewfather_core::server::ServerError;
use brewfather_core::stdio::StdioError;
use brewfather_core::{AppConfig, ConfigError, build_handler, server, stdio};
use clap::Parser;
use cli::{Cli, Transport};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Stdio(#[from] StdioError),
    #[error(transparent)]
    Server(#[from] ServerError),
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "brewfather-mcp terminated");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), RunError> {
    info!("Starting brewfather-mcp");
    debug!(transport = ?cli.transport, debug = cli.debug, "CLI arguments parsed");

    let mut config = AppConfig::load()?;
    cli.apply_overrides(&mut config);
    let handler = build_handler(&config);

    match cli.transport {
        Transport::Stdio => stdio::run(handler).await?,
        Transport::Http => {
            let addr = cli.http_addr();
            info!(%addr, "Starting HTTP transport");
            server::serve(handler, addr).await?;
        }
    }
    info!("Server stopped");
    Ok(())
}

/// Logs go to stderr; stdout carries the stdio protocol.
fn init_tracing(default_level: &str) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
