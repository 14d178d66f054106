pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{format, handler, stdio, tooling};
pub use config::{AppConfig, ConfigError};
pub use infrastructure::{api, rpc, server};

use application::handler::McpHandler;
use application::tooling::ToolRouter;
use infrastructure::api::BrewfatherClient;
use std::sync::Arc;
use tracing::info;

/// Wires the HTTP-backed client, tool router and MCP handler from configuration.
pub fn build_handler(config: &AppConfig) -> Arc<McpHandler> {
    info!(
        base_url = %config.api.base_url,
        debug = config.debug.enabled,
        "Creating Brewfather API client"
    );
    if config.debug.enabled {
        info!(dir = %config.debug.dir.display(), "Raw API responses will be captured");
    }
    let client = BrewfatherClient::from_config(config);
    Arc::new(McpHandler::new(ToolRouter::new(client)))
}
