use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use brewfather_core::AppConfig;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "brewfather-mcp",
    version,
    about = "MCP server exposing a Brewfather account's inventory, recipes and batches"
)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,
    /// Bind address for the HTTP transport
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[arg(long, default_value_t = 8000)]
    pub port: u16,
    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
    /// Capture raw API responses to disk
    #[arg(long)]
    pub debug: bool,
    #[arg(long)]
    pub debug_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// JSON-RPC over HTTP (`POST /mcp`)
    Http,
}

impl Cli {
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Command-line debug flags win over the environment.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if self.debug {
            config.debug.enabled = true;
        }
        if let Some(dir) = &self.debug_dir {
            config.debug.dir = dir.clone();
        }
    }
}
