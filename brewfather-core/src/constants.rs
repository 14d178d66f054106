//! Application constants
//!
//! Single source of truth for endpoints, environment variable names and limits.

/// Brewfather API v2 base endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.brewfather.app/v2";

/// Environment file loaded once at start-up
pub const ENV_PATH: &str = ".env";

pub const ENV_USER_ID: &str = "BREWFATHER_API_USER_ID";
pub const ENV_API_KEY: &str = "BREWFATHER_API_KEY";
pub const ENV_BASE_URL: &str = "BREWFATHER_API_BASE_URL";
pub const ENV_DEBUG: &str = "BREWFATHER_MCP_DEBUG";
pub const ENV_DEBUG_DIR: &str = "BREWFATHER_MCP_DEBUG_DIR";

/// Directory that receives raw API responses in debug mode
pub const DEFAULT_DEBUG_DIR: &str = "debug";

/// Largest page the upstream list endpoints accept
pub const PAGE_LIMIT: u32 = 50;

/// Upper bound on pages drained by a single list call
pub const MAX_PAGES: usize = 40;

/// MCP protocol revision advertised when the client does not request one
pub const PROTOCOL_VERSION: &str = "2025-06-18";

pub const SERVER_NAME: &str = "brewfather-mcp";
