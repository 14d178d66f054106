//! Process configuration
//!
//! Credentials and debug settings are read once at start-up into an [`AppConfig`]
//! value which is then passed by reference to the components that need it.

pub mod error;
pub mod loader;

pub use error::ConfigError;
pub use loader::ensure_env_loaded;

use std::fmt;
use std::path::PathBuf;

/// HTTP Basic credentials for the Brewfather API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user_id: String,
    api_key: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_key: api_key.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub credentials: Credentials,
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: crate::constants::DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Raw response capture for offline inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: PathBuf::from(crate::constants::DEFAULT_DEBUG_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Reads `.env` (once) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        loader::load_config()
    }

    /// Builds the configuration from a variable lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        loader::build_config(lookup)
    }
}
