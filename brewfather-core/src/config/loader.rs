use super::error::ConfigError;
use super::{ApiConfig, AppConfig, Credentials, DebugConfig};
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_DEBUG_DIR, ENV_API_KEY, ENV_BASE_URL, ENV_DEBUG, ENV_DEBUG_DIR,
    ENV_PATH, ENV_USER_ID,
};
use dotenvy::from_filename;
use std::path::PathBuf;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Ensures environment variables are loaded from `.env`
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        if from_filename(ENV_PATH).is_ok() {
            debug!(path = ENV_PATH, "Loaded environment file");
        }
    });
}

/// Load configuration from the process environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    build_config(|name| std::env::var(name).ok())
}

/// Build configuration from an arbitrary variable lookup
pub(super) fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = |name: &str| {
        lookup(name)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
    };

    let user_id = value(ENV_USER_ID).ok_or(ConfigError::MissingVariable { name: ENV_USER_ID })?;
    let api_key = value(ENV_API_KEY).ok_or(ConfigError::MissingVariable { name: ENV_API_KEY })?;

    let base_url = value(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl { url: base_url });
    }

    let debug = DebugConfig {
        enabled: value(ENV_DEBUG).is_some_and(|flag| is_truthy(&flag)),
        dir: value(ENV_DEBUG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEBUG_DIR)),
    };

    Ok(AppConfig {
        api: ApiConfig {
            credentials: Credentials::new(user_id, api_key),
            base_url: base_url.trim_end_matches('/').to_string(),
        },
        debug,
    })
}

fn is_truthy(flag: &str) -> bool {
    !matches!(
        flag.to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
