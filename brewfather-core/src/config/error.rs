use thiserror::Error;

/// Errors that can occur when building the configuration at start-up
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable '{name}'")]
    MissingVariable { name: &'static str },

    #[error("invalid base URL '{url}': expected an http:// or https:// endpoint")]
    InvalidBaseUrl { url: String },
}
