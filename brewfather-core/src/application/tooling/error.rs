use crate::infrastructure::api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),
    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: &'static str, message: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ToolError {
    pub fn invalid_arguments(tool: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool,
            message: message.into(),
        }
    }

    /// Errors the caller caused by the shape of the request rather than by the call
    /// itself; these surface as JSON-RPC errors instead of tool results.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::UnknownTool(_) | Self::InvalidArguments { .. })
    }
}
