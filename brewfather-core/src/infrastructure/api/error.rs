use thiserror::Error;

/// Longest upstream body kept in an error message
const BODY_EXCERPT_LEN: usize = 500;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{kind} '{id}' was not found")]
    NotFound { kind: &'static str, id: String },
    #[error("invalid {resource} response at {path}: {message}")]
    Validation {
        resource: &'static str,
        path: String,
        message: String,
    },
    #[error("Brewfather API returned HTTP {status} for {url}: {body}")]
    Upstream {
        status: u16,
        url: String,
        body: String,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn validation(
        resource: &'static str,
        path: impl Into<String>,
        source: &serde_json::Error,
    ) -> Self {
        Self::Validation {
            resource,
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn upstream(status: u16, url: impl Into<String>, body: &str) -> Self {
        Self::Upstream {
            status,
            url: url.into(),
            body: excerpt(body),
        }
    }

    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// HTTP status reported by the upstream, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Turns an upstream 404 into `NotFound` for the given resource.
    pub(crate) fn or_not_found(self, kind: &'static str, id: &str) -> Self {
        match self {
            Self::Upstream { status: 404, .. } => Self::not_found(kind, id),
            other => other,
        }
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= BODY_EXCERPT_LEN {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(BODY_EXCERPT_LEN).collect();
    format!("{cut}...")
}
