//! HTTP transport to the Brewfather API

use super::debug::DebugRecorder;
use super::error::ApiError;
use crate::config::{AppConfig, Credentials};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

/// Raw request seam between the typed client and the network.
///
/// Paths are relative to the API base endpoint. Implementations map non-2xx
/// responses to [`ApiError::Upstream`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String, ApiError>;
    async fn patch(&self, path: &str, body: &Value) -> Result<(), ApiError>;
}

/// reqwest-backed transport using HTTP Basic authentication
#[derive(Clone)]
pub struct HttpTransport {
    endpoint: String,
    credentials: Credentials,
    http: Client,
    recorder: Option<DebugRecorder>,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            http: Client::new(),
            recorder: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let transport = Self::new(config.api.base_url.clone(), config.api.credentials.clone());
        if config.debug.enabled {
            transport.with_recorder(DebugRecorder::new(config.debug.dir.clone()))
        } else {
            transport
        }
    }

    pub fn with_recorder(mut self, recorder: DebugRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn checked(url: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::upstream(status.as_u16(), url, &body))
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String, ApiError> {
        let url = self.build_url(path);
        debug!(url = %url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .basic_auth(self.credentials.user_id(), Some(self.credentials.api_key()))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;
        let body = Self::checked(&url, response)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        if let Some(recorder) = &self.recorder {
            recorder.record("GET", path, query, &body).await;
        }
        Ok(body)
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let url = self.build_url(path);
        debug!(url = %url, %body, "PATCH");

        let response = self
            .http
            .patch(&url)
            .basic_auth(self.credentials.user_id(), Some(self.credentials.api_key()))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;
        Self::checked(&url, response).await?;
        Ok(())
    }
}
