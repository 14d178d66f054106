//! Scripted transport for unit tests

use crate::infrastructure::api::error::ApiError;
use crate::infrastructure::api::transport::ApiTransport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

pub(crate) type Query = Vec<(String, String)>;

/// Scripted transport: queued bodies per path, recorded requests.
#[derive(Default)]
pub(crate) struct StubTransport {
    queued: Mutex<HashMap<String, VecDeque<Result<String, u16>>>>,
    fallback: HashMap<String, String>,
    gets: Mutex<Vec<(String, Query)>>,
    patches: Mutex<Vec<(String, Value)>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, path: &str, body: Value) -> Self {
        self.enqueue(path, Ok(body.to_string()))
    }

    pub(crate) fn fail(self, path: &str, status: u16) -> Self {
        self.enqueue(path, Err(status))
    }

    pub(crate) fn always(mut self, path: &str, body: Value) -> Self {
        self.fallback.insert(path.to_string(), body.to_string());
        self
    }

    fn enqueue(self, path: &str, response: Result<String, u16>) -> Self {
        self.queued
            .try_lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub(crate) async fn gets(&self) -> Vec<(String, Query)> {
        self.gets.lock().await.clone()
    }

    pub(crate) async fn patches(&self) -> Vec<(String, Value)> {
        self.patches.lock().await.clone()
    }
}

#[async_trait]
impl ApiTransport for StubTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String, ApiError> {
        self.gets
            .lock()
            .await
            .push((path.to_string(), query.to_vec()));
        let next = self
            .queued
            .lock()
            .await
            .get_mut(path)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Ok(body)) => Ok(body),
            Some(Err(status)) => Err(ApiError::upstream(status, path, "scripted failure")),
            None => match self.fallback.get(path) {
                Some(body) => Ok(body.clone()),
                None => Err(ApiError::upstream(404, path, "not scripted")),
            },
        }
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.patches
            .lock()
            .await
            .push((path.to_string(), body.clone()));
        Ok(())
    }
}

