//! Raw response capture used when debug mode is enabled

use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct DebugRecorder {
    dir: PathBuf,
}

impl DebugRecorder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a captured call is written to
    pub fn file_for(&self, path: &str, query: &[(String, String)]) -> PathBuf {
        self.dir.join(format!("{}.json", capture_key(path, query)))
    }

    /// Writes the request and raw body. Failures are logged and otherwise ignored.
    pub async fn record(&self, method: &str, path: &str, query: &[(String, String)], body: &str) {
        let file = self.file_for(path, query);
        let response = serde_json::from_str::<Value>(body).unwrap_or_else(|_| json!(body));
        let query: serde_json::Map<String, Value> = query
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let document = json!({
            "method": method,
            "path": path,
            "query": query,
            "response": response,
        });

        let contents = match serde_json::to_vec_pretty(&document) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(error = %err, path, "Failed to encode debug capture");
                return;
            }
        };
        if let Err(err) = tokio::fs::create_dir_all(&self.dir).await {
            warn!(error = %err, dir = %self.dir.display(), "Failed to create debug directory");
            return;
        }
        match tokio::fs::write(&file, contents).await {
            Ok(()) => debug!(file = %file.display(), "Captured API response"),
            Err(err) => warn!(error = %err, file = %file.display(), "Failed to write debug capture"),
        }
    }
}

/// File-system safe name derived from the request path and query.
pub fn capture_key(path: &str, query: &[(String, String)]) -> String {
    let mut raw = path.trim_matches('/').to_string();
    for (key, value) in query {
        raw.push('_');
        raw.push_str(key);
        raw.push('-');
        raw.push_str(value);
    }
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_encodes_path_and_query() {
        assert_eq!(capture_key("inventory/hops", &[]), "inventory_hops");
        assert_eq!(
            capture_key(
                "batches/b 1/readings",
                &[("limit".to_string(), "50".to_string())]
            ),
            "batches_b_1_readings_limit-50"
        );
    }

    #[tokio::test]
    async fn record_writes_request_and_response() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = DebugRecorder::new(dir.path().join("captures"));
        recorder
            .record("GET", "recipes/r1", &[], r#"{"_id":"r1","name":"Stout"}"#)
            .await;

        let written = std::fs::read_to_string(dir.path().join("captures/recipes_r1.json")).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["path"], "recipes/r1");
        assert_eq!(value["response"]["name"], "Stout");
    }

    #[tokio::test]
    async fn unwritable_directory_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let recorder = DebugRecorder::new(blocker.join("nested"));
        recorder.record("GET", "batches", &[], "[]").await;
        assert!(!blocker.join("nested").exists());
    }
}
