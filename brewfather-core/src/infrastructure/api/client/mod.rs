//! Typed Brewfather API client

use crate::config::AppConfig;
use crate::constants::{MAX_PAGES, PAGE_LIMIT};
use crate::domain::tracker::{brewtracker_path, last_reading_path, readings_path};
use crate::domain::{
    BatchDetail, BatchReading, BatchUpdate, BrewTracker, InventoryCategory, RecipeDetail,
    Resource,
};
use crate::infrastructure::api::error::ApiError;
use crate::infrastructure::api::query::ListQuery;
use crate::infrastructure::api::transport::{ApiTransport, HttpTransport};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

/// A batch together with its resolved recipe
#[derive(Debug, Clone, PartialEq)]
pub struct BatchWithRecipe {
    pub batch: BatchDetail,
    pub recipe: Option<RecipeDetail>,
}

pub struct BrewfatherClient<T = HttpTransport> {
    transport: T,
}

impl BrewfatherClient<HttpTransport> {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(HttpTransport::from_config(config))
    }
}

impl<T: ApiTransport> BrewfatherClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists every document of a collection, following `start_after` pages until a
    /// short page is returned.
    pub async fn list<R: Resource>(&self, query: ListQuery) -> Result<Vec<R>, ApiError> {
        let limit = query.limit.unwrap_or(PAGE_LIMIT);
        let mut query = query.with_limit(limit);
        let mut items = Vec::new();

        for page_no in 0..MAX_PAGES {
            let page = self.fetch_array(R::PATH, R::KIND, &query.to_pairs()).await?;
            let page_len = page.len();
            let last_id = page
                .last()
                .and_then(|doc| doc.get("_id"))
                .and_then(Value::as_str)
                .map(str::to_string);

            for doc in page {
                let index = items.len();
                items.push(parse_element::<R>(R::KIND, index, doc)?);
            }
            debug!(path = R::PATH, page = page_no, page_len, total = items.len(), "Fetched page");

            match last_id {
                Some(id) if page_len >= limit as usize => query.start_after = Some(id),
                _ => return Ok(items),
            }
        }

        warn!(path = R::PATH, pages = MAX_PAGES, total = items.len(), "Page cap reached");
        Ok(items)
    }

    /// Lists detail documents through the upstream `complete=true` list mode.
    pub async fn list_complete<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        self.list(ListQuery::new().complete()).await
    }

    pub async fn detail<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        let path = format!("{}/{}", R::PATH, id);
        let body = self
            .transport
            .get(&path, &[])
            .await
            .map_err(|e| e.or_not_found(R::KIND, id))?;
        parse_document(R::KIND, &body)
    }

    pub async fn update_inventory(
        &self,
        category: InventoryCategory,
        id: &str,
        amount: f64,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}", category.path(), id);
        self.transport
            .patch(&path, &json!({ "inventory": amount }))
            .await
            .map_err(|e| e.or_not_found(category.noun(), id))
    }

    pub async fn update_batch(&self, id: &str, update: &BatchUpdate) -> Result<(), ApiError> {
        let body = serde_json::to_value(update)
            .map_err(|e| ApiError::validation(BatchDetail::KIND, "$", &e))?;
        let path = format!("{}/{}", BatchDetail::PATH, id);
        self.transport
            .patch(&path, &body)
            .await
            .map_err(|e| e.or_not_found(BatchDetail::KIND, id))
    }

    /// Fetches a batch and, when it only references its recipe, the recipe itself.
    pub async fn batch_with_recipe(&self, id: &str) -> Result<BatchWithRecipe, ApiError> {
        let batch: BatchDetail = self.detail(id).await?;
        if let Some(recipe) = batch.full_recipe() {
            let recipe = recipe.clone();
            return Ok(BatchWithRecipe {
                batch,
                recipe: Some(recipe),
            });
        }

        let recipe = match batch.recipe_reference() {
            Some(recipe_id) => {
                debug!(batch = id, recipe = recipe_id, "Resolving referenced recipe");
                Some(self.detail::<RecipeDetail>(recipe_id).await?)
            }
            None => None,
        };
        Ok(BatchWithRecipe { batch, recipe })
    }

    pub async fn batch_brewtracker(&self, id: &str) -> Result<BrewTracker, ApiError> {
        let body = self
            .transport
            .get(&brewtracker_path(id), &[])
            .await
            .map_err(|e| e.or_not_found("brew tracker for batch", id))?;
        parse_document("brew tracker", &body)
    }

    pub async fn batch_readings(&self, id: &str) -> Result<Vec<BatchReading>, ApiError> {
        let docs = self
            .fetch_array(&readings_path(id), "readings", &[])
            .await
            .map_err(|e| e.or_not_found("readings for batch", id))?;
        docs.into_iter()
            .enumerate()
            .map(|(index, doc)| parse_element("reading", index, doc))
            .collect()
    }

    /// Most recent reading; `None` when the batch has no readings yet.
    pub async fn batch_last_reading(&self, id: &str) -> Result<Option<BatchReading>, ApiError> {
        let body = self
            .transport
            .get(&last_reading_path(id), &[])
            .await
            .map_err(|e| e.or_not_found("readings for batch", id))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        parse_document("reading", &body)
    }

    async fn fetch_array(
        &self,
        path: &str,
        resource: &'static str,
        query: &[(String, String)],
    ) -> Result<Vec<Value>, ApiError> {
        let body = self.transport.get(path, query).await?;
        match parse_document::<Value>(resource, &body)? {
            Value::Array(docs) => Ok(docs),
            other => Err(ApiError::Validation {
                resource,
                path: "$".to_string(),
                message: format!("expected an array, found {}", json_kind(&other)),
            }),
        }
    }
}

fn parse_document<D: DeserializeOwned>(resource: &'static str, body: &str) -> Result<D, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::validation(resource, "$", &e))
}

fn parse_element<D: DeserializeOwned>(
    resource: &'static str,
    index: usize,
    doc: Value,
) -> Result<D, ApiError> {
    serde_json::from_value(doc).map_err(|e| ApiError::validation(resource, format!("[{index}]"), &e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests;
