use super::catalog::{DEFAULT_READINGS_LIMIT, Tool};
use super::error::ToolError;
use crate::domain::{BatchStatus, BatchUpdate};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(crate) struct IdentifierArgs {
    pub identifier: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemArgs {
    pub item_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeArgs {
    pub recipe_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchArgs {
    pub batch_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBatchesArgs {
    pub status: Option<BatchStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBatchArgs {
    pub batch_id: String,
    #[serde(flatten)]
    pub update: BatchUpdate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateInventoryArgs {
    pub item_id: String,
    pub inventory_amount: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReadingsArgs {
    pub batch_id: String,
    #[serde(default = "default_readings_limit")]
    pub limit: usize,
}

fn default_readings_limit() -> usize {
    DEFAULT_READINGS_LIMIT
}

/// Decodes tool arguments; absent or `null` arguments are an empty object.
pub(crate) fn decode<T: DeserializeOwned>(tool: Tool, arguments: Option<Value>) -> Result<T, ToolError> {
    let arguments = match arguments {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value @ Value::Object(_)) => value,
        Some(_) => {
            return Err(ToolError::invalid_arguments(
                tool.name(),
                "arguments must be an object",
            ));
        }
    };
    serde_json::from_value(arguments)
        .map_err(|err| ToolError::invalid_arguments(tool.name(), err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_required_argument_is_reported() {
        let err = decode::<BatchArgs>(Tool::GetBatchDetail, None).unwrap_err();

        assert!(err.is_request_error());
        assert!(err.to_string().contains("get_batch_detail"));
        assert!(err.to_string().contains("batch_id"));
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let err = decode::<ItemArgs>(Tool::GetMiscDetail, Some(json!(["x"]))).unwrap_err();

        assert!(err.to_string().contains("arguments must be an object"));
    }

    #[test]
    fn update_batch_collects_measured_values() {
        let args: UpdateBatchArgs = decode(
            Tool::UpdateBatch,
            Some(json!({"batch_id": "b1", "status": "Completed", "measuredFg": 1.01, "measuredOg": 1})),
        )
        .unwrap();

        assert_eq!(args.batch_id, "b1");
        assert_eq!(args.update.status, Some(BatchStatus::Completed));
        assert_eq!(args.update.measured_fg, Some(1.01));
        assert_eq!(args.update.measured_og, Some(1.0));
    }

    #[test]
    fn unknown_status_is_invalid() {
        let err = decode::<ListBatchesArgs>(Tool::ListBatches, Some(json!({"status": "Drinking"})))
            .unwrap_err();

        assert!(err.to_string().contains("unknown variant `Drinking`"));
    }

    #[test]
    fn readings_limit_defaults_to_ten() {
        let args: ReadingsArgs =
            decode(Tool::GetBatchReadingsSummary, Some(json!({"batch_id": "b1"}))).unwrap();

        assert_eq!(args.limit, 10);
    }
}
