//! MCP method handling shared by the stdio and HTTP transports

use crate::application::tooling::{ToolRouter, get_prompt, prompt_descriptors, tool_descriptors};
use crate::constants::{PROTOCOL_VERSION, SERVER_NAME};
use crate::infrastructure::api::{ApiTransport, HttpTransport};
use crate::infrastructure::rpc::{RpcRequest, RpcResponse};
use serde_json::{Value, json};
use tracing::{debug, warn};

const INSTRUCTIONS: &str = "Tools for a Brewfather account: list and inspect inventory \
(fermentables, hops, yeasts, miscellaneous items), recipes and batches, update inventory \
amounts and batch measurements, and follow brew-day trackers and fermentation sensor readings.";

pub struct McpHandler<T = HttpTransport> {
    tools: ToolRouter<T>,
}

impl<T: ApiTransport> McpHandler<T> {
    pub fn new(tools: ToolRouter<T>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &ToolRouter<T> {
        &self.tools
    }

    /// Handles one raw JSON-RPC message. Returns `None` for notifications.
    pub async fn handle_message(&self, raw: &str) -> Option<RpcResponse> {
        let request: RpcRequest = match serde_json::from_str(raw) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "Discarding malformed JSON-RPC message");
                return Some(RpcResponse::parse_error(err));
            }
        };
        self.handle(request).await
    }

    /// Handles one decoded request. Returns `None` for notifications.
    pub async fn handle(&self, request: RpcRequest) -> Option<RpcResponse> {
        debug!(method = %request.method, "Received JSON-RPC request");

        if request.jsonrpc != "2.0" {
            return Some(RpcResponse::invalid_request(
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }
        if request.method.is_empty() {
            return Some(RpcResponse::invalid_request("Missing method"));
        }
        if request.is_notification() {
            debug!(method = %request.method, "Notification acknowledged");
            return None;
        }

        let id = request.id.clone();
        let response = match request.method.as_str() {
            "initialize" => RpcResponse::success(id, initialize_result(request.params.as_ref())),
            "ping" => RpcResponse::success(id, json!({})),
            "tools/list" => RpcResponse::success(id, json!({ "tools": tool_descriptors() })),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            "prompts/list" => {
                RpcResponse::success(id, json!({ "prompts": prompt_descriptors() }))
            }
            "prompts/get" => handle_prompt_get(id, request.params.as_ref()),
            other => {
                warn!(method = other, "Unknown JSON-RPC method");
                RpcResponse::method_not_found(id, other)
            }
        };
        Some(response)
    }

    async fn handle_tool_call(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let Some(Value::Object(mut params)) = params else {
            return RpcResponse::invalid_params(id, "params must be an object with name");
        };
        let name = match params.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return RpcResponse::invalid_params(id, "params.name must be a non-empty string"),
        };
        let arguments = params.remove("arguments");

        match self.tools.call(&name, arguments).await {
            Ok(text) => RpcResponse::success(id, tool_result(&text, false)),
            Err(err) if err.is_request_error() => RpcResponse::invalid_params(id, err.to_string()),
            Err(err) => RpcResponse::success(id, tool_result(&err.to_string(), true)),
        }
    }
}

fn tool_result(text: &str, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}

fn initialize_result(params: Option<&Value>) -> Value {
    let protocol_version = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(PROTOCOL_VERSION);
    json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": {},
            "prompts": {},
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "instructions": INSTRUCTIONS,
    })
}

fn handle_prompt_get(id: Option<Value>, params: Option<&Value>) -> RpcResponse {
    let Some(name) = params.and_then(|p| p.get("name")).and_then(Value::as_str) else {
        return RpcResponse::invalid_params(id, "params.name must be a string");
    };
    match get_prompt(name) {
        Some(prompt) => match serde_json::to_value(prompt) {
            Ok(value) => RpcResponse::success(id, value),
            Err(err) => RpcResponse::internal_error(id, err),
        },
        None => RpcResponse::invalid_params(id, format!("Unknown prompt '{name}'")),
    }
}
