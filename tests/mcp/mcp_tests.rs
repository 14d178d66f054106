// MCP tests - JSON-RPC requests through the handler against a mock Brewfather API

use brewfather_core::handler::McpHandler;
use brewfather_core::{AppConfig, build_handler};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn handler_for(server: &MockServer) -> Arc<McpHandler> {
    let base_url = server.uri();
    let config = AppConfig::from_lookup(|name| match name {
        "BREWFATHER_API_USER_ID" => Some("brewer".to_string()),
        "BREWFATHER_API_KEY" => Some("secret".to_string()),
        "BREWFATHER_API_BASE_URL" => Some(base_url.clone()),
        _ => None,
    })
    .unwrap();
    build_handler(&config)
}

async fn call_tool(handler: &McpHandler, name: &str, arguments: Value) -> Value {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments},
    });
    let response = handler
        .handle_message(&request.to_string())
        .await
        .expect("requests always get a response");
    serde_json::to_value(response).unwrap()
}

fn text_of(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

// ============================================================================
// Tool Calls
// ============================================================================

#[tokio::test]
async fn list_hops_renders_upstream_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory/hops"))
        .and(query_param("inventory_exists", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "h1", "name": "Citra", "alpha": 12.5, "type": "Pellet", "inventory": 250}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let response = call_tool(&handler, "list_hops", json!({})).await;

    assert_eq!(response["id"], 7);
    assert_eq!(response["result"]["isError"], false);
    assert!(text_of(&response).contains("Citra"));
    assert!(text_of(&response).contains("12.5"));
}

#[tokio::test]
async fn update_misc_inventory_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/inventory/miscs/m1"))
        .and(body_json(json!({"inventory": 12.0})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let response = call_tool(
        &handler,
        "update_misc_inventory",
        json!({"item_id": "m1", "inventory_amount": 12}),
    )
    .await;

    assert_eq!(response["result"]["isError"], false);
    assert!(text_of(&response).contains("m1"));
}

#[tokio::test]
async fn upstream_error_is_reported_as_tool_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/batches/b1/brewtracker"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let response = call_tool(&handler, "get_batch_brewtracker", json!({"batch_id": "b1"})).await;

    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);
    assert!(text_of(&response).contains("HTTP 401"));
}

#[tokio::test]
async fn missing_recipe_is_reported_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let response = call_tool(&handler, "get_recipe_detail", json!({"recipe_id": "nope"})).await;

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(text_of(&response), "recipe 'nope' was not found");
}

#[tokio::test]
async fn last_reading_without_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/batches/b2/readings/last"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let response = call_tool(&handler, "get_batch_last_reading", json!({"batch_id": "b2"})).await;

    assert_eq!(
        text_of(&response),
        "No sensor readings available for batch b2."
    );
}

#[tokio::test]
async fn invalid_arguments_never_reach_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let response = call_tool(
        &handler,
        "update_hop_inventory",
        json!({"item_id": "h1", "inventory_amount": "lots"}),
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
}

// ============================================================================
// Protocol
// ============================================================================

#[tokio::test]
async fn initialize_then_list_tools() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let init = handler
        .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-06-18","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#)
        .await
        .unwrap();
    let init = serde_json::to_value(init).unwrap();
    assert_eq!(init["result"]["serverInfo"]["name"], "brewfather-mcp");

    let initialized = handler
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;
    assert!(initialized.is_none());

    let tools = handler
        .handle_message(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
        .await
        .unwrap();
    let tools = serde_json::to_value(tools).unwrap();
    let names: Vec<&str> = tools["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|tool| tool["name"].as_str())
        .collect();
    assert!(names.contains(&"list_fermentables"));
    assert!(names.contains(&"get_batch_readings_summary"));
}
