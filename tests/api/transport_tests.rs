// Transport tests - the reqwest-backed client against a mock Brewfather API

use brewfather_core::api::{ApiError, ApiTransport, BrewfatherClient, HttpTransport, ListQuery};
use brewfather_core::config::Credentials;
use brewfather_core::domain::{BatchStatus, BatchUpdate, HopDetail, HopSummary, InventoryCategory};
use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::new(server.uri(), Credentials::new("brewer", "secret-key"))
}

fn client(server: &MockServer) -> BrewfatherClient {
    BrewfatherClient::new(transport(server))
}

fn hop(id: &str, name: &str) -> Value {
    json!({"_id": id, "name": name, "alpha": 5.0, "type": "Pellet", "inventory": 50})
}

// ============================================================================
// Authentication & Status Mapping
// ============================================================================

#[tokio::test]
async fn requests_carry_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/r1"))
        .and(basic_auth("brewer", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "r1"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = transport(&server).get("recipes/r1", &[]).await.unwrap();

    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["_id"], "r1");
}

#[tokio::test]
async fn missing_detail_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory/hops/h404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let err = client(&server).detail::<HopDetail>("h404").await.unwrap_err();

    assert!(matches!(err, ApiError::NotFound { kind: "hop", ref id } if id == "h404"));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_errors_keep_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/batches"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client(&server)
        .list::<brewfather_core::domain::BatchSummary>(ListQuery::new())
        .await
        .unwrap_err();

    match err {
        ApiError::Upstream { status, body, url } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
            assert!(url.ends_with("/batches"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_is_a_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory/hops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let err = client(&server)
        .list::<HopSummary>(ListQuery::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation { resource: "hop", .. }));
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn full_pages_are_followed_with_start_after() {
    let server = MockServer::start().await;
    let first: Vec<Value> = (0..50).map(|i| hop(&format!("h{i:02}"), "Cascade")).collect();
    Mock::given(method("GET"))
        .and(path("/inventory/hops"))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("start_after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(first)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/inventory/hops"))
        .and(query_param("start_after", "h49"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([hop("h50", "Saaz")])))
        .expect(1)
        .mount(&server)
        .await;

    let hops = client(&server)
        .list::<HopSummary>(ListQuery::new().in_stock())
        .await
        .unwrap();

    assert_eq!(hops.len(), 51);
    assert_eq!(hops[50].name, "Saaz");
}

#[tokio::test]
async fn status_filter_is_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/batches"))
        .and(query_param("status", "Fermenting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let batches = client(&server)
        .list::<brewfather_core::domain::BatchSummary>(
            ListQuery::new().with_status(BatchStatus::Fermenting),
        )
        .await
        .unwrap();

    assert!(batches.is_empty());
}

// ============================================================================
// Updates
// ============================================================================

#[tokio::test]
async fn inventory_update_patches_amount() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/inventory/yeasts/y1"))
        .and(body_json(json!({"inventory": 2.0})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_inventory(InventoryCategory::Yeasts, "y1", 2.0)
        .await
        .unwrap();
}

#[tokio::test]
async fn batch_update_sends_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/batches/b1"))
        .and(body_json(json!({"status": "Conditioning", "measuredOg": 1.05})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let update: BatchUpdate =
        serde_json::from_value(json!({"status": "Conditioning", "measuredOg": 1.05})).unwrap();

    client(&server).update_batch("b1", &update).await.unwrap();
}

#[tokio::test]
async fn empty_last_reading_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/batches/b1/readings/last"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let reading = client(&server).batch_last_reading("b1").await.unwrap();

    assert!(reading.is_none());
}
