// Debug capture tests - raw responses written to disk when debug mode is on

use brewfather_core::api::{BrewfatherClient, DebugRecorder, HttpTransport, ListQuery};
use brewfather_core::config::Credentials;
use brewfather_core::domain::FermentableSummary;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_responses_are_dumped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory/fermentables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "f1", "name": "Maris Otter", "type": "Grain", "inventory": 4.5}
        ])))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let recorder = DebugRecorder::new(dir.path().join("captures"));
    let client = BrewfatherClient::new(
        HttpTransport::new(server.uri(), Credentials::new("u", "k")).with_recorder(recorder.clone()),
    );

    let items = client
        .list::<FermentableSummary>(ListQuery::new().in_stock())
        .await
        .unwrap();
    assert_eq!(items.len(), 1);

    let query = ListQuery::new().in_stock().with_limit(50).to_pairs();
    let file = recorder.file_for("inventory/fermentables", &query);
    let dumped: Value = serde_json::from_slice(&std::fs::read(&file).unwrap()).unwrap();

    assert_eq!(dumped["method"], "GET");
    assert_eq!(dumped["path"], "inventory/fermentables");
    assert_eq!(dumped["query"]["limit"], "50");
    assert_eq!(dumped["response"][0]["name"], "Maris Otter");
}

#[tokio::test]
async fn failed_requests_are_not_dumped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let client = BrewfatherClient::new(
        HttpTransport::new(server.uri(), Credentials::new("u", "k"))
            .with_recorder(DebugRecorder::new(dir.path())),
    );

    assert!(client.batch_readings("b1").await.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
