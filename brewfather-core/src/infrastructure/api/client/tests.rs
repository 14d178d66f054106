use super::*;
use crate::domain::{BatchStatus, HopSummary};
use crate::infrastructure::api::stub::{Query, StubTransport};
use serde_json::{Value, json};

fn hops(range: std::ops::Range<usize>) -> Value {
    Value::Array(
        range
            .map(|i| json!({"_id": format!("hop-{i:03}"), "name": format!("Hop {i}"), "alpha": 5.0}))
            .collect(),
    )
}

fn query_value<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn list_parses_single_short_page() {
    let client = BrewfatherClient::new(StubTransport::new().respond("inventory/hops", hops(0..3)));

    let items: Vec<HopSummary> = client.list(ListQuery::new()).await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[2].name, "Hop 2");
    let gets = client.transport().gets().await;
    assert_eq!(gets.len(), 1);
    assert_eq!(query_value(&gets[0].1, "limit"), Some("50"));
    assert_eq!(query_value(&gets[0].1, "start_after"), None);
}

#[tokio::test]
async fn list_drains_pages_with_start_after() {
    let client = BrewfatherClient::new(
        StubTransport::new()
            .respond("inventory/hops", hops(0..50))
            .respond("inventory/hops", hops(50..53)),
    );

    let items: Vec<HopSummary> = client.list(ListQuery::new()).await.unwrap();

    assert_eq!(items.len(), 53);
    assert_eq!(items[52].id, "hop-052");
    let gets = client.transport().gets().await;
    assert_eq!(gets.len(), 2);
    assert_eq!(query_value(&gets[1].1, "start_after"), Some("hop-049"));
}

#[tokio::test]
async fn list_stops_at_page_cap() {
    let client =
        BrewfatherClient::new(StubTransport::new().always("inventory/hops", hops(0..50)));

    let items: Vec<HopSummary> = client.list(ListQuery::new()).await.unwrap();

    assert_eq!(items.len(), 50 * MAX_PAGES);
    assert_eq!(client.transport().gets().await.len(), MAX_PAGES);
}

#[tokio::test]
async fn list_rejects_whole_page_on_malformed_element() {
    let page = json!([
        {"_id": "h1", "name": "Cascade", "alpha": 5.5},
        {"_id": "h2", "name": "Broken"},
        {"_id": "h3", "name": "Saaz", "alpha": 3.0}
    ]);
    let client = BrewfatherClient::new(StubTransport::new().respond("inventory/hops", page));

    let err = client.list::<HopSummary>(ListQuery::new()).await.unwrap_err();

    match err {
        ApiError::Validation {
            resource,
            path,
            message,
        } => {
            assert_eq!(resource, "hop");
            assert_eq!(path, "[1]");
            assert!(message.contains("alpha"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_requires_array_body() {
    let client = BrewfatherClient::new(
        StubTransport::new().respond("inventory/hops", json!({"error": "nope"})),
    );

    let err = client.list::<HopSummary>(ListQuery::new()).await.unwrap_err();

    assert!(err.to_string().contains("expected an array, found an object"));
}

#[tokio::test]
async fn list_forwards_status_filter() {
    let client = BrewfatherClient::new(StubTransport::new().respond("batches", json!([])));

    let batches: Vec<crate::domain::BatchSummary> = client
        .list(ListQuery::new().with_status(BatchStatus::Completed))
        .await
        .unwrap();

    assert!(batches.is_empty());
    let gets = client.transport().gets().await;
    assert_eq!(query_value(&gets[0].1, "status"), Some("Completed"));
}

#[tokio::test]
async fn detail_maps_404_to_not_found() {
    let client = BrewfatherClient::new(StubTransport::new().fail("inventory/hops/missing", 404));

    let err = client.detail::<HopSummary>("missing").await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::NotFound { kind: "hop", ref id } if id == "missing"
    ));
}

#[tokio::test]
async fn detail_keeps_other_statuses_upstream() {
    let client = BrewfatherClient::new(StubTransport::new().fail("recipes/r1", 500));

    let err = client.detail::<RecipeDetail>("r1").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, ApiError::Upstream { .. }));
}

#[tokio::test]
async fn update_inventory_patches_inventory_field() {
    let client = BrewfatherClient::new(StubTransport::new());

    client
        .update_inventory(InventoryCategory::Fermentables, "default-08f456e", 5.0)
        .await
        .unwrap();

    let patches = client.transport().patches().await;
    assert_eq!(
        patches,
        vec![(
            "inventory/fermentables/default-08f456e".to_string(),
            json!({"inventory": 5.0})
        )]
    );
    assert!(client.transport().gets().await.is_empty());
}

#[tokio::test]
async fn update_batch_sends_only_set_fields() {
    let client = BrewfatherClient::new(StubTransport::new());
    let update = BatchUpdate {
        status: Some(BatchStatus::Completed),
        measured_fg: Some(1.012),
        ..BatchUpdate::default()
    };

    client.update_batch("b1", &update).await.unwrap();

    let patches = client.transport().patches().await;
    assert_eq!(patches[0].0, "batches/b1");
    assert_eq!(patches[0].1, json!({"status": "Completed", "measuredFg": 1.012}));
}

#[tokio::test]
async fn batch_with_reference_only_recipe_fetches_recipe() {
    let batch = json!({
        "_id": "b1",
        "name": "Batch",
        "batchNo": 7,
        "status": "Fermenting",
        "recipe": {"_id": "r1", "name": "Dry Stout"}
    });
    let recipe = json!({
        "_id": "r1",
        "name": "Dry Stout",
        "og": 1.042,
        "fermentables": [{"name": "Roasted Barley", "type": "Grain", "amount": 0.4}]
    });
    let client = BrewfatherClient::new(
        StubTransport::new()
            .respond("batches/b1", batch)
            .respond("recipes/r1", recipe),
    );

    let resolved = client.batch_with_recipe("b1").await.unwrap();

    assert_eq!(resolved.batch.status, BatchStatus::Fermenting);
    let recipe = resolved.recipe.unwrap();
    assert_eq!(recipe.og, Some(1.042));
    let paths: Vec<String> = client
        .transport()
        .gets()
        .await
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(paths, vec!["batches/b1", "recipes/r1"]);
}

#[tokio::test]
async fn batch_with_full_recipe_skips_recipe_fetch() {
    let batch = json!({
        "_id": "b1",
        "name": "Batch",
        "batchNo": 7,
        "recipe": {"_id": "r1", "name": "Dry Stout", "batchSize": 20.0}
    });
    let client = BrewfatherClient::new(StubTransport::new().respond("batches/b1", batch));

    let resolved = client.batch_with_recipe("b1").await.unwrap();

    assert_eq!(resolved.recipe.map(|r| r.summary.name), Some("Dry Stout".to_string()));
    assert_eq!(client.transport().gets().await.len(), 1);
}

#[tokio::test]
async fn last_reading_may_be_null() {
    let client = BrewfatherClient::new(
        StubTransport::new().respond("batches/b1/readings/last", Value::Null),
    );

    assert_eq!(client.batch_last_reading("b1").await.unwrap(), None);
}

#[tokio::test]
async fn readings_are_validated_per_element() {
    let readings = json!([
        {"time": 1704067200000i64, "type": "stream", "temp": 19.0},
        {"type": "stream"}
    ]);
    let client =
        BrewfatherClient::new(StubTransport::new().respond("batches/b1/readings", readings));

    let err = client.batch_readings("b1").await.unwrap_err();

    assert!(matches!(err, ApiError::Validation { ref path, .. } if path == "[1]"));
}
