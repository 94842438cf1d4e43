use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt as _;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt as _;

use plant_catalog_core::{Nursery, Plant, PlantLink};
use plant_catalog_storage::{NurseryStore as _, PlantLinkStore as _, PlantStore as _, Storage};

use crate::{AppState, create_router};

fn test_app() -> (Router, Arc<Storage>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(Storage::new(&temp_dir.path().join("catalog.db")).unwrap());
    let router = create_router(Arc::new(AppState::new(Arc::clone(&storage))));
    (router, storage, temp_dir)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

#[tokio::test]
async fn health_is_ok() {
    let (router, _storage, _temp_dir) = test_app();
    let (status, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));
}

#[tokio::test]
async fn plants_are_listed_by_common_name() {
    let (router, storage, _temp_dir) = test_app();
    for name in ["Zinnia", "Aster", "Marigold"] {
        storage.save_plant(&Plant::builder(name).build()).unwrap();
    }

    let (status, body) = get(router, "/api/plants?page=1&page_size=2").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> =
        body["data"].as_array().unwrap().iter().map(|p| p["name_common"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Aster", "Marigold"]);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["num_pages"], 2);
    assert_eq!(body["pagination"]["has_next"], true);
}

#[tokio::test]
async fn junk_page_falls_back_to_first_page() {
    let (router, storage, _temp_dir) = test_app();
    storage.save_plant(&Plant::builder("Aster").build()).unwrap();
    let (status, body) = get(router, "/api/plants?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let (router, storage, _temp_dir) = test_app();
    storage.save_plant(&Plant::builder("Aster").build()).unwrap();
    let (status, body) = get(router, "/api/plants?page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["has_next"], false);
    assert_eq!(body["pagination"]["has_previous"], true);
}

#[tokio::test]
async fn plant_detail_includes_related_records() {
    let (router, storage, _temp_dir) = test_app();
    let plant = storage.save_plant(&Plant::builder("Lavender").build()).unwrap();
    let plant_id = plant.id.unwrap();
    let link = storage
        .save_link(&PlantLink::new("Growing lavender", "https://example.org/lavender", "bl"))
        .unwrap();
    storage.link_plants(link.id.unwrap(), &[plant_id]).unwrap();
    let nursery = storage.save_nursery(&Nursery::new("Herb Farm")).unwrap();
    storage.stock_plants(nursery.id.unwrap(), &[plant_id]).unwrap();

    let (status, body) = get(router, &format!("/api/plants/{plant_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plant"]["name_common"], "Lavender");
    assert_eq!(body["links"][0]["title"], "Growing lavender");
    assert_eq!(body["links"][0]["type"], "bl");
    assert_eq!(body["nurseries"][0]["name"], "Herb Farm");
}

#[tokio::test]
async fn missing_plant_is_404_with_json_error() {
    let (router, _storage, _temp_dir) = test_app();
    let (status, body) = get(router.clone(), "/api/plants/4242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "plant '4242' not found"}));

    let (status, _body) = get(router, "/api/plants/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn actions_are_grouped_by_entity() {
    let (router, _storage, _temp_dir) = test_app();
    let (status, body) = get(router, "/api/admin/actions").await;
    assert_eq!(status, StatusCode::OK);
    for entity in ["plant", "link", "nursery"] {
        assert_eq!(body[entity][0]["name"], "duplicate_selected");
        assert_eq!(body[entity][0]["description"], "Duplicate selected items");
    }
}

#[tokio::test]
async fn duplicate_action_creates_copies() {
    let (router, storage, _temp_dir) = test_app();
    let plant = storage.save_plant(&Plant::builder("Tomato").build()).unwrap();

    let (status, body) = post_json(
        router,
        "/api/admin/plant/duplicate_selected",
        &json!({"ids": [plant.id.unwrap()]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["entity"], "plant");
    let created = body["created"][0].as_i64().unwrap();
    let copy = storage.get_plant(created).unwrap().unwrap();
    assert_eq!(copy.name_common, "[COPY] Tomato");
}

#[tokio::test]
async fn admin_errors_map_to_statuses() {
    let (router, _storage, _temp_dir) = test_app();
    let (status, _) =
        post_json(router.clone(), "/api/admin/plant/duplicate_selected", &json!({"ids": []}))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        post_json(router.clone(), "/api/admin/garden/duplicate_selected", &json!({"ids": [1]}))
            .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        post_json(router.clone(), "/api/admin/plant/shred", &json!({"ids": [1]})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) =
        post_json(router, "/api/admin/nursery/duplicate_selected", &json!({"ids": [77]})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "nursery '77' not found"}));
}

#[tokio::test]
async fn schema_reports_full_chain_applied() {
    let (router, _storage, _temp_dir) = test_app();
    let (status, body) = get(router, "/api/schema").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], body["target"]);
    assert_eq!(body["migrations"][0]["name"], "0001_initial");
}

#[tokio::test]
async fn links_and_nurseries_are_listed() {
    let (router, storage, _temp_dir) = test_app();
    storage.save_link(&PlantLink::new("Rose care", "https://example.org/rose", "mg")).unwrap();
    storage.save_nursery(&Nursery::new("Rose Emporium")).unwrap();

    let (status, body) = get(router.clone(), "/api/links").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Rose care");

    let (status, body) = get(router, "/api/nurseries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Rose Emporium");
}
