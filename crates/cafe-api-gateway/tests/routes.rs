//! End-to-end tests for the HTTP routes.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use cafe_api_auth::SharedSecretGuard;
use cafe_api_control::CafeDirectoryService;
use cafe_api_gateway::{create_router, GatewayConfig, GatewayState};
use cafe_api_store::RocksStore;

const API_KEY: &str = "TopSecretAPIKey";

fn setup() -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(RocksStore::open(dir.path()).unwrap());
    let directory = Arc::new(CafeDirectoryService::new(store));
    let guard = Arc::new(SharedSecretGuard::new(API_KEY).unwrap());
    let state = GatewayState::new(directory, guard, GatewayConfig::default());

    let server = TestServer::new(create_router(state)).unwrap();
    (server, dir)
}

fn cafe_params<'a>(name: &'a str, location: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("map_url", "https://maps.example/cafe"),
        ("img_url", "https://img.example/cafe.jpg"),
        ("location", location),
        ("seats", "20-30"),
        ("has_toilet", "false"),
        ("has_wifi", "true"),
        ("has_sockets", "true"),
        ("can_take_calls", "false"),
        ("coffee_price", "£2.40"),
    ]
}

async fn add(server: &TestServer, params: &[(&str, &str)]) -> Value {
    let mut request = server.post("/add");
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    let response = request.await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

/// Add a cafe and return its id as listed by `/all`.
async fn add_and_find(server: &TestServer, name: &str, location: &str) -> String {
    add(server, &cafe_params(name, location)).await;
    let all: Value = server.get("/all").await.json();
    all.as_object()
        .unwrap()
        .iter()
        .find(|(_, cafe)| cafe["name"] == name)
        .map(|(id, _)| id.clone())
        .unwrap()
}

#[tokio::test]
async fn landing_page_is_html() {
    let (server, _dir) = setup();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("/report-closed"));
}

#[tokio::test]
async fn health_reports_count() {
    let (server, _dir) = setup();
    add(&server, &cafe_params("Bean There", "Downtown")).await;

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cafes"], 1);
}

#[tokio::test]
async fn add_stores_booleans() {
    let (server, _dir) = setup();
    let body = add(&server, &cafe_params("Bean There", "Downtown")).await;
    assert_eq!(
        body,
        json!({"response": {"success": "Successfully added Cafe: Bean There!"}})
    );

    let cafe: Value = server.get("/random").await.json();
    assert_eq!(cafe["has_wifi"], json!(true));
    assert_eq!(cafe["has_toilet"], json!(false));
    assert_eq!(cafe["seats"], json!("20-30"));
    assert_eq!(cafe["coffee_price"], json!("£2.40"));
    assert!(cafe["id"].is_u64());
}

#[tokio::test]
async fn add_via_get_is_accepted() {
    let (server, _dir) = setup();
    let mut request = server.get("/add");
    for (key, value) in cafe_params("Grind", "Soho") {
        request = request.add_query_param(key, value);
    }
    let body: Value = request.await.json();
    assert_eq!(body["response"]["success"], "Successfully added Cafe: Grind!");
}

#[tokio::test]
async fn add_duplicate_name_fails_generically() {
    let (server, _dir) = setup();
    add(&server, &cafe_params("Twin", "A")).await;

    let body = add(&server, &cafe_params("Twin", "B")).await;
    assert_eq!(
        body,
        json!({"response": {"error": "Failed to add requested cafe to database"}})
    );
}

#[tokio::test]
async fn add_missing_field_fails_generically() {
    let (server, _dir) = setup();
    let mut params = cafe_params("Sparse", "A");
    params.retain(|(key, _)| *key != "location");

    let body = add(&server, &params).await;
    assert_eq!(
        body["response"]["error"],
        "Failed to add requested cafe to database"
    );
    let all: Value = server.get("/all").await.json();
    assert_eq!(all, json!({}));
}

#[tokio::test]
async fn add_unknown_field_is_named() {
    let (server, _dir) = setup();
    let mut params = cafe_params("Extra", "A");
    params.push(("parking", "true"));

    let body = add(&server, &params).await;
    assert_eq!(body, json!({"response": {"error": "Unknown field: parking"}}));
}

#[tokio::test]
async fn search_matches_exact_location() {
    let (server, _dir) = setup();
    add(&server, &cafe_params("Bean There", "Downtown")).await;
    add(&server, &cafe_params("Grind", "Uptown")).await;

    let body: Value = server
        .get("/search")
        .add_query_param("location", "Downtown")
        .await
        .json();
    let found = body.as_object().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found.values().next().unwrap()["name"], "Bean There");

    let none: Value = server
        .get("/search")
        .add_query_param("location", "downtown")
        .await
        .json();
    assert_eq!(none, json!({}));

    let missing: Value = server.get("/search").await.json();
    assert_eq!(missing, json!({}));
}

#[tokio::test]
async fn search_repeated_location_uses_first() {
    let (server, _dir) = setup();
    add(&server, &cafe_params("Bean There", "Downtown")).await;

    let body: Value = server
        .get("/search")
        .add_query_param("location", "Downtown")
        .add_query_param("location", "Uptown")
        .await
        .json();
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn all_is_keyed_by_id() {
    let (server, _dir) = setup();
    add(&server, &cafe_params("One", "X")).await;
    add(&server, &cafe_params("Two", "X")).await;

    let body: Value = server.get("/all").await.json();
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 2);
    for (key, cafe) in map {
        assert_eq!(key, &cafe["id"].to_string());
    }
}

#[tokio::test]
async fn random_on_empty_store_is_server_error() {
    let (server, _dir) = setup();
    let response = server.get("/random").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "no_cafes");
}

#[tokio::test]
async fn update_price_roundtrip() {
    let (server, _dir) = setup();
    let id = add_and_find(&server, "Pricey", "X").await;

    let response = server
        .patch(&format!("/update-price/{id}"))
        .add_query_param("coffee_price", "£3.50")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"response": {"success": "Successfully updated the price."}})
    );

    let all: Value = server.get("/all").await.json();
    assert_eq!(all[&id]["coffee_price"], "£3.50");

    server.get(&format!("/update-price/{id}")).await;
    let all: Value = server.get("/all").await.json();
    assert_eq!(all[&id]["coffee_price"], Value::Null);
}

#[tokio::test]
async fn update_price_via_get_with_price() {
    let (server, _dir) = setup();
    let id = add_and_find(&server, "Pricey", "X").await;

    let response = server
        .get(&format!("/update-price/{id}"))
        .add_query_param("coffee_price", "£2.95")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let all: Value = server.get("/all").await.json();
    assert_eq!(all[&id]["coffee_price"], "£2.95");
}

#[tokio::test]
async fn update_price_repeated_param_uses_first() {
    let (server, _dir) = setup();
    let id = add_and_find(&server, "Pricey", "X").await;

    let response = server
        .patch(&format!("/update-price/{id}"))
        .add_query_param("coffee_price", "1")
        .add_query_param("coffee_price", "2")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let all: Value = server.get("/all").await.json();
    assert_eq!(all[&id]["coffee_price"], "1");

    let response = server
        .patch("/update-price/999")
        .add_query_param("coffee_price", "1")
        .add_query_param("coffee_price", "2")
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"]["Not Found"],
        "Sorry a cafe with that id was not found in the database."
    );
}

#[tokio::test]
async fn update_price_unknown_id_is_not_found() {
    let (server, _dir) = setup();
    let not_found = json!({"error": {
        "Not Found": "Sorry a cafe with that id was not found in the database."
    }});

    for path in ["/update-price/999", "/update-price/abc", "/update-price/0"] {
        let response = server
            .patch(path)
            .add_query_param("coffee_price", "1")
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.json::<Value>(), not_found);
    }
}

#[tokio::test]
async fn report_closed_wrong_key_is_rejected_for_any_id() {
    let (server, _dir) = setup();
    let id = add_and_find(&server, "Closing", "X").await;
    let rejected = json!({"response": {"error": "Incorrect API Key!"}});

    for path in [format!("/report-closed/{id}"), "/report-closed/999".to_string()] {
        let response = server
            .delete(&path)
            .add_query_param("api-key", "wrong")
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>(), rejected);
    }

    let missing = server.delete(&format!("/report-closed/{id}")).await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<Value>(), rejected);

    let all: Value = server.get("/all").await.json();
    assert_eq!(all.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn report_closed_deletes_once() {
    let (server, _dir) = setup();
    let id = add_and_find(&server, "Closing", "X").await;
    let path = format!("/report-closed/{id}");

    let response = server.delete(&path).add_query_param("api-key", API_KEY).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"response": {"success": "Successfully deleted the cafe!"}})
    );

    let again = server.delete(&path).add_query_param("api-key", API_KEY).await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        again.json::<Value>()["error"]["Not Found"],
        "Sorry a cafe with that id was not found in the database."
    );
}

#[tokio::test]
async fn report_closed_via_get() {
    let (server, _dir) = setup();
    let id = add_and_find(&server, "Closing", "X").await;

    let response = server
        .get(&format!("/report-closed/{id}"))
        .add_query_param("api-key", API_KEY)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["response"]["success"],
        "Successfully deleted the cafe!"
    );

    let all: Value = server.get("/all").await.json();
    assert_eq!(all, json!({}));
}

#[tokio::test]
async fn report_closed_repeated_key_uses_first() {
    let (server, _dir) = setup();
    let id = add_and_find(&server, "Closing", "X").await;
    let path = format!("/report-closed/{id}");

    let response = server
        .delete(&path)
        .add_query_param("api-key", "wrong")
        .add_query_param("api-key", API_KEY)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"response": {"error": "Incorrect API Key!"}})
    );

    let response = server
        .delete(&path)
        .add_query_param("api-key", API_KEY)
        .add_query_param("api-key", "wrong")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let (server, _dir) = setup();
    let response = server.method(Method::PUT, "/add").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let response = server.post("/all").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
