mod common;

use axum::{
    Router,
    body::Bytes,
    routing::{get, post},
};
use axum_test::TestServer;
use kv_shortener::api::handlers::{redirect_handler, shorten_handler};
use kv_shortener::state::AppState;
use serde_json::json;

fn app(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/v1", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com/very/long/path" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert_eq!(json["url"], "https://example.com/very/long/path");
    assert_eq!(json["short"], format!("{}/{}", common::DOMAIN, code));
    assert!(json.get("expiry").is_none());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_shorten_then_resolve() {
    let (state, store) = common::create_test_state();
    let server = app(state);

    let json = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com/very/long/path" }))
        .await
        .json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();

    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(
        response.header("location"),
        "https://example.com/very/long/path"
    );
    assert_eq!(common::wait_for_counter(&store, 1).await, 1);
}

#[tokio::test]
async fn test_shorten_with_custom_short() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com", "short": "4fg" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "4fg");
    assert_eq!(json["short"], "http://localhost:3000/4fg");
}

#[tokio::test]
async fn test_shorten_custom_short_conflict() {
    let (state, store) = common::create_test_state();
    let server = app(state);

    server
        .post("/api/v1")
        .json(&json!({ "url": "https://first.com", "short": "taken" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://second.com", "short": "taken" }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "URL custom short is already in use" })
    );

    // The first mapping is untouched
    assert_eq!(
        server.get("/taken").await.header("location"),
        "https://first.com/"
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_rejects_unsupported_scheme() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_own_domain() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "http://localhost:3000/abc" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_reserved_short() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com", "short": "health" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_with_expiry() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com", "expiry": 24 }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["expiry"], 24);
}

#[tokio::test]
async fn test_shorten_rejects_zero_expiry() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com", "expiry": 0 }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_store_unavailable() {
    let (state, _store) = common::unreachable_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), r#"{"error":"cannot connect to DB"}"#);
}

fn assert_json_bad_request(response: &axum_test::TestResponse) {
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string(), "unexpected body: {json}");
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let (state, store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{url: https://example.com}"))
        .await;

    assert_json_bad_request(&response);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "short": "4fg" }))
        .await;

    assert_json_bad_request(&response);
    assert!(
        response.json::<serde_json::Value>()["error"]
            .as_str()
            .unwrap()
            .contains("url")
    );
}

#[tokio::test]
async fn test_shorten_missing_content_type() {
    let (state, _store) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/api/v1")
        .bytes(Bytes::from_static(br#"{"url":"https://example.com"}"#))
        .await;

    assert_json_bad_request(&response);
}
