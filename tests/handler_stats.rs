mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use kv_shortener::api::handlers::stats_handler;
use kv_shortener::domain::repositories::UrlStore;
use kv_shortener::state::AppState;
use serde_json::json;

fn stats_app(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/v1/stats", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_starts_at_zero() {
    let (state, _store) = common::create_test_state();
    let server = stats_app(state);

    let response = server.get("/api/v1/stats").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "counter": "counter", "visits": 0 })
    );
}

#[tokio::test]
async fn test_stats_reports_counter() {
    let (state, store) = common::create_test_state();
    for _ in 0..3 {
        store.increment_counter(common::COUNTER_KEY).await.unwrap();
    }
    let server = stats_app(state);

    let json = server.get("/api/v1/stats").await.json::<serde_json::Value>();

    assert_eq!(json["visits"], 3);
}

#[tokio::test]
async fn test_stats_store_unavailable() {
    let (state, _store) = common::unreachable_state();
    let server = stats_app(state);

    let response = server.get("/api/v1/stats").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), r#"{"error":"cannot connect to DB"}"#);
}
