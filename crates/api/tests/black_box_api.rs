use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use invtrack_ai::{AiError, ForecastConfig, ForecastService, ScriptedInferenceClient};
use invtrack_api::app::{self, services::AppServices};
use invtrack_infra::FileStateStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
    _dir: tempfile::TempDir,
}

impl TestServer {
    async fn spawn(client: ScriptedInferenceClient) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = Arc::new(FileStateStore::new(dir.path()));
        let forecaster = ForecastService::new(&ForecastConfig::default(), Arc::new(client));
        let services = AppServices::new(store, forecaster, "us-east-1").expect("failed to seed state");

        // Same router as prod, bound to an ephemeral port.
        let app = app::build_app(Arc::new(services));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            handle,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_reports_active_service() {
    let server = TestServer::spawn(ScriptedInferenceClient::new()).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/api/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "active");
    assert_eq!(body["service"], "InvTrackPro");
    assert_eq!(body["region"], "us-east-1");
    assert_eq!(body["storage"], "established");
}

#[tokio::test]
async fn inventory_lists_seed_sorted_by_name() {
    let server = TestServer::spawn(ScriptedInferenceClient::new()).await;
    let client = reqwest::Client::new();

    let items: Vec<serde_json::Value> = client
        .get(server.url("/api/inventory"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Ergonomic Office Chair", "USB-C Hub / Docking Station", "Wireless Mechanical Keyboard"]
    );
    assert_eq!(items[0]["sales_history"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn create_update_delete_item() {
    let server = TestServer::spawn(ScriptedInferenceClient::new()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/api/inventory"))
        .json(&json!({
            "name": "4K Monitor",
            "category": "Electronics",
            "current_quantity": 12,
            "min_required_quantity": 5,
            "price": 399.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["id"], 4);
    assert_eq!(created["status"], "record_created");

    let res = client
        .patch(server.url("/api/inventory/4"))
        .json(&json!({ "current_quantity": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["current_quantity"], 3);
    assert_eq!(updated["sales_history"], json!([]));

    let res = client.delete(server.url("/api/inventory/4")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(server.url("/api/inventory/4")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_requests_map_to_client_errors() {
    let server = TestServer::spawn(ScriptedInferenceClient::new()).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/api/inventory/abc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");

    let res = client
        .post(server.url("/api/inventory"))
        .json(&json!({
            "name": "  ",
            "category": "x",
            "current_quantity": 1,
            "min_required_quantity": 1,
            "price": 1.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client
        .delete(server.url("/api/inventory/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_counts_critical_items() {
    let server = TestServer::spawn(ScriptedInferenceClient::new()).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(server.url("/api/dashboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_items"], 3);
    // Only the chair (8 of 15) is under its minimum.
    assert_eq!(body["critical_alerts"], 1);
    assert_eq!(body["chart"][1]["name"], "Ergonomic ...");
}

#[tokio::test]
async fn insights_mix_model_and_fallback_results() {
    let client_double = ScriptedInferenceClient::new()
        .answer(
            "Wireless Mechanical Keyboard",
            Ok(r#"{"restock_in_days":6,"predicted_sales_next_month":210,"low_stock_alert":false,"explanation":"steady"}"#.to_string()),
        )
        .answer("Ergonomic Office Chair", Err(AiError::Transport("connection refused".to_string())))
        .answer("USB-C Hub / Docking Station", Ok("not json".to_string()));
    let server = TestServer::spawn(client_double).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/api/insights")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["model_id"], "amazon.nova-lite-v1:0");

    let keyboard = &body["insights"]["1"];
    assert_eq!(keyboard["source"], "model");
    assert_eq!(keyboard["restock_in_days"], 6);
    assert_eq!(keyboard["explanation"], "steady");

    let chair = &body["insights"]["2"];
    assert_eq!(chair["source"], "fallback");
    assert_eq!(chair["low_stock_alert"], true);
    assert!(chair["restock_in_days"].as_i64().unwrap() >= 1);

    assert_eq!(body["insights"]["3"]["source"], "fallback");
}

#[tokio::test]
async fn session_slot_round_trips() {
    let server = TestServer::spawn(ScriptedInferenceClient::new()).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(server.url("/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body.is_null());

    let user = json!({
        "id": 2,
        "username": "employee1",
        "role": "employee",
        "createdAt": "2026-01-01T00:00:00Z"
    });
    let res = client
        .put(server.url("/api/session"))
        .json(&user)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = client
        .get(server.url("/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["username"], "employee1");

    let res = client.delete(server.url("/api/session")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
