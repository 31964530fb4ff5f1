#![allow(clippy::unwrap_used)]

use axum::{http::StatusCode, routing::get, Router};
use axum_test::TestServer;
use serde_json::{json, Value};

use crate::{
    model::response::{ErrorResponse, ServiceInfo},
    router::with_error_handling,
    test::{create_note, setup_server},
};

#[tokio::test]
async fn root_reports_service_info() {
    let server = setup_server();

    create_note(&server, "first", "body").await;
    create_note(&server, "second", "body").await;

    let response = server.get("/").await;

    response.assert_status_ok();

    let info = response.json::<ServiceInfo>();
    assert_eq!("Notes API is running!", info.message);
    assert_eq!(env!("CARGO_PKG_VERSION"), info.version);
    assert_eq!(2, info.total_notes);
    assert_eq!("/docs", info.documentation.redoc);
    assert_eq!("/docs/api.json", info.documentation.openapi);

    let raw = response.json::<Value>();
    assert_eq!(raw["totalNotes"], json!(2));
}

#[tokio::test]
async fn unknown_endpoint_not_found() {
    let server = setup_server();

    let response = server.get("/todos").await;

    response.assert_status_not_found();

    let json = response.json::<ErrorResponse>();
    assert!(!json.success);
    assert_eq!("Endpoint not found", json.error);
}

#[tokio::test]
async fn health_ping_ok() {
    let server = setup_server();

    server.get("/health/ping").await.assert_status_ok();
}

#[tokio::test]
async fn openapi_document_lists_note_routes() {
    let server = setup_server();

    let response = server.get("/docs/api.json").await;

    response.assert_status_ok();

    let doc = response.json::<Value>();
    assert_eq!("Notes API", doc["info"]["title"]);
    assert!(doc["paths"]["/notes"]["get"].is_object());
    assert!(doc["paths"]["/notes"]["post"].is_object());

    let paths = doc["paths"].as_object().unwrap();
    let note_path = paths
        .iter()
        .find(|(path, _)| path.starts_with("/notes/"))
        .map(|(_, item)| item)
        .unwrap();
    assert!(note_path["get"].is_object());
    assert!(note_path["put"].is_object());
    assert!(note_path["delete"].is_object());
    assert!(!paths.contains_key("/docs/api.json"));
}

#[tokio::test]
async fn redoc_page_served() {
    let server = setup_server();

    server.get("/docs").await.assert_status_ok();
}

#[tokio::test]
async fn note_unsupported_method_not_found() {
    let server = setup_server();

    create_note(&server, "Groceries", "Milk, eggs").await;

    let responses = [
        server.patch("/notes/1").json(&json!({ "title": "x" })).await,
        server.post("/notes/1").json(&json!({ "title": "x" })).await,
        server.delete("/notes").await,
    ];

    for response in responses {
        response.assert_status_not_found();
        assert_eq!(
            json!({ "success": false, "error": "Endpoint not found" }),
            response.json::<Value>()
        );
    }
}

#[tokio::test]
#[allow(clippy::panic)]
async fn handler_panic_internal_server_error() {
    let app = with_error_handling(Router::new().route(
        "/explode",
        get(|| async { panic!("store lock held by worker 7") as () }),
    ));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/explode").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json!({ "success": false, "error": "Internal server error" }),
        response.json::<Value>()
    );
    assert!(!response.text().contains("worker 7"));
}
