//! Integration tests for the HTTP surface, end to end over an in-memory
//! SQLite repository.

#![allow(clippy::unwrap_used)] // Panics: tests drive known-good requests

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use todolist_api::{AppState, build_router};
use todolist_infrastructure::{SqliteTodoListRepository, init_schema};

async fn server() -> TestServer {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    let repository = Arc::new(SqliteTodoListRepository::new(pool));
    TestServer::new(build_router(AppState::new(repository))).unwrap()
}

fn groceries_body() -> Value {
    json!({
        "name": "Groceries",
        "description": "Weekly shop",
        "items": [
            {"name": "Milk", "description": "Two liters"},
            {"name": "Bread", "description": "Sourdough"}
        ]
    })
}

#[tokio::test]
async fn create_returns_201_echoing_the_inputs() {
    let server = server().await;

    let response = server.post("/todo-lists").json(&groceries_body()).await;
    response.assert_status(http::StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["name"], "Groceries");
    assert_eq!(body["description"], "Weekly shop");
    assert_eq!(body["completed"], false);
    assert_eq!(body["date_completed"], Value::Null);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["name"], "Milk");
    assert_eq!(body["items"][0]["completed"], false);
}

#[tokio::test]
async fn create_rejects_an_invalid_field_naming_it() {
    let server = server().await;

    let response = server
        .post("/todo-lists")
        .json(&json!({"name": "", "description": "Weekly shop"}))
        .await;
    response.assert_status(http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("name")
    );
}

#[tokio::test]
async fn get_by_id_round_trips_and_unknown_is_404() {
    let server = server().await;
    let created: Value = server.post("/todo-lists").json(&groceries_body()).await.json();
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/todo-lists/{id}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["name"], "Groceries");

    let missing = server
        .get(&format!("/todo-lists/{}", uuid::Uuid::new_v4()))
        .await;
    missing.assert_status_not_found();
    let body: Value = missing.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn listing_returns_every_created_list() {
    let server = server().await;
    server.post("/todo-lists").json(&groceries_body()).await;
    server
        .post("/todo-lists")
        .json(&json!({"name": "Chores", "description": "Around the house"}))
        .await;

    let response = server.get("/todo-lists").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let lists = body.as_array().unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0]["name"], "Groceries");
    assert_eq!(lists[1]["name"], "Chores");
}

#[tokio::test]
async fn completing_every_item_completes_the_list_over_http() {
    let server = server().await;
    let created: Value = server.post("/todo-lists").json(&groceries_body()).await.json();
    let list_id = created["id"].as_str().unwrap();
    let first = created["items"][0]["id"].as_str().unwrap();
    let second = created["items"][1]["id"].as_str().unwrap();

    let halfway: Value = server
        .post(&format!("/todo-lists/{list_id}/items/{first}/complete"))
        .await
        .json();
    assert_eq!(halfway["completed"], false);
    assert_eq!(halfway["items"][0]["completed"], true);
    assert_eq!(halfway["items"][1]["completed"], false);

    let response = server
        .post(&format!("/todo-lists/{list_id}/items/{second}/complete"))
        .await;
    response.assert_status_ok();
    let done: Value = response.json();
    assert_eq!(done["completed"], true);
    assert!(done["date_completed"].is_string());

    // The stored row reflects the rollup.
    let stored: Value = server.get(&format!("/todo-lists/{list_id}")).await.json();
    assert_eq!(stored["completed"], true);
}

#[tokio::test]
async fn completing_an_unknown_item_is_404() {
    let server = server().await;
    let created: Value = server.post("/todo-lists").json(&groceries_body()).await.json();
    let list_id = created["id"].as_str().unwrap();

    let response = server
        .post(&format!(
            "/todo-lists/{list_id}/items/{}/complete",
            uuid::Uuid::new_v4()
        ))
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_identifiers_are_rejected_by_the_extractor() {
    let server = server().await;
    let response = server.get("/todo-lists/not-a-uuid").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn health_probe_reports_ok() {
    let server = server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
