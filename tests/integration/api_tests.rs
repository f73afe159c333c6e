//! API integration tests
//!
//! The router is driven in-process over an in-memory repository.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use smartcal::{
    api,
    config::AppConfig,
    models::category::CategoryCatalog,
    repository::InMemoryEventRepository,
    services::Services,
    AppState,
};

fn app() -> Router {
    let config = AppConfig::default();
    let categories = CategoryCatalog::new(&config.calendar.categories);
    let services = Services::new(Arc::new(InMemoryEventRepository::new()), categories);
    api::router(AppState::new(config, services))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

fn event(title: &str, start: &str, end: &str, location: &str) -> Value {
    json!({
        "title": title,
        "start": format!("2025-12-01T{}:00", start),
        "end": format!("2025-12-01T{}:00", end),
        "location": location,
        "category": "meeting"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_categories() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        names,
        vec!["Business", "Gym", "Formal", "Casual", "Work", "Office", "Meeting"]
    );
}

#[tokio::test]
async fn test_schedule_scenario() {
    let app = app();

    let (status, standup) = send(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(event("Standup", "09:00", "09:30", "Office")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(standup["category"], "Meeting");
    let id = standup["id"].as_str().expect("id").to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(event("Sync", "09:15", "09:45", "office")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "SchedulingConflict");
    assert_eq!(body["message"], "Conflict: overlapping events");
    assert_eq!(body["event"]["title"], "Sync");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(event("Sync", "09:15", "09:45", "Remote")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, day) = send(&app, Method::GET, "/api/v1/events?date=2025-12-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(day.as_array().map(Vec::len), Some(2));
    assert_eq!(day[0]["title"], "Standup");

    let (status, edited) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/events/{}", id),
        Some(json!({ "location": "Home", "title": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["location"], "Home");
    assert_eq!(edited["title"], "Standup");
    assert_eq!(edited["start"], standup["start"]);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/events/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Event deleted successfully");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/events/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");

    let (status, _) = send(&app, Method::GET, &format!("/api/v1/events/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_end_before_start() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(event("Backwards", "10:00", "09:00", "Office")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "InvalidTimeRange");
    assert_eq!(body["message"], "End time cannot be before start time");

    let (_, day) = send(&app, Method::GET, "/api/v1/events?date=2025-12-01", None).await;
    assert_eq!(day, json!([]));
}

#[tokio::test]
async fn test_create_rejects_unknown_category() {
    let app = app();
    let mut request = event("Party", "20:00", "23:00", "Home");
    request["category"] = json!("Party");

    let (status, body) = send(&app, Method::POST, "/api/v1/events", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");
}

#[tokio::test]
async fn test_month_view() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(event("Standup", "09:00", "09:30", "Office")),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/v1/events/month?year=2025&month=12", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, Method::GET, "/api/v1/events/month?year=2025&month=13", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");
}

#[tokio::test]
async fn test_view_states_follow_outcomes() {
    let app = app();

    let (_, add_state) = send(&app, Method::GET, "/api/v1/views/add-event", None).await;
    assert!(add_state["event"].is_null());

    send(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(event("Standup", "09:00", "09:30", "Office")),
    )
    .await;
    let (_, add_state) = send(&app, Method::GET, "/api/v1/views/add-event", None).await;
    assert_eq!(add_state["event"]["title"], "Standup");
    assert_eq!(add_state["message"], "Event added successfully");

    send(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(event("Sync", "09:15", "09:45", "Office")),
    )
    .await;
    let (_, add_state) = send(&app, Method::GET, "/api/v1/views/add-event", None).await;
    assert!(add_state["event"].is_null());
    assert_eq!(add_state["rejected"]["title"], "Sync");
    assert_eq!(add_state["error_kind"], "SchedulingConflict");

    let missing = "/api/v1/events/00000000-0000-4000-8000-000000000000";
    send(&app, Method::DELETE, missing, None).await;
    let (_, delete_state) = send(&app, Method::GET, "/api/v1/views/delete-event", None).await;
    assert!(delete_state["deleted_id"].is_null());
    assert_eq!(delete_state["error_kind"], "NotFound");

    send(&app, Method::PUT, missing, Some(json!({ "title": "Ghost" }))).await;
    let (_, edit_state) = send(&app, Method::GET, "/api/v1/views/edit-event", None).await;
    assert!(edit_state["event"].is_null());
    assert_eq!(edit_state["error_kind"], "NotFound");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Smart Calendar API");
    assert!(body["paths"]["/events/{id}"].is_object());
}

#[tokio::test]
async fn test_malformed_requests_are_json_invalid_input() {
    let app = app();

    let mut bad_date = event("Standup", "09:00", "09:30", "Office");
    bad_date["end"] = json!("not-a-date");
    let (status, body) = send(&app, Method::POST, "/api/v1/events", Some(bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");
    assert!(body["message"].is_string());

    let (status, body) = send(&app, Method::GET, "/api/v1/events", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");

    let (status, body) = send(&app, Method::GET, "/api/v1/events/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/events/not-a-uuid",
        Some(json!({ "title": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");
}
