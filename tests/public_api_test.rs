mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{request, try_setup, unique_email};

#[tokio::test]
async fn repair_request_dedups_client_by_email() {
    let Some((app, _pool)) = try_setup().await else {
        return;
    };

    let email = unique_email("client");
    let payload = json!({
        "title": "Broken screen",
        "description": "Dropped the phone",
        "client_full_name": "Jamie Client",
        "client_email": &email,
        "client_phone": "+1 555 0100",
        "client_address": "1 Main St"
    });

    let (status, first) = request(&app, "POST", "/api/v1/public/repair-requests", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["status"], "new");
    assert!(first["assigned_to"].is_null());
    assert!(first["completed_at"].is_null());

    // Same email, different name and phone: existing client wins, the
    // differing fields are ignored, and only a second ticket is created.
    let second_payload = json!({
        "title": "Still broken",
        "description": "Second visit",
        "client_full_name": "Different Name",
        "client_email": &email,
        "client_phone": "+1 555 0200"
    });
    let (status, second) = request(&app, "POST", "/api/v1/public/repair-requests", None, Some(second_payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(first["client_id"], second["client_id"]);
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn repair_request_rejects_invalid_payload() {
    let Some((app, _pool)) = try_setup().await else {
        return;
    };

    let (status, _) = request(
        &app,
        "POST",
        "/api/v1/public/repair-requests",
        None,
        Some(json!({
            "title": "",
            "description": "x",
            "client_full_name": "A",
            "client_email": "not-an-email",
            "client_phone": "1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn liveness_endpoints_are_open() {
    let Some((app, _pool)) = try_setup().await else {
        return;
    };

    let (status, body) = request(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Mini-CRM Repair Requests API");

    let (status, body) = request(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn staff_routes_require_a_token() {
    let Some((app, _pool)) = try_setup().await else {
        return;
    };

    let (status, _) = request(&app, "GET", "/api/v1/tickets/", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &app,
        "GET",
        &format!("/api/v1/tickets/{}", Uuid::new_v4()),
        Some("garbage-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
