#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use repair_backend::{
    build_router,
    config::Config,
    dto::user_dto::CreateUserPayload,
    models::user::{User, UserRole},
    services::user_service::UserService,
    AppState,
};

/// Integration tests need a real Postgres. When DATABASE_URL is unset the
/// tests skip themselves instead of failing.
pub async fn try_setup() -> Option<(Router, PgPool)> {
    dotenvy::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping integration test");
        return None;
    };

    let config = Config {
        server_address: "127.0.0.1:0".to_string(),
        database_url,
        jwt_secret: "test_secret_key".to_string(),
        access_token_expire_minutes: 30,
    };

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    let app = build_router(AppState::new(pool.clone(), config));
    Some((app, pool))
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, Uuid::new_v4())
}

pub async fn seed_user(pool: &PgPool, role: UserRole, password: &str) -> User {
    let service = UserService::new(pool.clone());
    service
        .create(CreateUserPayload {
            email: unique_email(role.as_str()),
            full_name: format!("Test {}", role.as_str()),
            role,
            password: password.to_string(),
        })
        .await
        .expect("seed user")
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["access_token"].as_str().expect("token").to_string()
}
