pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService, ticket_service::TicketService, user_service::UserService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub ticket_service: TicketService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let auth_service = AuthService::new(
            pool.clone(),
            config.jwt_secret.clone(),
            config.access_token_expire_minutes,
        );
        let user_service = UserService::new(pool.clone());
        let ticket_service = TicketService::new(pool.clone());

        Self {
            pool,
            config,
            auth_service,
            user_service,
            ticket_service,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let open_routes = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .route("/api/v1/auth/login", post(routes::auth::login))
        .route(
            "/api/v1/public/repair-requests",
            post(routes::public::create_repair_request),
        );

    let protected_routes = Router::new()
        .route("/api/v1/tickets/", get(routes::tickets::list_tickets))
        .route("/api/v1/tickets/:id", get(routes::tickets::get_ticket))
        .route(
            "/api/v1/tickets/:id/assign",
            post(routes::tickets::assign_ticket),
        )
        .route(
            "/api/v1/tickets/:id/status",
            patch(routes::tickets::update_ticket_status),
        )
        .route(
            "/api/v1/users/",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/api/v1/users/:id",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    open_routes
        .merge(protected_routes)
        .with_state(state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
}
