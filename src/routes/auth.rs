use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::auth_dto::{LoginPayload, TokenResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    responses(
        (status = 200, description = "Token issued"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let token = state
        .auth_service
        .authenticate(&payload.email, &payload.password)
        .await?;
    Ok(Json(TokenResponse::bearer(token)))
}
