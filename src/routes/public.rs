use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::public_dto::CreateRepairRequestPayload,
    dto::ticket_dto::TicketResponse,
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/public/repair-requests",
    responses(
        (status = 201, description = "Repair request created"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_repair_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateRepairRequestPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let ticket = state.ticket_service.create_repair_request(payload).await?;
    Ok((StatusCode::CREATED, Json(TicketResponse::from(ticket))))
}
