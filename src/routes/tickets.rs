use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::ticket_dto::{
        AssignTicketPayload, TicketDetailResponse, TicketListQuery, TicketResponse,
        UpdateTicketStatusPayload,
    },
    error::Result,
    models::user::User,
    utils::pagination::PaginatedResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/tickets/",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("page_size" = Option<i64>, Query, description = "Items per page"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("search" = Option<String>, Query, description = "Substring match on title")
    ),
    responses(
        (status = 200, description = "Paginated list of tickets, scoped by role"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_tickets(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Query(query): Query<TicketListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let list = state.ticket_service.list(&current_user, &query).await?;
    Ok(Json(PaginatedResponse::<TicketDetailResponse>::from(list)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tickets/{id}",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket found"),
        (status = 403, description = "Worker not assigned to this ticket"),
        (status = 404, description = "Ticket not found")
    )
)]
#[axum::debug_handler]
pub async fn get_ticket(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let row = state.ticket_service.get(&current_user, id).await?;
    Ok(Json(TicketDetailResponse::from(row)))
}

#[utoipa::path(
    post,
    path = "/api/v1/tickets/{id}/assign",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket assigned"),
        (status = 400, description = "Not a valid worker id"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Ticket not found")
    )
)]
#[axum::debug_handler]
pub async fn assign_ticket(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignTicketPayload>,
) -> Result<impl IntoResponse> {
    let ticket = state
        .ticket_service
        .assign(&current_user, id, payload.assigned_to)
        .await?;
    Ok(Json(TicketResponse::from(ticket)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/tickets/{id}/status",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Status updated"),
        (status = 403, description = "Worker not assigned to this ticket"),
        (status = 404, description = "Ticket not found")
    )
)]
#[axum::debug_handler]
pub async fn update_ticket_status(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTicketStatusPayload>,
) -> Result<impl IntoResponse> {
    let ticket = state
        .ticket_service
        .update_status(&current_user, id, payload.status)
        .await?;
    Ok(Json(TicketResponse::from(ticket)))
}
