use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::user_dto::{CreateUserPayload, UpdateUserPayload, UserResponse},
    error::Result,
    models::user::User,
    utils::pagination::{PageQuery, PaginatedResponse},
    utils::permissions::require_admin,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/users/",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("page_size" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of users"),
        (status = 403, description = "Admin access required")
    )
)]
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    require_admin(&current_user)?;
    query.validate()?;

    let list = state.user_service.list(query.page, query.page_size).await?;
    let items: Vec<UserResponse> = list.items.into_iter().map(UserResponse::from).collect();
    Ok(Json(PaginatedResponse::new(
        items,
        list.total,
        list.page,
        list.page_size,
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/",
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Duplicate email or invalid payload"),
        (status = 403, description = "Admin access required")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse> {
    require_admin(&current_user)?;
    payload.validate()?;

    let user = state.user_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found"),
        (status = 404, description = "User not found"),
        (status = 403, description = "Admin access required")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    require_admin(&current_user)?;
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User updated"),
        (status = 404, description = "User not found"),
        (status = 403, description = "Admin access required")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    require_admin(&current_user)?;
    payload.validate()?;

    let user = state.user_service.update(id, payload).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 403, description = "Admin access required")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    require_admin(&current_user)?;
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
