use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::owner::OwnerGuard,
    model::{
        api::{ErrorDto, MessageDto},
        visit::{CreateVisitDto, CreateVisitParams, UpdateVisitDto, UpdateVisitParams, VisitDto},
    },
    service::visit::VisitService,
    state::AppState,
};

/// Tag for grouping visit endpoints in OpenAPI documentation
pub static VISIT_TAG: &str = "visit";

/// Caller identity for mutation routes.
///
/// The user id is a bare, unauthenticated query parameter; there is no session or
/// token scheme in front of it.
#[derive(Deserialize)]
pub struct OwnerQuery {
    pub user_id: Option<i32>,
}

/// Create a new visit.
///
/// Records a visit for the given user at the given restaurant. The supplied user
/// becomes the visit's owner and is the only one allowed to mutate it later.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Visit creation data (user_id, restaurant_id, date, time)
///
/// # Returns
/// - `201 Created` - Successfully created visit
/// - `400 Bad Request` - Missing field or malformed date/time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/visits",
    tag = VISIT_TAG,
    request_body = CreateVisitDto,
    responses(
        (status = 201, description = "Successfully created visit", body = VisitDto),
        (status = 400, description = "Missing field or malformed date/time", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_visit(
    State(state): State<AppState>,
    Json(payload): Json<CreateVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateVisitParams::from_dto(payload)?;

    let service = VisitService::new(&state.db);

    let visit = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(visit.into_dto())))
}

/// Get a visit by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `visit_id` - Visit ID from the request path
///
/// # Returns
/// - `200 OK` - The visit
/// - `404 Not Found` - No visit with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 200, description = "The visit", body = VisitDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visit(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VisitService::new(&state.db);

    let visit = service.get_by_id(visit_id).await?;

    match visit {
        Some(visit) => Ok((StatusCode::OK, Json(visit.into_dto()))),
        None => Err(AppError::NotFound("Visit not found".to_string())),
    }
}

/// Update a visit.
///
/// Replaces the visit's restaurant, date, and time. Only the visit's owner may
/// update it; the ownership check runs before the write.
///
/// # Access Control
/// - Owner - `user_id` must match the visit's stored owner
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `visit_id` - Visit ID from the request path
/// - `query` - Caller identity (`user_id`)
/// - `payload` - Updated visit data (date, time, restaurant_id)
///
/// # Returns
/// - `200 OK` - Successfully updated visit
/// - `400 Bad Request` - Missing user_id/field or malformed date/time
/// - `403 Forbidden` - Visit belongs to another user
/// - `404 Not Found` - No visit with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID"),
        ("user_id" = i32, Query, description = "Caller's user ID, must match the visit owner")
    ),
    request_body = UpdateVisitDto,
    responses(
        (status = 200, description = "Successfully updated visit", body = MessageDto),
        (status = 400, description = "Missing or malformed parameter", body = ErrorDto),
        (status = 403, description = "Visit belongs to another user", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_visit(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
    Query(query): Query<OwnerQuery>,
    Json(payload): Json<UpdateVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;

    // Reject malformed input before the ownership lookup
    let params = UpdateVisitParams::from_dto(visit_id, payload)?;

    OwnerGuard::new(&state.db).require(visit_id, user_id).await?;

    let service = VisitService::new(&state.db);

    service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Visit updated successfully".to_string(),
        }),
    ))
}

/// Delete a visit.
///
/// Only the visit's owner may delete it; the ownership check runs before the write.
/// Orders recorded for the visit are removed with it.
///
/// # Access Control
/// - Owner - `user_id` must match the visit's stored owner
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `visit_id` - Visit ID from the request path
/// - `query` - Caller identity (`user_id`)
///
/// # Returns
/// - `204 No Content` - Successfully deleted visit
/// - `400 Bad Request` - Missing user_id
/// - `403 Forbidden` - Visit belongs to another user
/// - `404 Not Found` - No visit with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID"),
        ("user_id" = i32, Query, description = "Caller's user ID, must match the visit owner")
    ),
    responses(
        (status = 204, description = "Successfully deleted visit"),
        (status = 400, description = "Missing user_id", body = ErrorDto),
        (status = 403, description = "Visit belongs to another user", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_visit(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
    Query(query): Query<OwnerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;

    OwnerGuard::new(&state.db).require(visit_id, user_id).await?;

    let service = VisitService::new(&state.db);

    service.delete(visit_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
