use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::visit::OwnerQuery,
    error::AppError,
    middleware::owner::OwnerGuard,
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, CreateOrderParams, OrderDto},
    },
    service::order::OrderService,
    state::AppState,
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List orders recorded for a visit.
///
/// Returns all dishes ordered during the given visit, with their optional ratings
/// and reviews. The visit must exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `visit_id` - Visit ID from the request path
///
/// # Returns
/// - `200 OK` - Orders for the visit (possibly empty)
/// - `404 Not Found` - No visit with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/visits/{visit_id}/orders",
    tag = ORDER_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 200, description = "Orders for the visit", body = Vec<OrderDto>),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visit_orders(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service.get_for_visit(visit_id).await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Record an order against a visit.
///
/// Adds a dish to the visit, optionally with a rating and review text. Only the
/// visit's owner may record orders for it; the ownership check runs before the write.
///
/// # Access Control
/// - Owner - `user_id` must match the visit's stored owner
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `visit_id` - Visit ID from the request path
/// - `query` - Caller identity (`user_id`)
/// - `payload` - Order data (dish_id, optional rating and review_text)
///
/// # Returns
/// - `201 Created` - Successfully recorded order
/// - `400 Bad Request` - Missing user_id or dish_id
/// - `403 Forbidden` - Visit belongs to another user
/// - `404 Not Found` - No visit with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/visits/{visit_id}/orders",
    tag = ORDER_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID"),
        ("user_id" = i32, Query, description = "Caller's user ID, must match the visit owner")
    ),
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully recorded order", body = OrderDto),
        (status = 400, description = "Missing user_id or dish_id", body = ErrorDto),
        (status = 403, description = "Visit belongs to another user", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_visit_order(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
    Query(query): Query<OwnerQuery>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;

    // Reject malformed input before the ownership lookup
    let params = CreateOrderParams::from_dto(visit_id, payload)?;

    OwnerGuard::new(&state.db).require(visit_id, user_id).await?;

    let service = OrderService::new(&state.db);

    let order = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}
