use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    model::{api::ErrorDto, restaurant::RestaurantListDto},
    service::restaurant::RestaurantService,
    state::AppState,
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

#[derive(Deserialize)]
pub struct RestaurantSearchQuery {
    pub search_term: Option<String>,
}

/// Search restaurants by name.
///
/// Returns all restaurants whose name contains the given search term,
/// case-insensitive. The term is required; an absent or empty term is rejected
/// before any query runs.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Search query with the required `search_term`
///
/// # Returns
/// - `200 OK` - Matching restaurants
/// - `400 Bad Request` - Missing or empty search term
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    params(
        ("search_term" = String, Query, description = "Substring to match against restaurant names, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching restaurants", body = RestaurantListDto),
        (status = 400, description = "Missing or empty search term", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RestaurantSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let search_term = query
        .search_term
        .ok_or_else(|| AppError::BadRequest("search_term is required".to_string()))?;

    let service = RestaurantService::new(&state.db);

    let restaurants = service.search(&search_term).await?;

    Ok((
        StatusCode::OK,
        Json(RestaurantListDto {
            restaurants: restaurants.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}
