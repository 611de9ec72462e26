use axum::response::IntoResponse;

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Health check.
#[utoipa::path(
    get,
    path = "/ping",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is up", body = String)
    ),
)]
pub async fn ping() -> impl IntoResponse {
    "Pong Uwu"
}
