use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Caller-supplied user id does not match the visit's stored owner.
    ///
    /// The comparison happens before any write, so a rejected mutation leaves the
    /// visit untouched. Results in a 403 Forbidden response.
    #[error("Visit {visit_id} does not belong to user {user_id}")]
    VisitNotOwned { visit_id: i32, user_id: i32 },
}

/// Converts ownership errors into HTTP responses.
///
/// The response body carries a generic message; the ids involved are kept to the
/// server-side error for diagnostics.
///
/// # Returns
/// - 403 Forbidden - For mutations attempted by a non-owner
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::VisitNotOwned { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Visit does not belong to user".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
