use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. Validation and not-found map to
/// specific client responses; anything out of the store degrades to a 500
/// carrying the raw failure text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input data")]
    InvalidInput,
    #[error("User not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidInput => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Store(e) => {
                error!(error = ?e, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
