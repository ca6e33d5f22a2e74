//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use shelf_domain::error::ShelfError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps application and body-parsing failures to HTTP responses.
pub enum ApiError {
    /// An error surfaced by the application layer.
    Domain(ShelfError),
    /// The request body could not be parsed into the expected shape.
    MalformedBody(String),
}

impl From<ShelfError> for ApiError {
    fn from(err: ShelfError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(ShelfError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(ShelfError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(ShelfError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::MalformedBody(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
