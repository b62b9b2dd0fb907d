//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use itemhub_domain::error::{ItemHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ItemHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(ItemHubError);

impl From<ItemHubError> for ApiError {
    fn from(err: ItemHubError) -> Self {
        Self(err)
    }
}

/// An unreadable body is reported like any other invalid input.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::InvalidBody(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ItemHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ItemHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ItemHubError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
