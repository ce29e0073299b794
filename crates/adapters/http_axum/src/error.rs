//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use geotrack_domain::error::TrackerError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

/// Maps [`TrackerError`]s and rejected request bodies to an HTTP response
/// with a `{ "status": "error", "message": … }` body.
pub enum ApiError {
    /// The application layer failed.
    Tracker(TrackerError),
    /// The request body could not be read as the expected JSON payload.
    Payload(JsonRejection),
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        Self::Tracker(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Payload(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Tracker(err) => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Payload(rejection) => (rejection.status(), rejection.body_text()),
        };

        (
            status,
            Json(ErrorBody {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}
