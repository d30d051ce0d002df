//! HTTP error mapping for the lookup service.
//!
//! Lookup failures become `400 Bad Request`, converter failures and panics
//! become `500 Internal Server Error`. Every error body has the shape
//! `{"error": <kind>, "message": <text>}`.

use std::any::Any;

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use coinchain::ResolveError;
use serde::Serialize;

use crate::response::corsify;

/// Fallback error name for failures without a more specific one.
pub const GENERIC_ERROR: &str = "Error";

/// Fallback message for failures without a readable message.
pub const GENERIC_MESSAGE: &str = "An error occurred";

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Error returned by the lookup handler.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] ResolveError);

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.0 {
            ResolveError::Lookup(_) => StatusCode::BAD_REQUEST,
            ResolveError::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        let error = match &self.0 {
            ResolveError::Lookup(e) => e.kind(),
            ResolveError::Conversion(_) => "CoinTypeError",
        };
        ErrorBody {
            error: error.to_owned(),
            message: self.0.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Coin type conversion failed");
        } else {
            tracing::debug!(error = %self.0, "Lookup failed");
        }
        corsify(status, &self.body(), HeaderMap::new())
    }
}

/// Turns a handler panic into a `500` response.
///
/// Used with [`tower_http::catch_panic::CatchPanicLayer::custom`]. The panic
/// payload becomes the message when it is a string.
#[allow(clippy::needless_pass_by_value)] // signature required by CatchPanicLayer
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or(GENERIC_MESSAGE);
    tracing::error!(%message, "Handler panicked");

    let body = ErrorBody {
        error: GENERIC_ERROR.to_owned(),
        message: message.to_owned(),
    };
    corsify(StatusCode::INTERNAL_SERVER_ERROR, &body, HeaderMap::new())
}
