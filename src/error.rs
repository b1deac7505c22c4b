//! Application error type and its HTTP mapping.
//!
//! The public error contract is deliberately small: every validation failure
//! is a `400 Bad Request` whose body echoes the raw input alongside
//! `"error": true`. The two variants only differ in what gets echoed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error response body: the raw (possibly empty) input plus an error marker.
#[derive(Serialize)]
struct ErrorBody {
    number: String,
    error: bool,
}

/// Everything that can go wrong while handling a classification request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The `number` query parameter was absent or empty.
    #[error("missing required query parameter `number`")]
    MissingNumber,

    /// The `number` query parameter was neither an integer nor a decimal
    /// literal.
    #[error("`{raw}` is not a valid number")]
    UnparsableNumber { raw: String },
}

impl AppError {
    pub fn unparsable(raw: impl Into<String>) -> Self {
        Self::UnparsableNumber { raw: raw.into() }
    }

    /// The raw input echoed back in the error body; empty when the
    /// parameter was missing.
    fn echoed_input(self) -> String {
        match self {
            Self::MissingNumber => String::new(),
            Self::UnparsableNumber { raw } => raw,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            number: self.echoed_input(),
            error: true,
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
