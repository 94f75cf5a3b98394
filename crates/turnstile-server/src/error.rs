//! API error type and its HTTP mapping.
//!
//! Domain outcomes map to 4xx with fixed, non-revealing messages;
//! infrastructure faults map to a bare 500. The credential-failure
//! message is one string for every cause.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, error};
use turnstile_auth::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing or empty field: {0}")]
    MalformedRequest(&'static str),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MalformedRequest(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing or empty field: {field}"),
            ),
            ApiError::Auth(AuthError::DuplicateIdentity) => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            ApiError::Auth(AuthError::InvalidCredentials) => (
                StatusCode::BAD_REQUEST,
                "Invalid email or password".to_string(),
            ),
            ApiError::Auth(AuthError::TokenExpired | AuthError::TokenInvalid(_)) => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            ApiError::Auth(AuthError::Crypto(_) | AuthError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, "request rejected");
        }

        (status, Json(ErrorBody { message })).into_response()
    }
}
