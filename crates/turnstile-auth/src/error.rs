//! Authentication error types.
//!
//! Domain outcomes (`DuplicateIdentity`, `InvalidCredentials`, token
//! rejections) are expected, typed results; infrastructure faults travel
//! in `Store` so the boundary can map them to a 500-class response
//! without leaking internals.

use thiserror::Error;
use turnstile_core::error::TurnstileError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("account already exists")]
    DuplicateIdentity,

    /// One value for every credential failure — unknown email and wrong
    /// password are indistinguishable to the caller.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error(transparent)]
    Store(#[from] TurnstileError),
}
