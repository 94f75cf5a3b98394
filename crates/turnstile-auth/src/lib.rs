//! Turnstile Auth — password credential verification and signed-token
//! issuance/validation.
//!
//! Two independent components, wired together by the caller:
//! [`CredentialStore`] owns the identity → password-hash mapping;
//! [`TokenIssuer`] mints and verifies stateless bearer tokens and never
//! touches the store.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{CredentialStore, RegisterInput};
pub use token::{TokenClaims, TokenIssuer};
