//! Authentication configuration.

/// Configuration for the credential and token services.
///
/// Constructed once at startup and passed in explicitly — neither
/// component reads the environment at call time.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide HMAC secret for token signing. Must be non-empty;
    /// [`TokenIssuer::new`](crate::TokenIssuer::new) rejects an empty
    /// secret at construction.
    pub token_secret: String,
    /// Token lifetime in seconds (default: 3600 = 1 hour).
    pub token_ttl_secs: u64,
    /// Token issuer (`iss` claim).
    pub issuer: String,
    /// Optional pepper prepended to passwords before Argon2id hashing.
    pub pepper: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_secs: 3600,
            issuer: "turnstile".into(),
            pepper: None,
        }
    }
}
