//! Server configuration loaded from the environment.
//!
//! Everything has a development default except the token signing secret,
//! which is required — a process without one must not start.

use std::env;

use thiserror::Error;
use turnstile_auth::AuthConfig;
use turnstile_db::DbConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    pub db: DbConfig,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_secret = env::var("TURNSTILE_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("TURNSTILE_JWT_SECRET"))?;

        let token_ttl_secs = match env::var("TURNSTILE_TOKEN_TTL_SECS") {
            Ok(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                var: "TURNSTILE_TOKEN_TTL_SECS",
                message: format!("{e}"),
            })?,
            Err(_) => AuthConfig::default().token_ttl_secs,
        };

        let db_defaults = DbConfig::default();
        let db = DbConfig {
            url: env::var("TURNSTILE_DB_URL").unwrap_or(db_defaults.url),
            namespace: env::var("TURNSTILE_DB_NAMESPACE").unwrap_or(db_defaults.namespace),
            database: env::var("TURNSTILE_DB_NAME").unwrap_or(db_defaults.database),
            username: env::var("TURNSTILE_DB_USER").unwrap_or(db_defaults.username),
            password: env::var("TURNSTILE_DB_PASS").unwrap_or(db_defaults.password),
        };

        let auth_defaults = AuthConfig::default();
        let auth = AuthConfig {
            token_secret,
            token_ttl_secs,
            issuer: env::var("TURNSTILE_TOKEN_ISSUER").unwrap_or(auth_defaults.issuer),
            pepper: env::var("TURNSTILE_PASSWORD_PEPPER").ok(),
        };

        Ok(Self {
            bind_addr: env::var("TURNSTILE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into()),
            db,
            auth,
        })
    }
}
