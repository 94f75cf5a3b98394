//! Signed bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a process-wide secret. Verification
//! is stateless: no store access, no suspension points.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// JWT claims embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — account ID (UUID string).
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Mints and verifies bearer tokens.
///
/// Holds the keys derived from the process-wide signing secret, the issuer
/// name, and the token lifetime. Constructed once at startup and shared;
/// cheap to clone.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_secs: u64,
}

impl TokenIssuer {
    /// Build an issuer from the given configuration.
    ///
    /// An empty signing secret is rejected here so a misconfigured process
    /// fails at startup rather than minting forgeable tokens.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        if config.token_secret.is_empty() {
            return Err(AuthError::Crypto("signing secret must not be empty".into()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            issuer: config.issuer.clone(),
            ttl_secs: config.token_ttl_secs,
        })
    }

    /// Issue a signed token asserting the given account identity, expiring
    /// `ttl_secs` from now.
    pub fn issue(&self, account_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: account_id.to_string(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now + self.ttl_secs as i64,
        };

        let header = Header::new(Algorithm::HS256);
        jsonwebtoken::encode(&header, &claims, &self.encoding_key)
            .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
    }

    /// Verify a presented token and recover the account identity.
    ///
    /// The signature is checked before any claim is trusted, so a forged
    /// token with a manipulated expiry fails as `TokenInvalid`, not
    /// `TokenExpired`. A valid signature with `now >= exp` (zero leeway)
    /// fails as `TokenExpired`.
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iss"]);

        let claims = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid(e.to_string()),
            })?;

        Uuid::parse_str(&claims.sub)
            .map_err(|e| AuthError::TokenInvalid(format!("bad subject: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            token_secret: "test-secret-at-least-32-bytes-long!".into(),
            token_ttl_secs: 3600,
            issuer: "turnstile-test".into(),
            pepper: None,
        }
    }

    #[test]
    fn empty_secret_is_rejected() {
        let config = AuthConfig::default();
        assert!(TokenIssuer::new(&config).is_err());
    }

    #[test]
    fn token_roundtrip() {
        let issuer = TokenIssuer::new(&test_config()).unwrap();
        let account_id = Uuid::new_v4();

        let token = issuer.issue(account_id).unwrap();
        let subject = issuer.verify(&token).unwrap();

        assert_eq!(subject, account_id);
    }

    #[test]
    fn tampered_token_is_invalid() {
        let issuer = TokenIssuer::new(&test_config()).unwrap();
        let token = issuer.issue(Uuid::new_v4()).unwrap();

        // Flip one character of the signature segment.
        let mut bytes = token.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        let err = issuer.verify(&tampered).unwrap_err();
        assert!(
            matches!(err, AuthError::TokenInvalid(_)),
            "expected TokenInvalid, got: {err:?}"
        );
    }

    #[test]
    fn truncated_token_is_invalid() {
        let issuer = TokenIssuer::new(&test_config()).unwrap();
        let token = issuer.issue(Uuid::new_v4()).unwrap();

        let err = issuer.verify(&token[..token.len() - 2]).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid(_)));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let issuer = TokenIssuer::new(&test_config()).unwrap();
        let token = issuer.issue(Uuid::new_v4()).unwrap();

        let other = TokenIssuer::new(&AuthConfig {
            token_secret: "a-different-secret-entirely-here!!!".into(),
            ..test_config()
        })
        .unwrap();

        let err = other.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid(_)));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config).unwrap();

        // Hand-craft a token whose expiry is already in the past, signed
        // with the same secret.
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: Uuid::new_v4().to_string(),
            iss: config.issuer.clone(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.token_secret.as_bytes()),
        )
        .unwrap();

        let err = issuer.verify(&token).unwrap_err();
        assert!(
            matches!(err, AuthError::TokenExpired),
            "expected TokenExpired, got: {err:?}"
        );
    }

    #[test]
    fn foreign_issuer_is_invalid() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config).unwrap();

        let other = TokenIssuer::new(&AuthConfig {
            issuer: "someone-else".into(),
            ..config
        })
        .unwrap();

        let token = other.issue(Uuid::new_v4()).unwrap();
        let err = issuer.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid(_)));
    }

    #[test]
    fn non_uuid_subject_is_invalid() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config).unwrap();

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "not-a-uuid".into(),
            iss: config.issuer.clone(),
            iat: now,
            exp: now + 600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.token_secret.as_bytes()),
        )
        .unwrap();

        let err = issuer.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid(_)));
    }
}
