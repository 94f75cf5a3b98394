//! Credential store — account registration and credential verification.

use tracing::debug;
use turnstile_core::error::TurnstileError;
use turnstile_core::models::account::{Account, CreateAccount};
use turnstile_core::repository::AccountRepository;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Normalize an email into the identity key: trimmed, lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Owns the durable mapping from identity (email) to salted password hash.
///
/// Generic over the repository implementation so that the credential layer
/// has no dependency on the database crate. Holds no mutable in-process
/// state; safe to clone and share across request tasks.
#[derive(Clone)]
pub struct CredentialStore<R: AccountRepository> {
    accounts: R,
    pepper: Option<String>,
}

impl<R: AccountRepository> CredentialStore<R> {
    pub fn new(accounts: R, config: &AuthConfig) -> Self {
        Self {
            accounts,
            pepper: config.pepper.clone(),
        }
    }

    /// Register a new account.
    ///
    /// Fails with [`AuthError::DuplicateIdentity`] if the normalized email
    /// is already taken, performing no write. The database's unique index
    /// settles concurrent races; its duplicate-key failure maps to the
    /// same error as the pre-check.
    pub async fn register(&self, input: RegisterInput) -> Result<Account, AuthError> {
        let email = normalize_email(&input.email);

        // 1. Reject an already-registered identity without writing.
        match self.accounts.get_by_email(&email).await {
            Ok(_) => return Err(AuthError::DuplicateIdentity),
            Err(TurnstileError::NotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }

        // 2. Hash with a fresh random salt.
        let password_hash = password::hash_password(&input.password, self.pepper.as_deref())?;

        // 3. Persist; the unique index arbitrates registration races.
        match self
            .accounts
            .create(CreateAccount {
                email,
                full_name: input.full_name,
                password_hash,
            })
            .await
        {
            Ok(account) => {
                debug!(account_id = %account.id, "account registered");
                Ok(account)
            }
            Err(TurnstileError::AlreadyExists { .. }) => Err(AuthError::DuplicateIdentity),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify a presented password against the stored hash.
    ///
    /// Every credential failure — unknown email or wrong password — returns
    /// the same [`AuthError::InvalidCredentials`] value. The unknown-email
    /// path still performs one hashing operation so its cost resembles the
    /// wrong-password path.
    pub async fn verify(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let email = normalize_email(email);

        // 1. Single lookup by identity.
        let account = match self.accounts.get_by_email(&email).await {
            Ok(account) => account,
            Err(TurnstileError::NotFound { .. }) => {
                let _ = password::hash_password(password, self.pepper.as_deref());
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        // 2. Check against the stored salted hash.
        let valid =
            password::verify_password(password, &account.password_hash, self.pepper.as_deref())?;

        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account)
    }
}
