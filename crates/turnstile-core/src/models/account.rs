//! Account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
///
/// The email is the identity key: stored trimmed and lowercased, unique
/// across all accounts. Accounts are immutable after creation; removal
/// happens through an administrative path outside this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    /// Argon2id PHC string. Never the plaintext.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input for account creation.
///
/// Carries a finished password hash — hashing is the credential layer's
/// job, the repository only stores the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Normalized (trimmed, lowercased) email.
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}
