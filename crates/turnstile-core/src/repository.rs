//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Callers pass already-normalized
//! emails; normalization policy lives in the credential layer.

use crate::error::TurnstileResult;
use crate::models::account::{Account, CreateAccount};

pub trait AccountRepository: Send + Sync {
    /// Persist a new account. Fails with
    /// [`TurnstileError::AlreadyExists`](crate::TurnstileError::AlreadyExists)
    /// if the email is already taken — the backing store's uniqueness
    /// constraint is the authority, so this holds under concurrent creation.
    fn create(&self, input: CreateAccount) -> impl Future<Output = TurnstileResult<Account>> + Send;

    /// Look up an account by its normalized email. Fails with
    /// [`TurnstileError::NotFound`](crate::TurnstileError::NotFound) on a miss.
    fn get_by_email(&self, email: &str) -> impl Future<Output = TurnstileResult<Account>> + Send;
}
