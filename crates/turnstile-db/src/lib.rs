//! Turnstile Database — SurrealDB connection management and the account
//! repository implementation.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Error types ([`DbError`])
//! - The [`AccountRepository`](turnstile_core::repository::AccountRepository)
//!   implementation ([`repository::SurrealAccountRepository`])

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
