//! Turnstile Core — domain models, error taxonomy, and repository traits.
//!
//! This crate has no I/O and no cryptography. It defines the shared types
//! the persistence and credential layers agree on.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{TurnstileError, TurnstileResult};
