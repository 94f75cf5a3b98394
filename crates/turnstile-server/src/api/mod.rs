//! API route wiring and shared application state.

pub mod auth;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use turnstile_auth::{CredentialStore, TokenIssuer};
use turnstile_core::repository::AccountRepository;

/// Shared application state, cloned into every request task.
#[derive(Clone)]
pub struct AppState<R: AccountRepository + Clone> {
    pub credentials: CredentialStore<R>,
    pub tokens: TokenIssuer,
}

/// Build the API router.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: AccountRepository + Clone + 'static,
{
    Router::new()
        .route("/api/auth/signup", post(auth::signup::<R>))
        .route("/api/auth/signin", post(auth::signin::<R>))
        .route("/api/auth/validate", get(auth::validate::<R>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
