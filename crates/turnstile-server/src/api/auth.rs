//! Authentication endpoints: signup, signin, and token validation.
//!
//! Request bodies deserialize into explicit structs with optional fields;
//! required-field validation runs here, before anything reaches the
//! credential layer. The validation endpoint is stateless — it never
//! touches the account store.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use serde::{Deserialize, Serialize};
use turnstile_auth::{AuthError, RegisterInput};
use turnstile_core::repository::AccountRepository;
use uuid::Uuid;

use crate::api::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub id: Uuid,
    pub message: String,
}

/// Required-field check: present and non-empty after trimming.
fn require(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::MalformedRequest(field)),
    }
}

pub async fn signup<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError>
where
    R: AccountRepository + Clone,
{
    let email = require(req.email, "email")?;
    let full_name = require(req.full_name, "fullName")?;
    let password = require(req.password, "password")?;

    let account = state
        .credentials
        .register(RegisterInput {
            email,
            full_name,
            password,
        })
        .await?;
    let token = state.tokens.issue(account.id)?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token,
            message: "User registered successfully".into(),
        }),
    ))
}

pub async fn signin<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError>
where
    R: AccountRepository + Clone,
{
    let email = require(req.email, "email")?;
    let password = require(req.password, "password")?;

    let account = state.credentials.verify(&email, &password).await?;
    let token = state.tokens.issue(account.id)?;

    Ok(Json(TokenResponse {
        token,
        message: "Login successful".into(),
    }))
}

pub async fn validate<R>(
    State(state): State<AppState<R>>,
    headers: HeaderMap,
) -> Result<Json<ValidateResponse>, ApiError>
where
    R: AccountRepository + Clone,
{
    let token = bearer_token(&headers)?;
    let id = state.tokens.verify(token)?;

    Ok(Json(ValidateResponse {
        id,
        message: "Token is valid".into(),
    }))
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AuthError::TokenInvalid("missing bearer credential".into()).into())
}
