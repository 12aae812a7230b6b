//! Axum route handlers for accounts: register, login, profile read/update.

use std::sync::Arc;

use axum::{extract::State, Extension, Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

use super::tokens::issue_token;
use super::{hash_password, verify_password};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form, OAuth2 password-grant style: the email travels in `username`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub bio: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /register
///
/// Creates an account and returns a bearer token, so registration doubles
/// as the first login.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&request.email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("email already registered".to_string()));
    }

    let hashed = hash_password(&request.password)?;
    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, hashed_password, bio)
        VALUES ($1, $2, $3, $4, '')
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .bind(&request.email)
    .bind(&hashed)
    .execute(&state.db)
    .await?;

    info!("registered user {}", request.email);

    let token = issue_token(
        &state.config.jwt_secret,
        &request.email,
        state.config.token_ttl_minutes,
    )
    .map_err(anyhow::Error::from)?;

    Ok(Json(TokenResponse::bearer(token)))
}

/// POST /login
///
/// Verifies credentials from a urlencoded form. Unknown email and wrong
/// password fail with the same message.
pub async fn handle_login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&form.username)
        .fetch_optional(&state.db)
        .await?;

    let verified = user
        .as_ref()
        .map(|u| verify_password(&form.password, &u.hashed_password))
        .unwrap_or(false);
    if !verified {
        return Err(AppError::Validation(
            "incorrect email or password".to_string(),
        ));
    }

    info!("login successful for {}", form.username);

    let token = issue_token(
        &state.config.jwt_secret,
        &form.username,
        state.config.token_ttl_minutes,
    )
    .map_err(anyhow::Error::from)?;

    Ok(Json(TokenResponse::bearer(token)))
}

/// GET /me
pub async fn handle_me(Extension(user): Extension<Arc<UserRow>>) -> Json<UserProfile> {
    Json(UserProfile {
        name: user.name.clone(),
        email: user.email.clone(),
        bio: user.bio.clone(),
    })
}

/// POST /update-profile
///
/// Accepts the full profile shape but applies only name and bio; the email
/// field is ignored because email changes would orphan issued tokens.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserRow>>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<Value>, AppError> {
    sqlx::query("UPDATE users SET name = $1, bio = $2 WHERE id = $3")
        .bind(&profile.name)
        .bind(&profile.bio)
        .bind(user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({ "message": "Profile updated successfully" })))
}
