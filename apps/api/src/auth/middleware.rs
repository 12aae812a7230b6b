//! Bearer-token route guard.
//!
//! Verifies the `Authorization: Bearer` header, resolves the token subject
//! to a live user row, and stashes the user in request extensions for
//! handlers to pick up via `Extension<Arc<UserRow>>`.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

use super::tokens::verify_token;

pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;

    let claims = verify_token(&state.config.jwt_secret, token).map_err(|e| {
        debug!("token verification failed: {e}");
        AppError::Unauthorized
    })?;

    // A token outliving its user gets rejected here.
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&claims.sub)
        .fetch_optional(&state.db)
        .await?;
    let user = user.ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(Arc::new(user));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
