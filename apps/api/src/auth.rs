use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::user::SessionUser;
use crate::state::AppState;

/// Extracts the bearer token from an `Authorization` header value.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

enum AuthFailure {
    /// No bearer token, or one that matches no live session.
    Missing,
    /// The session store itself failed.
    Lookup(anyhow::Error),
}

async fn resolve_session(parts: &Parts, state: &AppState) -> Result<SessionUser, AuthFailure> {
    let token = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .ok_or(AuthFailure::Missing)?;

    let user = state
        .store
        .find_session(token)
        .await
        .map_err(AuthFailure::Lookup)?
        .ok_or(AuthFailure::Missing)?;

    debug!("Authenticated user {}", user.user_id);
    Ok(user)
}

/// Resolves `Authorization: Bearer <token>` to the session's user, or 401.
#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_session(parts, state).await.map_err(|e| match e {
            AuthFailure::Lookup(e) => AppError::Internal(e),
            AuthFailure::Missing => AppError::Unauthorized,
        })
    }
}

/// Session extractor for the debug routes: a failing session lookup is
/// reported with its underlying error text, like every other debug failure.
pub struct DebugSession(pub SessionUser);

#[async_trait]
impl FromRequestParts<AppState> for DebugSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_session(parts, state)
            .await
            .map(DebugSession)
            .map_err(|e| match e {
                AuthFailure::Lookup(e) => AppError::Diagnostic(format!("Session lookup failed: {e:#}")),
                AuthFailure::Missing => AppError::Unauthorized,
            })
    }
}
