//! Session extractor for the protected admin routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use imagiq_core::auth::AdminUser;
use imagiq_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Admin resolved from an `Authorization: Bearer <token>` header issued by
/// `POST /api/auth/login`.
///
/// Adding it to a handler's arguments is what makes the route protected.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: AdminUser,
    /// Raw session token, kept so logout can revoke it.
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        match state.sessions.resolve(token).await {
            Some(user) => Ok(AuthUser {
                user,
                token: token.to_string(),
            }),
            None => {
                tracing::debug!("Rejected unknown or lapsed session token");
                Err(unauthorized("Invalid or expired token"))
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;
    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Expected Authorization: Bearer <token>"))
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}
