//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::response::IntoResponse;
use imagiq_core::auth::{AdminUser, LoginRequest};
use imagiq_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{ok, ok_with_message};
use crate::state::AppState;

/// POST /api/auth/login
///
/// Check the configured admin credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let email = input.email.trim();
    if email.is_empty() || input.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".into(),
        ));
    }

    if !email.eq_ignore_ascii_case(&state.config.admin_email)
        || input.password != state.config.admin_password
    {
        tracing::warn!(email, "Login failed");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let user = AdminUser {
        id: "admin-1".into(),
        email: state.config.admin_email.clone(),
        name: "Administrador".into(),
        role: "admin".into(),
    };
    let session = state.sessions.issue(user).await;

    tracing::info!(user_id = %session.user.id, expires_at = %session.expires_at, "User logged in");

    Ok(ok(session))
}

/// POST /api/auth/logout
///
/// Revoke the caller's token.
pub async fn logout(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.sessions.revoke(&auth.token).await;

    tracing::info!(user_id = %auth.user.id, "User logged out");

    Ok(ok_with_message((), "Sesión cerrada"))
}
