use chrono::Utc;
use imagiq_core::auth::{LoginRequest, LoginResponse};
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

pub struct AuthEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// POST /api/auth/login
    pub async fn login(&self, credentials: &LoginRequest) -> Result<SessionContext, ClientError> {
        let request = self
            .api
            .request(Method::POST, "/api/auth/login")
            .json(credentials);
        let login: LoginResponse = self.api.send(request).await?;
        tracing::info!(user_id = %login.user.id, expires_at = %login.expires_at, "Logged in");
        Ok(login.into())
    }

    /// POST /api/auth/logout
    pub async fn logout(&self, session: &SessionContext) -> Result<(), ClientError> {
        let request = self.api.request(Method::POST, "/api/auth/logout");
        self.api.send_authed(request, session).await
    }

    /// Keep `current` while it is usable, otherwise log in again.
    pub async fn renew(
        &self,
        current: SessionContext,
        credentials: &LoginRequest,
    ) -> Result<SessionContext, ClientError> {
        if !self.api.lifecycle().is_expired(&current, Utc::now()) {
            return Ok(current);
        }
        tracing::info!(user_id = %current.user.id, "Session lapsed, logging in again");
        self.login(credentials).await
    }
}
