use imagiq_core::marketing::{NotificationStats, ProductNotification};
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

/// Back-in-stock subscriptions.
pub struct ProductNotificationEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> ProductNotificationEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/product-notifications
    pub async fn list(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ProductNotification>, ClientError> {
        let request = self.api.request(Method::GET, "/api/product-notifications");
        self.api.send_authed(request, session).await
    }

    /// GET /api/product-notifications/stats
    pub async fn stats(&self, session: &SessionContext) -> Result<NotificationStats, ClientError> {
        let request = self
            .api
            .request(Method::GET, "/api/product-notifications/stats");
        self.api.send_authed(request, session).await
    }

    /// POST /api/product-notifications/{id}/notify
    pub async fn mark_notified(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<ProductNotification, ClientError> {
        let request = self
            .api
            .request(Method::POST, &format!("/api/product-notifications/{id}/notify"));
        self.api.send_authed(request, session).await
    }
}
