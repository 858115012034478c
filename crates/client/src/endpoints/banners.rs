use imagiq_core::marketing::{Banner, CreateBanner};
use imagiq_core::types::EntityId;
use reqwest::Method;
use serde_json::json;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

pub struct BannerEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> BannerEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/banners
    pub async fn list(&self, session: &SessionContext) -> Result<Vec<Banner>, ClientError> {
        let request = self.api.request(Method::GET, "/api/banners");
        self.api.send_authed(request, session).await
    }

    /// POST /api/banners
    pub async fn create(
        &self,
        session: &SessionContext,
        input: &CreateBanner,
    ) -> Result<Banner, ClientError> {
        let request = self.api.request(Method::POST, "/api/banners").json(input);
        self.api.send_authed(request, session).await
    }

    /// PATCH /api/banners/{id}
    pub async fn set_active(
        &self,
        session: &SessionContext,
        id: &str,
        is_active: bool,
    ) -> Result<Banner, ClientError> {
        let request = self
            .api
            .request(Method::PATCH, &format!("/api/banners/{id}"))
            .json(&json!({ "isActive": is_active }));
        self.api.send_authed(request, session).await
    }

    /// DELETE /api/banners/{id}
    pub async fn delete(&self, session: &SessionContext, id: &str) -> Result<EntityId, ClientError> {
        let request = self
            .api
            .request(Method::DELETE, &format!("/api/banners/{id}"));
        self.api.send_authed(request, session).await
    }
}
