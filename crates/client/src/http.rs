//! HTTP transport for the remote admin API.
//!
//! Wraps a [`reqwest::Client`] and a base URL. Authenticated calls take the
//! caller's [`SessionContext`] explicitly and are refused locally when the
//! session has lapsed.

use chrono::Utc;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::endpoints::{
    AuthEndpoints, BannerEndpoints, CategoryEndpoints, CoverageZoneEndpoints, FilterEndpoints,
    MenuEndpoints, ProductEndpoints, ProductNotificationEndpoints, SubmenuEndpoints,
    WarehouseEndpoints,
};
use crate::envelope::parse_envelope;
use crate::error::ClientError;
use crate::session::{SessionContext, TokenLifecycle};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    lifecycle: TokenLifecycle,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.clone(),
            lifecycle: TokenLifecycle::new(config.session_skew_secs),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn lifecycle(&self) -> &TokenLifecycle {
        &self.lifecycle
    }

    // ---- endpoint groups ----

    pub fn auth(&self) -> AuthEndpoints<'_> {
        AuthEndpoints::new(self)
    }

    pub fn filters(&self) -> FilterEndpoints<'_> {
        FilterEndpoints::new(self)
    }

    pub fn categories(&self) -> CategoryEndpoints<'_> {
        CategoryEndpoints::new(self)
    }

    pub fn menus(&self) -> MenuEndpoints<'_> {
        MenuEndpoints::new(self)
    }

    pub fn submenus(&self) -> SubmenuEndpoints<'_> {
        SubmenuEndpoints::new(self)
    }

    pub fn products(&self) -> ProductEndpoints<'_> {
        ProductEndpoints::new(self)
    }

    pub fn banners(&self) -> BannerEndpoints<'_> {
        BannerEndpoints::new(self)
    }

    pub fn product_notifications(&self) -> ProductNotificationEndpoints<'_> {
        ProductNotificationEndpoints::new(self)
    }

    pub fn coverage_zones(&self) -> CoverageZoneEndpoints<'_> {
        CoverageZoneEndpoints::new(self)
    }

    pub fn warehouse(&self) -> WarehouseEndpoints<'_> {
        WarehouseEndpoints::new(self)
    }

    // ---- request helpers ----

    /// Start a request against `path`, which must begin with `/`.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    /// Send a public request and decode its envelope.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Request to API failed");
            ClientError::Network(e)
        })?;
        Self::parse_response(response).await
    }

    /// Send a request on behalf of `session`, attaching its bearer token.
    pub(crate) async fn send_authed<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        session: &SessionContext,
    ) -> Result<T, ClientError> {
        let session = self.lifecycle.check(Some(session), Utc::now())?;
        self.send(request.bearer_auth(&session.token)).await
    }

    /// Read the body once and hand it to the envelope parser.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status().as_u16();
        let url = response.url().path().to_string();
        let body = response.bytes().await?;
        let result = parse_envelope(status, &body);
        if let Err(ClientError::Api { status, message, .. }) = &result {
            tracing::warn!(status, path = %url, message = %message, "API reported failure");
        }
        result
    }
}
