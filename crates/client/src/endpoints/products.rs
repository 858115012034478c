use imagiq_core::catalog::{ProductPage, ProductQuery, ProductSummary};
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;

pub struct ProductEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> ProductEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/products
    pub async fn list(&self, query: &ProductQuery) -> Result<ProductPage, ClientError> {
        let request = self.api.request(Method::GET, "/api/products").query(query);
        self.api.send(request).await
    }

    /// GET /api/products/{id}
    pub async fn get(&self, id: &str) -> Result<ProductSummary, ClientError> {
        self.api
            .send(self.api.request(Method::GET, &format!("/api/products/{id}")))
            .await
    }
}
