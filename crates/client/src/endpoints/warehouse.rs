use imagiq_core::warehouse::{WarehouseMetrics, WarehouseOrder};
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

pub struct WarehouseEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> WarehouseEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/warehouse/orders
    pub async fn orders(&self, session: &SessionContext) -> Result<Vec<WarehouseOrder>, ClientError> {
        let request = self.api.request(Method::GET, "/api/warehouse/orders");
        self.api.send_authed(request, session).await
    }

    /// GET /api/warehouse/metrics
    pub async fn metrics(&self, session: &SessionContext) -> Result<WarehouseMetrics, ClientError> {
        let request = self.api.request(Method::GET, "/api/warehouse/metrics");
        self.api.send_authed(request, session).await
    }
}
