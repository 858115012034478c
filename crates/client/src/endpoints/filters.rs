use imagiq_core::filters::validation::validate_new_filter;
use imagiq_core::filters::{
    BulkDeleteRequest, BulkDeleteResult, ColumnValues, CreateFilter, DynamicFilter,
    FilterListQuery, OrderAssignment, ReorderRequest, UpdateFilter,
};
use imagiq_core::types::EntityId;
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

/// `/api/filters` routes.
pub struct FilterEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> FilterEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/filters
    pub async fn list(
        &self,
        session: &SessionContext,
        query: &FilterListQuery,
    ) -> Result<Vec<DynamicFilter>, ClientError> {
        let request = self.api.request(Method::GET, "/api/filters").query(query);
        self.api.send_authed(request, session).await
    }

    /// GET /api/filters/{id}
    pub async fn get(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<DynamicFilter, ClientError> {
        let request = self.api.request(Method::GET, &format!("/api/filters/{id}"));
        self.api.send_authed(request, session).await
    }

    /// POST /api/filters
    ///
    /// The payload is validated locally first; an invalid filter never
    /// leaves the client.
    pub async fn create(
        &self,
        session: &SessionContext,
        input: &CreateFilter,
    ) -> Result<DynamicFilter, ClientError> {
        validate_new_filter(input)?;
        let request = self.api.request(Method::POST, "/api/filters").json(input);
        self.api.send_authed(request, session).await
    }

    /// PATCH /api/filters/{id}
    pub async fn update(
        &self,
        session: &SessionContext,
        id: &str,
        input: &UpdateFilter,
    ) -> Result<DynamicFilter, ClientError> {
        let request = self
            .api
            .request(Method::PATCH, &format!("/api/filters/{id}"))
            .json(input);
        self.api.send_authed(request, session).await
    }

    /// DELETE /api/filters/{id}
    pub async fn delete(&self, session: &SessionContext, id: &str) -> Result<EntityId, ClientError> {
        let request = self
            .api
            .request(Method::DELETE, &format!("/api/filters/{id}"));
        self.api.send_authed(request, session).await
    }

    /// POST /api/filters/bulk-delete
    pub async fn bulk_delete(
        &self,
        session: &SessionContext,
        ids: &[EntityId],
    ) -> Result<BulkDeleteResult, ClientError> {
        let body = BulkDeleteRequest { ids: ids.to_vec() };
        let request = self
            .api
            .request(Method::POST, "/api/filters/bulk-delete")
            .json(&body);
        self.api.send_authed(request, session).await
    }

    /// PUT /api/filters/order
    pub async fn reorder(
        &self,
        session: &SessionContext,
        input: &ReorderRequest,
    ) -> Result<Vec<OrderAssignment>, ClientError> {
        let request = self
            .api
            .request(Method::PUT, "/api/filters/order")
            .json(input);
        self.api.send_authed(request, session).await
    }

    /// GET /api/filters/columns/{column}/values
    pub async fn column_values(
        &self,
        session: &SessionContext,
        column: &str,
    ) -> Result<ColumnValues, ClientError> {
        let request = self
            .api
            .request(Method::GET, &format!("/api/filters/columns/{column}/values"));
        self.api.send_authed(request, session).await
    }
}
