//! The seam between [`FilterStore`](crate::store::FilterStore) and the
//! transport.
//!
//! Production code uses [`HttpFilterBackend`]; tests substitute their own
//! implementations to script failures.

use async_trait::async_trait;
use imagiq_core::filters::{
    BulkDeleteResult, ColumnValues, CreateFilter, DynamicFilter, FilterListQuery,
    OrderAssignment, ReorderRequest, UpdateFilter,
};
use imagiq_core::types::EntityId;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

#[async_trait]
pub trait FilterBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<DynamicFilter>, ClientError>;

    async fn create(&self, input: &CreateFilter) -> Result<DynamicFilter, ClientError>;

    async fn update(&self, id: &str, input: &UpdateFilter) -> Result<DynamicFilter, ClientError>;

    async fn delete(&self, id: &str) -> Result<(), ClientError>;

    async fn bulk_delete(&self, ids: &[EntityId]) -> Result<BulkDeleteResult, ClientError>;

    async fn reorder(&self, request: &ReorderRequest) -> Result<Vec<OrderAssignment>, ClientError>;

    async fn column_values(&self, column: &str) -> Result<ColumnValues, ClientError>;
}

/// [`FilterBackend`] over the remote API, acting for one session.
pub struct HttpFilterBackend {
    api: ApiClient,
    session: SessionContext,
}

impl HttpFilterBackend {
    pub fn new(api: ApiClient, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}

#[async_trait]
impl FilterBackend for HttpFilterBackend {
    async fn list(&self) -> Result<Vec<DynamicFilter>, ClientError> {
        self.api
            .filters()
            .list(&self.session, &FilterListQuery::default())
            .await
    }

    async fn create(&self, input: &CreateFilter) -> Result<DynamicFilter, ClientError> {
        self.api.filters().create(&self.session, input).await
    }

    async fn update(&self, id: &str, input: &UpdateFilter) -> Result<DynamicFilter, ClientError> {
        self.api.filters().update(&self.session, id, input).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.api.filters().delete(&self.session, id).await?;
        Ok(())
    }

    async fn bulk_delete(&self, ids: &[EntityId]) -> Result<BulkDeleteResult, ClientError> {
        self.api.filters().bulk_delete(&self.session, ids).await
    }

    async fn reorder(&self, request: &ReorderRequest) -> Result<Vec<OrderAssignment>, ClientError> {
        self.api.filters().reorder(&self.session, request).await
    }

    async fn column_values(&self, column: &str) -> Result<ColumnValues, ClientError> {
        self.api.filters().column_values(&self.session, column).await
    }
}
