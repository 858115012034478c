use imagiq_core::coverage::{CoverageZone, CreateCoverageZone, GeoPoint};
use imagiq_core::error::CoreError;
use imagiq_core::types::EntityId;
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

pub struct CoverageZoneEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> CoverageZoneEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/coverage-zones
    pub async fn list(&self, session: &SessionContext) -> Result<Vec<CoverageZone>, ClientError> {
        let request = self.api.request(Method::GET, "/api/coverage-zones");
        self.api.send_authed(request, session).await
    }

    /// POST /api/coverage-zones
    ///
    /// Polygons need at least three vertices.
    pub async fn create(
        &self,
        session: &SessionContext,
        input: &CreateCoverageZone,
    ) -> Result<CoverageZone, ClientError> {
        if input.polygon.len() < 3 {
            return Err(CoreError::Validation(
                "A coverage zone needs at least three points".to_string(),
            )
            .into());
        }
        let request = self
            .api
            .request(Method::POST, "/api/coverage-zones")
            .json(input);
        self.api.send_authed(request, session).await
    }

    /// DELETE /api/coverage-zones/{id}
    pub async fn delete(&self, session: &SessionContext, id: &str) -> Result<EntityId, ClientError> {
        let request = self
            .api
            .request(Method::DELETE, &format!("/api/coverage-zones/{id}"));
        self.api.send_authed(request, session).await
    }

    /// Active zones whose polygon contains `point`.
    pub async fn covering(
        &self,
        session: &SessionContext,
        point: GeoPoint,
    ) -> Result<Vec<CoverageZone>, ClientError> {
        let zones = self.list(session).await?;
        Ok(zones
            .into_iter()
            .filter(|z| z.is_active && z.contains(point))
            .collect())
    }
}
