//! Category, menu and submenu navigation endpoints.
//!
//! Reads are public; mutations need a session.

use imagiq_core::catalog::{Category, CreateCategory, Menu, Submenu, UpdateCategory};
use imagiq_core::types::EntityId;
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::SessionContext;

pub struct CategoryEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> CategoryEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/categories
    pub async fn list(&self) -> Result<Vec<Category>, ClientError> {
        self.api
            .send(self.api.request(Method::GET, "/api/categories"))
            .await
    }

    /// GET /api/categories/{id}
    pub async fn get(&self, id: &str) -> Result<Category, ClientError> {
        self.api
            .send(self.api.request(Method::GET, &format!("/api/categories/{id}")))
            .await
    }

    /// POST /api/categories
    pub async fn create(
        &self,
        session: &SessionContext,
        input: &CreateCategory,
    ) -> Result<Category, ClientError> {
        let request = self.api.request(Method::POST, "/api/categories").json(input);
        self.api.send_authed(request, session).await
    }

    /// PATCH /api/categories/{id}
    pub async fn update(
        &self,
        session: &SessionContext,
        id: &str,
        input: &UpdateCategory,
    ) -> Result<Category, ClientError> {
        let request = self
            .api
            .request(Method::PATCH, &format!("/api/categories/{id}"))
            .json(input);
        self.api.send_authed(request, session).await
    }

    /// DELETE /api/categories/{id}
    pub async fn delete(&self, session: &SessionContext, id: &str) -> Result<EntityId, ClientError> {
        let request = self
            .api
            .request(Method::DELETE, &format!("/api/categories/{id}"));
        self.api.send_authed(request, session).await
    }
}

pub struct MenuEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> MenuEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/categories/{id}/menus
    pub async fn list_for_category(&self, category_id: &str) -> Result<Vec<Menu>, ClientError> {
        let path = format!("/api/categories/{category_id}/menus");
        self.api.send(self.api.request(Method::GET, &path)).await
    }
}

pub struct SubmenuEndpoints<'a> {
    api: &'a ApiClient,
}

impl<'a> SubmenuEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/menus/{id}/submenus
    pub async fn list_for_menu(&self, menu_id: &str) -> Result<Vec<Submenu>, ClientError> {
        let path = format!("/api/menus/{menu_id}/submenus");
        self.api.send(self.api.request(Method::GET, &path)).await
    }
}
