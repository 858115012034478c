use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Public catalog navigation routes, merged at the API root.
///
/// ```text
/// GET    /categories                 -> list_categories
/// GET    /categories/{id}/menus      -> list_menus
/// GET    /menus/{id}/submenus        -> list_submenus
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/categories/{id}/menus", get(catalog::list_menus))
        .route("/menus/{id}/submenus", get(catalog::list_submenus))
}
