pub mod auth;
pub mod catalog;
pub mod filters;
pub mod health;
pub mod warehouse;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                               login (public)
/// /auth/logout                              logout (requires auth)
///
/// /categories                               list (public)
/// /categories/{id}/menus                    menus of a category (public)
/// /menus/{id}/submenus                      submenus of a menu (public)
///
/// /filters                                  list, create
/// /filters/order                            reorder one scope (PUT)
/// /filters/bulk-delete                      delete many (POST)
/// /filters/columns/{column}/values          distinct catalog values
/// /filters/{id}                             get, update (PATCH), delete
///
/// /warehouse/orders                         board orders
/// /warehouse/metrics                        board counters
/// ```
///
/// Everything outside `/auth/login` and the catalog reads requires a bearer
/// token issued by login.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(catalog::router())
        .nest("/filters", filters::router())
        .nest("/warehouse", warehouse::router())
}
