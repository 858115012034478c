use axum::routing::get;
use axum::Router;

use crate::handlers::warehouse;
use crate::state::AppState;

/// Warehouse routes mounted at `/warehouse`.
///
/// ```text
/// GET    /orders                -> list_orders
/// GET    /metrics               -> metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(warehouse::list_orders))
        .route("/metrics", get(warehouse::metrics))
}
