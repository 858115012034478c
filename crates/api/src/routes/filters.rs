use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::filters;
use crate::state::AppState;

/// Filter routes mounted at `/filters`.
///
/// ```text
/// GET    /                          -> list_filters
/// POST   /                          -> create_filter
/// PUT    /order                     -> reorder
/// POST   /bulk-delete               -> bulk_delete
/// GET    /columns/{column}/values   -> column_values
/// GET    /{id}                      -> get_filter
/// PATCH  /{id}                      -> update_filter
/// DELETE /{id}                      -> delete_filter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(filters::list_filters).post(filters::create_filter))
        .route("/order", put(filters::reorder))
        .route("/bulk-delete", post(filters::bulk_delete))
        .route("/columns/{column}/values", get(filters::column_values))
        .route(
            "/{id}",
            get(filters::get_filter)
                .patch(filters::update_filter)
                .delete(filters::delete_filter),
        )
}
