//! Warehouse board data: the seeded orders and their aggregate metrics.

use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ok;
use crate::state::AppState;

/// GET /api/warehouse/orders
pub async fn list_orders(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.warehouse_orders().to_vec()))
}

/// GET /api/warehouse/metrics
///
/// Counters are computed on every request so overdue flags track the clock.
pub async fn metrics(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.warehouse_metrics(Utc::now())))
}
