//! Read-only catalog navigation: categories, menus, submenus.

use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::extract::Path;
use crate::response::ok;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.categories().to_vec()))
}

/// GET /api/categories/{id}/menus
pub async fn list_menus(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.menus_for(&category_id)?))
}

/// GET /api/menus/{id}/submenus
pub async fn list_submenus(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.submenus_for(&menu_id)?))
}
