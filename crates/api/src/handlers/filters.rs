//! Handlers for dynamic product filters.
//!
//! All endpoints require authentication via [`AuthUser`]. Validation and
//! ordering rules live in `imagiq_core::filters`; the store applies them and
//! these handlers only translate between HTTP and the store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use imagiq_core::filters::{
    BulkDeleteRequest, CreateFilter, FilterListQuery, ReorderRequest, UpdateFilter,
};

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path, Query};
use crate::middleware::auth::AuthUser;
use crate::response::{ok, ok_with_message};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/filters
///
/// Every filter, or one scope's filters in storefront order when
/// `scopeType` and `scopeId` are given.
pub async fn list_filters(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<FilterListQuery>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.list_filters(&params)?))
}

/// GET /api/filters/{id}
pub async fn get_filter(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(filter_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.get_filter(&filter_id)?.clone()))
}

/// GET /api/filters/columns/{column}/values
///
/// Distinct catalog values for a column, the universe dynamic selections
/// are drawn from.
pub async fn column_values(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(column): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    Ok(ok(store.column_values(&column)?))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/filters
pub async fn create_filter(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFilter>,
) -> AppResult<impl IntoResponse> {
    let mut store = state.store.write().await;
    let filter = store.create_filter(input, Utc::now())?;

    tracing::info!(
        filter_id = %filter.id,
        column = %filter.column,
        user_id = %auth.user.id,
        "Filter created",
    );

    Ok((
        StatusCode::CREATED,
        ok_with_message(filter, "Filtro creado correctamente"),
    ))
}

/// PATCH /api/filters/{id}
///
/// Partial update. A changed scope appends the filter to newly joined
/// scopes and compacts the ones it left.
pub async fn update_filter(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(filter_id): Path<String>,
    Json(input): Json<UpdateFilter>,
) -> AppResult<impl IntoResponse> {
    let mut store = state.store.write().await;
    let filter = store.update_filter(&filter_id, input, Utc::now())?;

    tracing::info!(filter_id = %filter.id, user_id = %auth.user.id, "Filter updated");

    Ok(ok_with_message(filter, "Filtro actualizado correctamente"))
}

/// DELETE /api/filters/{id}
pub async fn delete_filter(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(filter_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut store = state.store.write().await;
    let removed = store.delete_filter(&filter_id)?;

    tracing::info!(filter_id = %removed.id, user_id = %auth.user.id, "Filter deleted");

    Ok(ok_with_message(removed.id, "Filtro eliminado correctamente"))
}

/// POST /api/filters/bulk-delete
pub async fn bulk_delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<BulkDeleteRequest>,
) -> AppResult<impl IntoResponse> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let mut store = state.store.write().await;
    let result = store.bulk_delete(&input.ids);

    tracing::info!(
        deleted = result.deleted.len(),
        not_found = result.not_found.len(),
        user_id = %auth.user.id,
        "Filters bulk deleted",
    );

    let message = format!("{} filtros eliminados", result.deleted.len());
    Ok(ok_with_message(result, message))
}

/// PUT /api/filters/order
///
/// Persist a drag-and-drop arrangement for one scope. The body must list
/// exactly the scope's filters.
pub async fn reorder(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let mut store = state.store.write().await;
    let assignments = store.reorder(&input)?;

    tracing::info!(
        scope_type = input.scope_type.as_str(),
        scope_id = %input.scope_id,
        count = assignments.len(),
        user_id = %auth.user.id,
        "Filters reordered",
    );

    Ok(ok_with_message(assignments, "Orden actualizado"))
}
