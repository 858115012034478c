//! Local cache of the filter set.
//!
//! The store mirrors the remote filters. Every mutation goes to the backend
//! first and the cached list changes only after a success response; on
//! failure the user is notified and the cache is left exactly as it was.

use std::sync::Arc;

use imagiq_core::error::CoreError;
use imagiq_core::filters::ordering::{filters_in_scope, reorder_scope};
use imagiq_core::filters::validation::{validate_dynamic_selection, validate_new_filter};
use imagiq_core::filters::{
    BulkDeleteResult, CreateFilter, DynamicFilter, FilterValueConfig, OrderAssignment,
    ReorderRequest, ScopeKind, UpdateFilter,
};
use imagiq_core::types::EntityId;

use crate::backend::FilterBackend;
use crate::error::{ClientError, ClientResult};
use crate::notify::Notifier;

pub struct FilterStore {
    backend: Arc<dyn FilterBackend>,
    notifier: Arc<dyn Notifier>,
    filters: Vec<DynamicFilter>,
}

impl FilterStore {
    pub fn new(backend: Arc<dyn FilterBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            filters: Vec::new(),
        }
    }

    pub fn filters(&self) -> &[DynamicFilter] {
        &self.filters
    }

    pub fn get(&self, id: &str) -> Option<&DynamicFilter> {
        self.filters.iter().find(|f| f.id == id)
    }

    /// Filters shown in one scope, in storefront order.
    pub fn filters_for_scope(
        &self,
        kind: ScopeKind,
        scope_id: &str,
        active_only: bool,
    ) -> Vec<&DynamicFilter> {
        filters_in_scope(&self.filters, kind, scope_id, active_only)
    }

    /// Replace the cache with the canonical remote set.
    pub async fn load(&mut self) -> ClientResult<()> {
        match self.backend.list().await {
            Ok(filters) => {
                tracing::debug!(count = filters.len(), "Filters loaded");
                self.filters = filters;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Create a filter. Without explicit positions the server appends it
    /// last in every scope it joins; the cache may be stale, so positions
    /// are never derived from it.
    pub async fn create(&mut self, input: CreateFilter) -> ClientResult<DynamicFilter> {
        if let Err(e) = validate_new_filter(&input) {
            return Err(self.fail(e.into()));
        }
        if let FilterValueConfig::Dynamic(dynamic) = &input.value_config {
            self.check_dynamic_selection(&input.column, &dynamic.selected_values)
                .await?;
        }

        match self.backend.create(&input).await {
            Ok(filter) => {
                tracing::info!(filter_id = %filter.id, column = %filter.column, "Filter created");
                self.notifier.success("Filtro creado correctamente");
                self.filters.push(filter.clone());
                Ok(filter)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn update(&mut self, id: &str, input: UpdateFilter) -> ClientResult<DynamicFilter> {
        let Some(current) = self.get(id) else {
            return Err(self.fail(not_found(id)));
        };
        let column = input.column.as_ref().unwrap_or(&current.column).clone();
        let value_config = input
            .value_config
            .as_ref()
            .unwrap_or(&current.value_config)
            .clone();
        let changes_selection = input.column.is_some() || input.value_config.is_some();
        if let (true, FilterValueConfig::Dynamic(dynamic)) = (changes_selection, &value_config) {
            self.check_dynamic_selection(&column, &dynamic.selected_values)
                .await?;
        }

        match self.backend.update(id, &input).await {
            Ok(filter) => {
                tracing::info!(filter_id = %filter.id, "Filter updated");
                self.notifier.success("Filtro actualizado correctamente");
                if let Some(slot) = self.filters.iter_mut().find(|f| f.id == id) {
                    *slot = filter.clone();
                }
                Ok(filter)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Flip `isActive` on one filter.
    pub async fn toggle_active(&mut self, id: &str) -> ClientResult<DynamicFilter> {
        let is_active = match self.get(id) {
            Some(filter) => filter.is_active,
            None => return Err(self.fail(not_found(id))),
        };
        self.update(
            id,
            UpdateFilter {
                is_active: Some(!is_active),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        match self.backend.delete(id).await {
            Ok(()) => {
                tracing::info!(filter_id = %id, "Filter deleted");
                self.notifier.success("Filtro eliminado correctamente");
                self.filters.retain(|f| f.id != id);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Delete several filters at once. Only ids the backend confirms as
    /// deleted leave the cache.
    pub async fn bulk_delete(&mut self, ids: &[EntityId]) -> ClientResult<BulkDeleteResult> {
        if ids.is_empty() {
            return Ok(BulkDeleteResult::default());
        }
        match self.backend.bulk_delete(ids).await {
            Ok(result) => {
                tracing::info!(
                    deleted = result.deleted.len(),
                    not_found = result.not_found.len(),
                    "Filters bulk deleted",
                );
                self.notifier
                    .success(&format!("{} filtros eliminados", result.deleted.len()));
                self.filters.retain(|f| !result.deleted.contains(&f.id));
                Ok(result)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Persist a drag-and-drop arrangement for one scope, then refetch the
    /// canonical set.
    ///
    /// `ordered_ids` must list exactly the filters currently in the scope.
    pub async fn reorder(
        &mut self,
        kind: ScopeKind,
        scope_id: &str,
        ordered_ids: Vec<EntityId>,
    ) -> ClientResult<Vec<OrderAssignment>> {
        let mut arranged = self.filters.clone();
        if let Err(e) = reorder_scope(&mut arranged, kind, scope_id, &ordered_ids) {
            return Err(self.fail(e.into()));
        }

        let request = ReorderRequest {
            scope_type: kind,
            scope_id: scope_id.to_string(),
            filter_ids: ordered_ids,
        };
        let assignments = match self.backend.reorder(&request).await {
            Ok(assignments) => assignments,
            Err(e) => return Err(self.fail(e)),
        };
        tracing::info!(
            scope_type = kind.as_str(),
            scope_id,
            count = assignments.len(),
            "Filters reordered",
        );
        self.notifier.success("Orden actualizado");

        match self.backend.list().await {
            Ok(filters) => self.filters = filters,
            Err(e) => {
                tracing::warn!(error = %e, "Refetch after reorder failed, applying local arrangement");
                self.filters = arranged;
            }
        }
        Ok(assignments)
    }

    /// Fetch the live values of `column` and reject selections outside them.
    async fn check_dynamic_selection(
        &self,
        column: &str,
        selected: &[String],
    ) -> ClientResult<()> {
        if selected.is_empty() {
            return Ok(());
        }
        let universe = match self.backend.column_values(column).await {
            Ok(values) => values,
            Err(e) => return Err(self.fail(e)),
        };
        validate_dynamic_selection(selected, &universe.values).map_err(|e| self.fail(e.into()))
    }

    /// Notify the user and log, handing the error back to the caller.
    fn fail(&self, error: ClientError) -> ClientError {
        match &error {
            ClientError::Network(e) => tracing::error!(error = %e, "Filter request failed"),
            other => tracing::warn!(error = %other, "Filter operation rejected"),
        }
        self.notifier.error(&error.user_message());
        error
    }
}

fn not_found(id: &str) -> ClientError {
    ClientError::Validation(CoreError::NotFound {
        entity: "Filter",
        id: id.to_string(),
    })
}
