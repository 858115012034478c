//! In-memory backing store for the mock server.
//!
//! Holds the seeded catalog, the filter set and the warehouse orders. All
//! filter rules come from `imagiq_core`; this layer only adds id minting,
//! reference checks against the catalog and scope compaction.

use std::collections::BTreeSet;

use imagiq_core::catalog::{Category, Menu, ProductSummary, Submenu};
use imagiq_core::error::CoreError;
use imagiq_core::filters::columns::require_column;
use imagiq_core::filters::lifecycle::{apply_update, build_filter};
use imagiq_core::filters::ordering::{compact_scope, filters_in_scope, reorder_scope};
use imagiq_core::filters::validation::validate_dynamic_selection;
use imagiq_core::filters::{
    BulkDeleteResult, ColumnDataType, ColumnValues, CreateFilter, DynamicFilter,
    FilterListQuery, FilterScope, FilterValueConfig, OrderAssignment, ReorderRequest, ScopeKind,
    UpdateFilter,
};
use imagiq_core::types::{EntityId, Timestamp};
use imagiq_core::warehouse::mock::generate_mock_orders;
use imagiq_core::warehouse::{WarehouseMetrics, WarehouseOrder};
use uuid::Uuid;

use crate::seed;

/// Number of mock orders generated at startup.
const MOCK_ORDER_COUNT: usize = 40;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    categories: Vec<Category>,
    menus: Vec<Menu>,
    submenus: Vec<Submenu>,
    products: Vec<ProductSummary>,
    filters: Vec<DynamicFilter>,
    orders: Vec<WarehouseOrder>,
}

impl MemoryStore {
    /// Store with the seeded catalog, no filters, and mock warehouse orders.
    pub fn seeded(now: Timestamp, warehouse_seed: u64) -> Self {
        Self {
            categories: seed::categories(now),
            menus: seed::menus(),
            submenus: seed::submenus(),
            products: seed::products(),
            filters: Vec::new(),
            orders: generate_mock_orders(MOCK_ORDER_COUNT, warehouse_seed, now),
        }
    }

    // -----------------------------------------------------------------------
    // Catalog
    // -----------------------------------------------------------------------

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn menus_for(&self, category_id: &str) -> Result<Vec<Menu>, CoreError> {
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: category_id.to_string(),
            });
        }
        Ok(self
            .menus
            .iter()
            .filter(|m| m.category_id == category_id)
            .cloned()
            .collect())
    }

    pub fn submenus_for(&self, menu_id: &str) -> Result<Vec<Submenu>, CoreError> {
        if !self.menus.iter().any(|m| m.id == menu_id) {
            return Err(CoreError::NotFound {
                entity: "Menu",
                id: menu_id.to_string(),
            });
        }
        Ok(self
            .submenus
            .iter()
            .filter(|s| s.menu_id == menu_id)
            .cloned()
            .collect())
    }

    fn scope_exists(&self, kind: ScopeKind, id: &str) -> bool {
        match kind {
            ScopeKind::Category => self.categories.iter().any(|c| c.id == id),
            ScopeKind::Menu => self.menus.iter().any(|m| m.id == id),
            ScopeKind::Submenu => self.submenus.iter().any(|s| s.id == id),
        }
    }

    fn check_scope_refs(&self, scope: &FilterScope) -> Result<(), CoreError> {
        for kind in ScopeKind::ALL {
            let mut ids = scope.ids(kind).iter();
            if let Some(unknown) = ids.find(|id| !self.scope_exists(kind, id)) {
                return Err(CoreError::Validation(format!(
                    "Unknown {} '{unknown}' in scope.{}",
                    kind.as_str(),
                    kind.field()
                )));
            }
        }
        Ok(())
    }

    /// Distinct values the seeded products hold for a column. Number columns
    /// sort numerically, everything else lexically.
    pub fn column_values(&self, column: &str) -> Result<ColumnValues, CoreError> {
        let definition = require_column(column)?;
        let distinct: BTreeSet<String> = self
            .products
            .iter()
            .flat_map(|p| p.column_values(column))
            .collect();
        let mut values: Vec<String> = distinct.into_iter().collect();
        if definition.data_type == ColumnDataType::Number {
            values.sort_by(|a, b| {
                let (x, y) = (a.parse::<f64>().ok(), b.parse::<f64>().ok());
                x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        Ok(ColumnValues {
            column: column.to_string(),
            values,
        })
    }

    fn check_dynamic_selection(
        &self,
        column: &str,
        config: &FilterValueConfig,
    ) -> Result<(), CoreError> {
        if let FilterValueConfig::Dynamic(dynamic) = config {
            let available = self.column_values(column)?.values;
            validate_dynamic_selection(&dynamic.selected_values, &available)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Filters
    // -----------------------------------------------------------------------

    /// All filters by creation time, or one scope's filters in storefront
    /// order when the query names a scope.
    pub fn list_filters(&self, query: &FilterListQuery) -> Result<Vec<DynamicFilter>, CoreError> {
        let active_only = query.active_only.unwrap_or(false);
        match (query.scope_type, query.scope_id.as_deref()) {
            (Some(kind), Some(scope_id)) => {
                Ok(filters_in_scope(&self.filters, kind, scope_id, active_only)
                    .into_iter()
                    .cloned()
                    .collect())
            }
            (None, None) => {
                let mut all: Vec<DynamicFilter> = self
                    .filters
                    .iter()
                    .filter(|f| !active_only || f.is_active)
                    .cloned()
                    .collect();
                all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
                Ok(all)
            }
            _ => Err(CoreError::Validation(
                "scopeType and scopeId must be given together".to_string(),
            )),
        }
    }

    pub fn get_filter(&self, id: &str) -> Result<&DynamicFilter, CoreError> {
        self.filters
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| filter_not_found(id))
    }

    pub fn create_filter(
        &mut self,
        input: CreateFilter,
        now: Timestamp,
    ) -> Result<DynamicFilter, CoreError> {
        self.check_scope_refs(&input.scope)?;
        self.check_dynamic_selection(&input.column, &input.value_config)?;

        let id = Uuid::new_v4().to_string();
        let filter = build_filter(id, input, &self.filters, now)?;
        self.filters.push(filter.clone());
        Ok(filter)
    }

    pub fn update_filter(
        &mut self,
        id: &str,
        update: UpdateFilter,
        now: Timestamp,
    ) -> Result<DynamicFilter, CoreError> {
        let index = self
            .filters
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| filter_not_found(id))?;
        if let Some(scope) = &update.scope {
            self.check_scope_refs(scope)?;
        }

        let (updated, left) = apply_update(&self.filters[index], update, &self.filters, now)?;
        self.check_dynamic_selection(&updated.column, &updated.value_config)?;

        self.filters[index] = updated.clone();
        for (kind, scope_id) in left {
            compact_scope(&mut self.filters, kind, &scope_id);
        }
        Ok(updated)
    }

    pub fn delete_filter(&mut self, id: &str) -> Result<DynamicFilter, CoreError> {
        let index = self
            .filters
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| filter_not_found(id))?;
        let removed = self.filters.remove(index);
        self.compact_scopes_of(&removed.scope);
        Ok(removed)
    }

    /// Delete every listed filter that exists. Unknown ids are reported, not
    /// treated as failures.
    pub fn bulk_delete(&mut self, ids: &[EntityId]) -> BulkDeleteResult {
        let mut result = BulkDeleteResult::default();
        for id in ids {
            match self.delete_filter(id) {
                Ok(removed) => result.deleted.push(removed.id),
                Err(_) => result.not_found.push(id.clone()),
            }
        }
        result
    }

    pub fn reorder(&mut self, request: &ReorderRequest) -> Result<Vec<OrderAssignment>, CoreError> {
        if !self.scope_exists(request.scope_type, &request.scope_id) {
            return Err(CoreError::NotFound {
                entity: scope_entity(request.scope_type),
                id: request.scope_id.clone(),
            });
        }
        reorder_scope(
            &mut self.filters,
            request.scope_type,
            &request.scope_id,
            &request.filter_ids,
        )
    }

    fn compact_scopes_of(&mut self, scope: &FilterScope) {
        for kind in ScopeKind::ALL {
            for scope_id in scope.ids(kind) {
                compact_scope(&mut self.filters, kind, scope_id);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Warehouse
    // -----------------------------------------------------------------------

    pub fn warehouse_orders(&self) -> &[WarehouseOrder] {
        &self.orders
    }

    pub fn warehouse_metrics(&self, now: Timestamp) -> WarehouseMetrics {
        WarehouseMetrics::compute(&self.orders, now)
    }
}

fn filter_not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "Filter",
        id: id.to_string(),
    }
}

fn scope_entity(kind: ScopeKind) -> &'static str {
    match kind {
        ScopeKind::Category => "Category",
        ScopeKind::Menu => "Menu",
        ScopeKind::Submenu => "Submenu",
    }
}
