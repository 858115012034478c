//! Scope-local ordering of filters.
//!
//! Positions are kept per scope (one category, menu, or submenu). Changing
//! the order in one scope never touches a filter's position in another.

use std::collections::BTreeSet;

use super::model::{DynamicFilter, FilterOrder, FilterScope, OrderAssignment, ScopeKind};
use crate::error::CoreError;
use crate::types::EntityId;

/// Position a new member of the scope receives: the number of filters
/// already in it. `exclude` skips the filter being placed.
pub fn append_position(
    filters: &[DynamicFilter],
    kind: ScopeKind,
    scope_id: &str,
    exclude: Option<&str>,
) -> u32 {
    let count = filters
        .iter()
        .filter(|f| Some(f.id.as_str()) != exclude)
        .filter(|f| f.in_scope(kind, scope_id))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Build the order maps for a filter joining `scope`, appending it last in
/// every scope.
pub fn assign_append_orders(scope: &FilterScope, existing: &[DynamicFilter]) -> FilterOrder {
    let mut order = FilterOrder::default();
    for kind in ScopeKind::ALL {
        for scope_id in scope.ids(kind) {
            let position = append_position(existing, kind, scope_id, None);
            order.positions_mut(kind).insert(scope_id.clone(), position);
        }
    }
    order
}

/// Replace a filter's scope, appending it to newly joined scopes and dropping
/// positions for scopes it left. Positions in scopes it stays in are kept.
///
/// Returns the scopes the filter left so the caller can compact them.
pub fn sync_scope_orders(
    filter: &mut DynamicFilter,
    new_scope: FilterScope,
    others: &[DynamicFilter],
) -> Vec<(ScopeKind, EntityId)> {
    let mut left = Vec::new();
    for kind in ScopeKind::ALL {
        let old_ids = filter.scope.ids(kind).clone();
        let new_ids = new_scope.ids(kind);

        for removed in old_ids.difference(new_ids) {
            filter.order.positions_mut(kind).remove(removed);
            left.push((kind, removed.clone()));
        }
        for added in new_ids.difference(&old_ids) {
            let position = append_position(others, kind, added, Some(filter.id.as_str()));
            filter.order.positions_mut(kind).insert(added.clone(), position);
        }
    }
    filter.scope = new_scope;
    left
}

/// Apply a drag-and-drop arrangement to one scope.
///
/// `ordered_ids` must list exactly the filters currently in the scope. The
/// result assigns dense positions from 0 in list order.
pub fn reorder_scope(
    filters: &mut [DynamicFilter],
    kind: ScopeKind,
    scope_id: &str,
    ordered_ids: &[EntityId],
) -> Result<Vec<OrderAssignment>, CoreError> {
    let members: BTreeSet<&str> = filters
        .iter()
        .filter(|f| f.in_scope(kind, scope_id))
        .map(|f| f.id.as_str())
        .collect();

    let mut seen = BTreeSet::new();
    for id in ordered_ids {
        if !seen.insert(id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Filter '{id}' appears more than once in the new order"
            )));
        }
        if !members.contains(id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Filter '{id}' is not in {} '{scope_id}'",
                kind.as_str()
            )));
        }
    }
    if seen.len() != members.len() {
        let missing: Vec<&str> = members.difference(&seen).copied().collect();
        return Err(CoreError::Validation(format!(
            "The new order for {} '{scope_id}' is missing: {}",
            kind.as_str(),
            missing.join(", ")
        )));
    }

    let assignments: Vec<OrderAssignment> = ordered_ids
        .iter()
        .enumerate()
        .map(|(i, id)| OrderAssignment {
            filter_id: id.clone(),
            position: u32::try_from(i).unwrap_or(u32::MAX),
        })
        .collect();

    for assignment in &assignments {
        if let Some(filter) = filters.iter_mut().find(|f| f.id == assignment.filter_id) {
            filter
                .order
                .positions_mut(kind)
                .insert(scope_id.to_string(), assignment.position);
        }
    }
    Ok(assignments)
}

/// Renumber a scope densely from 0, keeping the current relative order.
pub fn compact_scope(filters: &mut [DynamicFilter], kind: ScopeKind, scope_id: &str) {
    let ordered: Vec<EntityId> = filters_in_scope(filters, kind, scope_id, false)
        .into_iter()
        .map(|f| f.id.clone())
        .collect();
    for (i, id) in ordered.iter().enumerate() {
        if let Some(filter) = filters.iter_mut().find(|f| &f.id == id) {
            filter
                .order
                .positions_mut(kind)
                .insert(scope_id.to_string(), u32::try_from(i).unwrap_or(u32::MAX));
        }
    }
}

/// Filters exposed in a scope, in storefront order.
///
/// Sorted by position, then creation time, then id. Filters missing a
/// position sort last.
pub fn filters_in_scope<'a>(
    filters: &'a [DynamicFilter],
    kind: ScopeKind,
    scope_id: &str,
    active_only: bool,
) -> Vec<&'a DynamicFilter> {
    let mut members: Vec<&DynamicFilter> = filters
        .iter()
        .filter(|f| f.in_scope(kind, scope_id))
        .filter(|f| !active_only || f.is_active)
        .collect();
    members.sort_by(|a, b| {
        let pa = a.position_in(kind, scope_id).unwrap_or(u32::MAX);
        let pb = b.position_in(kind, scope_id).unwrap_or(u32::MAX);
        pa.cmp(&pb)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    });
    members
}
