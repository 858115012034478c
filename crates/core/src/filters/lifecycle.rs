//! Creation and partial update of filters against the current filter set.

use super::model::{CreateFilter, DynamicFilter, ScopeKind, UpdateFilter};
use super::ordering::{assign_append_orders, sync_scope_orders};
use super::validation::{validate_filter, validate_new_filter};
use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Build a new filter from an authoring payload.
///
/// Without explicit positions the filter is appended last in every scope it
/// joins, counting the filters already in `existing`.
pub fn build_filter(
    id: EntityId,
    input: CreateFilter,
    existing: &[DynamicFilter],
    now: Timestamp,
) -> Result<DynamicFilter, CoreError> {
    validate_new_filter(&input)?;

    let order = match input.order {
        Some(order) => order,
        None => assign_append_orders(&input.scope, existing),
    };

    let filter = DynamicFilter {
        id,
        section_name: input.section_name.trim().to_string(),
        column: input.column,
        operator: input.operator,
        operator_mode: input.operator_mode,
        value_config: input.value_config,
        display_type: input.display_type,
        scope: input.scope,
        order,
        is_active: input.is_active,
        created_at: now,
        updated_at: now,
    };
    validate_filter(&filter)?;
    Ok(filter)
}

/// Merge a partial update into a copy of `current` and validate the result.
///
/// Scope changes append the filter to newly joined scopes; an explicit
/// `order` in the same update overrides those positions. Returns the updated
/// filter and the scopes it left, which the caller should compact.
pub fn apply_update(
    current: &DynamicFilter,
    update: UpdateFilter,
    others: &[DynamicFilter],
    now: Timestamp,
) -> Result<(DynamicFilter, Vec<(ScopeKind, EntityId)>), CoreError> {
    let mut next = current.clone();

    if let Some(name) = update.section_name {
        next.section_name = name.trim().to_string();
    }
    if let Some(column) = update.column {
        next.column = column;
    }
    if let Some(operator) = update.operator {
        next.operator = operator;
    }
    if let Some(mode) = update.operator_mode {
        next.operator_mode = mode;
    }
    if let Some(value_config) = update.value_config {
        next.value_config = value_config;
    }
    if let Some(display_type) = update.display_type {
        next.display_type = display_type;
    }
    if let Some(is_active) = update.is_active {
        next.is_active = is_active;
    }

    let left = match update.scope {
        Some(scope) => sync_scope_orders(&mut next, scope, others),
        None => Vec::new(),
    };
    if let Some(order) = update.order {
        next.order = order;
    }

    validate_filter(&next)?;
    next.updated_at = now;
    Ok((next, left))
}
