//! Structural validation of filter payloads before submission.
//!
//! Every check returns the first violation as [`CoreError::Validation`]. The
//! dynamic-value subset check is separate ([`validate_dynamic_selection`])
//! because the value universe lives server-side and is only known at submit
//! time.

use std::collections::BTreeSet;

use validator::Validate;

use super::columns::{require_column, ColumnDataType, FilterColumn};
use super::model::{
    CreateFilter, DisplayType, DynamicFilter, FilterOrder, FilterScope, FilterValueConfig,
    ManualValueConfig, OperatorMode, ScopeKind,
};
use super::operators::FilterOperator;
use crate::error::CoreError;

/// Validate an authoring-form payload.
///
/// Checks field constraints, the column/operator/value/display contract and,
/// when explicit positions are supplied, scope/order integrity.
pub fn validate_new_filter(input: &CreateFilter) -> Result<(), CoreError> {
    input.validate()?;
    validate_definition(
        &input.column,
        input.operator_mode,
        input.operator,
        &input.value_config,
        input.display_type,
    )?;
    if let Some(order) = &input.order {
        validate_scope_order_integrity(&input.scope, order)?;
    }
    Ok(())
}

/// Validate a complete filter, including scope/order integrity.
pub fn validate_filter(filter: &DynamicFilter) -> Result<(), CoreError> {
    validate_section_name(&filter.section_name)?;
    validate_definition(
        &filter.column,
        filter.operator_mode,
        filter.operator,
        &filter.value_config,
        filter.display_type,
    )?;
    validate_scope_order_integrity(&filter.scope, &filter.order)
}

pub fn validate_section_name(name: &str) -> Result<(), CoreError> {
    let len = name.trim().chars().count();
    if len == 0 || len > 120 {
        return Err(CoreError::Validation(
            "sectionName must be 1-120 characters".to_string(),
        ));
    }
    Ok(())
}

/// Column, operator, value configuration and display widget must agree.
pub fn validate_definition(
    column_key: &str,
    mode: OperatorMode,
    operator: Option<FilterOperator>,
    value_config: &FilterValueConfig,
    display_type: DisplayType,
) -> Result<(), CoreError> {
    let column = require_column(column_key)?;
    validate_operator(column, mode, operator)?;
    validate_value_config(column, mode, operator, value_config)?;
    validate_display_type(column, mode, operator, value_config, display_type)
}

/// In `column` mode the operator is required and must accept the column's
/// type. In `per-value` mode it is optional but still type-checked.
pub fn validate_operator(
    column: &FilterColumn,
    mode: OperatorMode,
    operator: Option<FilterOperator>,
) -> Result<(), CoreError> {
    match (mode, operator) {
        (OperatorMode::Column, None) => Err(CoreError::Validation(format!(
            "An operator is required for column '{}' in column mode",
            column.key
        ))),
        (_, Some(op)) => check_operator_type(column, op),
        (OperatorMode::PerValue, None) => Ok(()),
    }
}

fn check_operator_type(column: &FilterColumn, op: FilterOperator) -> Result<(), CoreError> {
    if op.supports(column.data_type) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Operator '{}' is not valid for column '{}' of type {}",
        op.as_str(),
        column.key,
        column.data_type.as_str()
    )))
}

/// Whether the configuration is interpreted as numeric ranges rather than a
/// list of discrete values.
///
/// A per-value dynamic filter without an aggregate operator takes its
/// semantics from the column: range-capable columns are ranges.
pub fn uses_range_semantics(
    column: &FilterColumn,
    mode: OperatorMode,
    operator: Option<FilterOperator>,
    value_config: &FilterValueConfig,
) -> bool {
    match value_config {
        FilterValueConfig::Manual(manual) => match mode {
            OperatorMode::Column => operator == Some(FilterOperator::Range),
            OperatorMode::PerValue => manual.has_ranges(),
        },
        FilterValueConfig::Dynamic(_) => match (mode, operator) {
            (OperatorMode::PerValue, None) => column.supports_range,
            (_, operator) => operator == Some(FilterOperator::Range),
        },
    }
}

pub fn validate_value_config(
    column: &FilterColumn,
    mode: OperatorMode,
    operator: Option<FilterOperator>,
    value_config: &FilterValueConfig,
) -> Result<(), CoreError> {
    let range_semantics = uses_range_semantics(column, mode, operator, value_config);
    if range_semantics && !column.supports_range {
        return Err(CoreError::Validation(format!(
            "Column '{}' does not support range values",
            column.key
        )));
    }

    match value_config {
        FilterValueConfig::Manual(manual) => {
            validate_manual_config(column, mode, operator, range_semantics, manual)
        }
        FilterValueConfig::Dynamic(dynamic) => {
            if !column.supports_dynamic {
                return Err(CoreError::Validation(format!(
                    "Column '{}' does not support dynamic values",
                    column.key
                )));
            }
            check_unique_values(&dynamic.selected_values, "selectedValues")
        }
    }
}

fn validate_manual_config(
    column: &FilterColumn,
    mode: OperatorMode,
    operator: Option<FilterOperator>,
    range_semantics: bool,
    manual: &ManualValueConfig,
) -> Result<(), CoreError> {
    match mode {
        OperatorMode::Column => {
            if range_semantics {
                if manual.ranges.is_empty() {
                    return Err(CoreError::Validation(
                        "The range operator requires a non-empty ranges list".to_string(),
                    ));
                }
            } else {
                if manual.has_ranges() {
                    let op = operator.map(|o| o.as_str()).unwrap_or("none");
                    return Err(CoreError::Validation(format!(
                        "Ranges require the range operator, got '{op}'"
                    )));
                }
                if manual.values.is_empty() {
                    return Err(CoreError::Validation(
                        "A manual value list must not be empty".to_string(),
                    ));
                }
            }
            if !manual.value_operators.is_empty() {
                return Err(CoreError::Validation(
                    "valueOperators are only allowed in per-value mode".to_string(),
                ));
            }
        }
        OperatorMode::PerValue => {
            if manual.ranges.is_empty() && manual.values.is_empty() {
                return Err(CoreError::Validation(
                    "Manual values require at least one range or value".to_string(),
                ));
            }
        }
    }

    for range in &manual.ranges {
        if range.label.trim().is_empty() {
            return Err(CoreError::Validation(
                "Every range needs a label".to_string(),
            ));
        }
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(CoreError::Validation(format!(
                "Range '{}' bounds must be finite numbers",
                range.label
            )));
        }
        if range.min > range.max {
            return Err(CoreError::Validation(format!(
                "Range '{}' has min {} greater than max {}",
                range.label, range.min, range.max
            )));
        }
    }
    let labels: Vec<String> = manual.ranges.iter().map(|r| r.label.clone()).collect();
    check_unique_values(&labels, "range labels")?;

    if manual.values.iter().any(|v| v.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Manual values must not be blank".to_string(),
        ));
    }
    check_unique_values(&manual.values, "values")?;

    for (key, op) in &manual.value_operators {
        if !labels.contains(key) && !manual.values.contains(key) {
            return Err(CoreError::Validation(format!(
                "valueOperators references unknown value '{key}'"
            )));
        }
        check_operator_type(column, *op)?;
    }
    Ok(())
}

fn check_unique_values(values: &[String], what: &str) -> Result<(), CoreError> {
    let mut seen = BTreeSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate entry '{value}' in {what}"
            )));
        }
    }
    Ok(())
}

/// Sliders need numeric ranges; every other widget needs discrete options.
pub fn validate_display_type(
    column: &FilterColumn,
    mode: OperatorMode,
    operator: Option<FilterOperator>,
    value_config: &FilterValueConfig,
    display_type: DisplayType,
) -> Result<(), CoreError> {
    let range_semantics = uses_range_semantics(column, mode, operator, value_config);
    match display_type {
        DisplayType::Slider => {
            if column.data_type != ColumnDataType::Number || !range_semantics {
                return Err(CoreError::Validation(format!(
                    "Display type 'slider' requires numeric ranges, column '{}' is configured with discrete values",
                    column.key
                )));
            }
            Ok(())
        }
        other => match value_config {
            FilterValueConfig::Manual(manual)
                if manual.values.is_empty() && manual.ranges.is_empty() =>
            {
                Err(CoreError::Validation(format!(
                    "Display type '{}' requires discrete values",
                    other.as_str()
                )))
            }
            _ => Ok(()),
        },
    }
}

/// Every scope id needs an order entry and every order entry a scope id.
pub fn validate_scope_order_integrity(
    scope: &FilterScope,
    order: &FilterOrder,
) -> Result<(), CoreError> {
    for kind in ScopeKind::ALL {
        let ids = scope.ids(kind);
        let positions = order.positions(kind);
        if let Some(missing) = ids.iter().find(|id| !positions.contains_key(*id)) {
            return Err(CoreError::Validation(format!(
                "scope.{field} contains '{missing}' without a matching order.{field} entry",
                field = kind.field()
            )));
        }
        if let Some(orphan) = positions.keys().find(|id| !ids.contains(*id)) {
            return Err(CoreError::Validation(format!(
                "order.{field} contains '{orphan}' which is not in scope.{field}",
                field = kind.field()
            )));
        }
    }
    Ok(())
}

/// Dynamic selections must be drawn from the values the catalog currently
/// reports for the column.
pub fn validate_dynamic_selection(selected: &[String], available: &[String]) -> Result<(), CoreError> {
    let universe: BTreeSet<&str> = available.iter().map(String::as_str).collect();
    let unknown: Vec<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|v| !universe.contains(v))
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Selected values not present in the catalog: {}",
            unknown.join(", ")
        )))
    }
}
