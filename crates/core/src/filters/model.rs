//! The `DynamicFilter` aggregate and its request DTOs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::operators::FilterOperator;
use crate::types::{EntityId, Timestamp};

/// Whether one operator governs the whole filter or each value picks its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorMode {
    #[serde(rename = "column")]
    Column,
    #[serde(rename = "per-value")]
    PerValue,
}

/// Storefront widget used to render a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayType {
    Checkbox,
    Radio,
    Slider,
    MultiSelect,
    SingleSelect,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Slider => "slider",
            Self::MultiSelect => "multi-select",
            Self::SingleSelect => "single-select",
        }
    }
}

/// An author-entered numeric bucket, e.g. `{"label": "0-100", "min": 0, "max": 100}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRange {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualValueConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<FilterRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Per-value operators keyed by value or range label. Only meaningful in
    /// `per-value` mode.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub value_operators: BTreeMap<String, FilterOperator>,
}

impl ManualValueConfig {
    pub fn has_ranges(&self) -> bool {
        !self.ranges.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicValueConfig {
    pub selected_values: Vec<String>,
}

/// How a filter's options are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterValueConfig {
    Manual(ManualValueConfig),
    Dynamic(DynamicValueConfig),
}

/// Kind of navigation node a scope id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Category,
    Menu,
    Submenu,
}

impl ScopeKind {
    pub const ALL: [ScopeKind; 3] = [ScopeKind::Category, ScopeKind::Menu, ScopeKind::Submenu];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Menu => "menu",
            Self::Submenu => "submenu",
        }
    }

    /// Field name used for this kind inside `scope` and `order`.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Menu => "menus",
            Self::Submenu => "submenus",
        }
    }
}

/// Navigation nodes a filter is exposed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterScope {
    #[serde(default)]
    pub categories: BTreeSet<EntityId>,
    #[serde(default)]
    pub menus: BTreeSet<EntityId>,
    #[serde(default)]
    pub submenus: BTreeSet<EntityId>,
}

impl FilterScope {
    pub fn ids(&self, kind: ScopeKind) -> &BTreeSet<EntityId> {
        match kind {
            ScopeKind::Category => &self.categories,
            ScopeKind::Menu => &self.menus,
            ScopeKind::Submenu => &self.submenus,
        }
    }

    pub fn ids_mut(&mut self, kind: ScopeKind) -> &mut BTreeSet<EntityId> {
        match kind {
            ScopeKind::Category => &mut self.categories,
            ScopeKind::Menu => &mut self.menus,
            ScopeKind::Submenu => &mut self.submenus,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.menus.is_empty() && self.submenus.is_empty()
    }
}

/// Per-scope position of a filter, one map per scope kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOrder {
    #[serde(default)]
    pub categories: BTreeMap<EntityId, u32>,
    #[serde(default)]
    pub menus: BTreeMap<EntityId, u32>,
    #[serde(default)]
    pub submenus: BTreeMap<EntityId, u32>,
}

impl FilterOrder {
    pub fn positions(&self, kind: ScopeKind) -> &BTreeMap<EntityId, u32> {
        match kind {
            ScopeKind::Category => &self.categories,
            ScopeKind::Menu => &self.menus,
            ScopeKind::Submenu => &self.submenus,
        }
    }

    pub fn positions_mut(&mut self, kind: ScopeKind) -> &mut BTreeMap<EntityId, u32> {
        match kind {
            ScopeKind::Category => &mut self.categories,
            ScopeKind::Menu => &mut self.menus,
            ScopeKind::Submenu => &mut self.submenus,
        }
    }
}

/// A storefront filter bound to a product column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFilter {
    pub id: EntityId,
    pub section_name: String,
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<FilterOperator>,
    pub operator_mode: OperatorMode,
    pub value_config: FilterValueConfig,
    pub display_type: DisplayType,
    #[serde(default)]
    pub scope: FilterScope,
    #[serde(default)]
    pub order: FilterOrder,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DynamicFilter {
    pub fn in_scope(&self, kind: ScopeKind, scope_id: &str) -> bool {
        self.scope.ids(kind).contains(scope_id)
    }

    pub fn position_in(&self, kind: ScopeKind, scope_id: &str) -> Option<u32> {
        self.order.positions(kind).get(scope_id).copied()
    }
}

/// Payload collected by the authoring form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilter {
    #[validate(length(min = 1, max = 120, message = "sectionName must be 1-120 characters"))]
    pub section_name: String,
    #[validate(length(min = 1, message = "column must not be empty"))]
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<FilterOperator>,
    pub operator_mode: OperatorMode,
    pub value_config: FilterValueConfig,
    pub display_type: DisplayType,
    #[serde(default)]
    pub scope: FilterScope,
    /// Explicit positions. When absent the filter is appended last in
    /// every scope it joins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<FilterOrder>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// `null` clears the operator; an absent key leaves it unchanged.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub operator: Option<Option<FilterOperator>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_mode: Option<OperatorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_config: Option<FilterValueConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<DisplayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<FilterScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<FilterOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Keeps an explicit `null` distinct from a missing key.
fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequest {
    pub ids: Vec<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResult {
    pub deleted: Vec<EntityId>,
    pub not_found: Vec<EntityId>,
}

/// Drag-and-drop result for one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub scope_type: ScopeKind,
    pub scope_id: EntityId,
    pub filter_ids: Vec<EntityId>,
}

/// Order value assigned to one filter within one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAssignment {
    pub filter_id: EntityId,
    pub position: u32,
}

/// Query for listing filters. With both `scope_type` and `scope_id` the
/// result is that scope's filters in storefront order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<ScopeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
}

/// Distinct values currently present in the catalog for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnValues {
    pub column: String,
    pub values: Vec<String>,
}
