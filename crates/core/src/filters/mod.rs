//! Dynamic product filters: the column and operator catalogs, the
//! `DynamicFilter` aggregate, payload validation and scope ordering.

pub mod columns;
pub mod lifecycle;
pub mod model;
pub mod operators;
pub mod ordering;
pub mod validation;

pub use columns::{find_column, ColumnDataType, FilterColumn, FILTER_COLUMNS};
pub use model::{
    BulkDeleteRequest, BulkDeleteResult, ColumnValues, CreateFilter, DisplayType,
    DynamicFilter, DynamicValueConfig, FilterListQuery, FilterOrder, FilterRange,
    FilterScope, FilterValueConfig, ManualValueConfig, OperatorMode, OrderAssignment,
    ReorderRequest, ScopeKind, UpdateFilter,
};
pub use operators::{
    is_operator_supported, operators_for, FilterOperator, OperatorEntry, FILTER_OPERATORS,
};
