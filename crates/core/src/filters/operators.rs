//! Comparison operators and the column types each one accepts.

use serde::{Deserialize, Serialize};

use super::columns::ColumnDataType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equal,
    Includes,
    Range,
    GreaterThan,
    LessThan,
    Contains,
    StartsWith,
    EndsWith,
    NotEqual,
    In,
    NotIn,
}

/// Catalog entry describing an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorEntry {
    pub operator: FilterOperator,
    pub label: &'static str,
    pub supported_types: &'static [ColumnDataType],
}

use ColumnDataType::{Array, Boolean, Number, String as Str};

pub const FILTER_OPERATORS: &[OperatorEntry] = &[
    OperatorEntry {
        operator: FilterOperator::Equal,
        label: "Igual a",
        supported_types: &[Str, Number, Boolean],
    },
    OperatorEntry {
        operator: FilterOperator::Includes,
        label: "Incluye",
        supported_types: &[Array, Str],
    },
    OperatorEntry {
        operator: FilterOperator::Range,
        label: "Rango",
        supported_types: &[Number],
    },
    OperatorEntry {
        operator: FilterOperator::GreaterThan,
        label: "Mayor que",
        supported_types: &[Number],
    },
    OperatorEntry {
        operator: FilterOperator::LessThan,
        label: "Menor que",
        supported_types: &[Number],
    },
    OperatorEntry {
        operator: FilterOperator::Contains,
        label: "Contiene",
        supported_types: &[Str, Array],
    },
    OperatorEntry {
        operator: FilterOperator::StartsWith,
        label: "Empieza con",
        supported_types: &[Str],
    },
    OperatorEntry {
        operator: FilterOperator::EndsWith,
        label: "Termina con",
        supported_types: &[Str],
    },
    OperatorEntry {
        operator: FilterOperator::NotEqual,
        label: "Distinto de",
        supported_types: &[Str, Number, Boolean],
    },
    OperatorEntry {
        operator: FilterOperator::In,
        label: "En la lista",
        supported_types: &[Str, Number],
    },
    OperatorEntry {
        operator: FilterOperator::NotIn,
        label: "Fuera de la lista",
        supported_types: &[Str, Number],
    },
];

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Includes => "includes",
            Self::Range => "range",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::Contains => "contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::NotEqual => "not_equal",
            Self::In => "in",
            Self::NotIn => "not_in",
        }
    }

    /// Catalog entry for this operator. `FILTER_OPERATORS` is laid out in
    /// variant order.
    pub fn entry(&self) -> &'static OperatorEntry {
        &FILTER_OPERATORS[*self as usize]
    }

    pub fn supports(&self, data_type: ColumnDataType) -> bool {
        self.entry().supported_types.contains(&data_type)
    }
}

pub fn is_operator_supported(operator: FilterOperator, data_type: ColumnDataType) -> bool {
    operator.supports(data_type)
}

/// Operators offered for a column of the given type, in catalog order.
pub fn operators_for(data_type: ColumnDataType) -> Vec<FilterOperator> {
    FILTER_OPERATORS
        .iter()
        .filter(|s| s.supported_types.contains(&data_type))
        .map(|s| s.operator)
        .collect()
}
