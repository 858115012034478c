//! Fixed catalog of filterable product columns.
//!
//! Each column carries its data type plus the capabilities the authoring
//! form offers for it (range queries, dynamic value discovery).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Data type of a product attribute, as declared by the column catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnDataType {
    String,
    Number,
    Array,
    Boolean,
}

impl ColumnDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Array => "array",
            Self::Boolean => "boolean",
        }
    }
}

/// One entry of the filterable column catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub data_type: ColumnDataType,
    pub supports_range: bool,
    pub supports_dynamic: bool,
}

/// Every product attribute a storefront filter may target.
pub const FILTER_COLUMNS: &[FilterColumn] = &[
    FilterColumn {
        key: "precioNormal",
        label: "Precio normal",
        data_type: ColumnDataType::Number,
        supports_range: true,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "precioDescuento",
        label: "Precio con descuento",
        data_type: ColumnDataType::Number,
        supports_range: true,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "stockTotal",
        label: "Stock total",
        data_type: ColumnDataType::Number,
        supports_range: true,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "color",
        label: "Color",
        data_type: ColumnDataType::Array,
        supports_range: false,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "capacidad",
        label: "Capacidad",
        data_type: ColumnDataType::Array,
        supports_range: false,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "memoriaram",
        label: "Memoria RAM",
        data_type: ColumnDataType::Array,
        supports_range: false,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "categoria",
        label: "Categoría",
        data_type: ColumnDataType::String,
        supports_range: false,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "subcategoria",
        label: "Subcategoría",
        data_type: ColumnDataType::String,
        supports_range: false,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "modelo",
        label: "Modelo",
        data_type: ColumnDataType::String,
        supports_range: false,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "nombreMarket",
        label: "Nombre comercial",
        data_type: ColumnDataType::String,
        supports_range: false,
        supports_dynamic: true,
    },
    FilterColumn {
        key: "disponible",
        label: "Disponible",
        data_type: ColumnDataType::Boolean,
        supports_range: false,
        supports_dynamic: false,
    },
];

/// Look up a column by its key.
pub fn find_column(key: &str) -> Option<&'static FilterColumn> {
    FILTER_COLUMNS.iter().find(|c| c.key == key)
}

/// Look up a column by its key, failing with a validation error naming the
/// accepted keys.
pub fn require_column(key: &str) -> Result<&'static FilterColumn, CoreError> {
    find_column(key).ok_or_else(|| {
        let keys: Vec<&str> = FILTER_COLUMNS.iter().map(|c| c.key).collect();
        CoreError::Validation(format!(
            "Unknown filter column '{key}'. Must be one of: {}",
            keys.join(", ")
        ))
    })
}
