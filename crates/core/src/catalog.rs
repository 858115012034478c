//! Catalog navigation nodes and product summaries.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: u32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: EntityId,
    pub category_id: EntityId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub order: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submenu {
    pub id: EntityId,
    pub menu_id: EntityId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub order: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A product row as the admin tables list it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: EntityId,
    pub codigo_market: String,
    pub nombre_market: String,
    pub modelo: String,
    pub categoria: String,
    #[serde(default)]
    pub subcategoria: Option<String>,
    #[serde(default)]
    pub color: Vec<String>,
    #[serde(default)]
    pub capacidad: Vec<String>,
    #[serde(default)]
    pub memoriaram: Vec<String>,
    pub precio_normal: f64,
    #[serde(default)]
    pub precio_descuento: Option<f64>,
    pub stock_total: u32,
    pub disponible: bool,
}

impl ProductSummary {
    /// Values this product contributes for a filter column, rendered as
    /// strings. Unknown columns contribute nothing.
    pub fn column_values(&self, column: &str) -> Vec<String> {
        match column {
            "precioNormal" => vec![format_number(self.precio_normal)],
            "precioDescuento" => self.precio_descuento.map(format_number).into_iter().collect(),
            "stockTotal" => vec![self.stock_total.to_string()],
            "color" => self.color.clone(),
            "capacidad" => self.capacidad.clone(),
            "memoriaram" => self.memoriaram.clone(),
            "categoria" => vec![self.categoria.clone()],
            "subcategoria" => self.subcategoria.iter().cloned().collect(),
            "modelo" => vec![self.modelo.clone()],
            "nombreMarket" => vec![self.nombre_market.clone()],
            "disponible" => vec![self.disponible.to_string()],
            _ => Vec::new(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Paging and search parameters for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<ProductSummary>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
}
