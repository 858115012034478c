//! Warehouse operations: orders moving through picking, packing and
//! shipping, plus the board metrics derived from them.

pub mod metrics;
pub mod mock;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

pub use metrics::WarehouseMetrics;
pub use status::{
    apply_action, can_cancel, primary_action, ActionKind, ActionOption, StatusChange,
    WarehouseAction, WarehouseStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Low,
    Normal,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseItem {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseOrder {
    pub id: EntityId,
    pub order_number: String,
    pub customer_name: String,
    pub items: Vec<WarehouseItem>,
    pub status: WarehouseStatus,
    pub assigned_operator: Option<String>,
    pub priority: OrderPriority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub due_date: Timestamp,
    #[serde(default)]
    pub history: Vec<StatusChange>,
}

impl WarehouseOrder {
    /// Display-time check: past due and still open.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        !self.status.is_terminal() && self.due_date < now
    }

    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
