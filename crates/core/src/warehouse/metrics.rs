//! Aggregate counters shown above the warehouse board.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{WarehouseOrder, WarehouseStatus};
use crate::types::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseMetrics {
    pub total_orders: usize,
    pub by_status: BTreeMap<WarehouseStatus, usize>,
    /// Orders past received and not yet shipped or cancelled.
    pub in_progress: usize,
    pub overdue: usize,
    pub unassigned: usize,
    pub units_pending: u32,
    /// Shipped over all non-cancelled orders, 0.0 when there are none.
    pub completion_rate: f64,
    pub computed_at: Timestamp,
}

impl WarehouseMetrics {
    pub fn compute(orders: &[WarehouseOrder], now: Timestamp) -> Self {
        let mut by_status: BTreeMap<WarehouseStatus, usize> =
            WarehouseStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for order in orders {
            *by_status.entry(order.status).or_default() += 1;
        }

        let open: Vec<&WarehouseOrder> =
            orders.iter().filter(|o| !o.status.is_terminal()).collect();
        let in_progress = open
            .iter()
            .filter(|o| o.status != WarehouseStatus::Received)
            .count();
        let overdue = open.iter().filter(|o| o.is_overdue(now)).count();
        let unassigned = open
            .iter()
            .filter(|o| o.assigned_operator.is_none())
            .count();
        let units_pending = open.iter().map(|o| o.total_units()).sum();

        let shipped = by_status[&WarehouseStatus::Shipped];
        let cancelled = by_status[&WarehouseStatus::Cancelled];
        let denominator = orders.len() - cancelled;
        let completion_rate = if denominator == 0 {
            0.0
        } else {
            shipped as f64 / denominator as f64
        };

        Self {
            total_orders: orders.len(),
            by_status,
            in_progress,
            overdue,
            unassigned,
            units_pending,
            completion_rate,
            computed_at: now,
        }
    }
}
