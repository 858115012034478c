//! Warehouse board: the operator view over in-memory orders.
//!
//! Transitions follow `imagiq_core::warehouse::status`. The board owns its
//! orders outright; a poller may replace them wholesale with a fresh fetch.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use imagiq_core::error::CoreError;
use imagiq_core::types::Timestamp;
use imagiq_core::warehouse::mock::generate_mock_orders;
use imagiq_core::warehouse::{
    apply_action, can_cancel, primary_action, ActionOption, WarehouseAction, WarehouseMetrics,
    WarehouseOrder, WarehouseStatus,
};
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::notify::Notifier;
use crate::polling::{spawn_poller, Subscription};
use crate::session::SessionContext;

/// What a board card lets the operator do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardActions {
    pub primary: Option<ActionOption>,
    pub can_cancel: bool,
}

pub struct WarehouseBoard {
    orders: Vec<WarehouseOrder>,
    notifier: Arc<dyn Notifier>,
}

impl WarehouseBoard {
    pub fn new(orders: Vec<WarehouseOrder>, notifier: Arc<dyn Notifier>) -> Self {
        Self { orders, notifier }
    }

    /// Board seeded with generated orders.
    pub fn with_mock_orders(
        count: usize,
        seed: u64,
        now: Timestamp,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(generate_mock_orders(count, seed, now), notifier)
    }

    pub fn orders(&self) -> &[WarehouseOrder] {
        &self.orders
    }

    pub fn order(&self, id: &str) -> Option<&WarehouseOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn orders_in(&self, status: WarehouseStatus) -> Vec<&WarehouseOrder> {
        self.orders.iter().filter(|o| o.status == status).collect()
    }

    /// Swap in a freshly fetched order list.
    pub fn replace_orders(&mut self, orders: Vec<WarehouseOrder>) {
        tracing::debug!(count = orders.len(), "Warehouse orders refreshed");
        self.orders = orders;
    }

    pub fn actions_for(&self, id: &str) -> ClientResult<BoardActions> {
        let order = self.order(id).ok_or_else(|| order_not_found(id))?;
        Ok(BoardActions {
            primary: primary_action(order),
            can_cancel: can_cancel(order),
        })
    }

    pub fn assign(
        &mut self,
        id: &str,
        operator: &str,
        now: Timestamp,
    ) -> ClientResult<WarehouseStatus> {
        self.apply(
            id,
            WarehouseAction::Assign {
                operator: operator.to_string(),
            },
            now,
        )
    }

    pub fn advance(&mut self, id: &str, now: Timestamp) -> ClientResult<WarehouseStatus> {
        self.apply(id, WarehouseAction::Advance, now)
    }

    pub fn cancel(&mut self, id: &str, now: Timestamp) -> ClientResult<WarehouseStatus> {
        self.apply(id, WarehouseAction::Cancel, now)
    }

    /// Open orders past their due date. Display-time only; nothing
    /// transitions on its own.
    pub fn overdue(&self, now: Timestamp) -> Vec<&WarehouseOrder> {
        self.orders.iter().filter(|o| o.is_overdue(now)).collect()
    }

    pub fn metrics(&self, now: Timestamp) -> WarehouseMetrics {
        WarehouseMetrics::compute(&self.orders, now)
    }

    fn apply(
        &mut self,
        id: &str,
        action: WarehouseAction,
        now: Timestamp,
    ) -> ClientResult<WarehouseStatus> {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == id) else {
            let err = order_not_found(id);
            self.notifier.error(&err.user_message());
            return Err(err);
        };

        match apply_action(order, &action, now) {
            Ok(status) => {
                tracing::info!(
                    order_id = %order.id,
                    order_number = %order.order_number,
                    status = status.as_str(),
                    "Warehouse order updated",
                );
                self.notifier.success(&format!(
                    "Pedido {} ahora está en {}",
                    order.order_number,
                    status.label()
                ));
                Ok(status)
            }
            Err(e) => {
                tracing::warn!(order_id = %id, error = %e, "Warehouse action rejected");
                let err = ClientError::from(e);
                self.notifier.error(&err.user_message());
                Err(err)
            }
        }
    }
}

/// Keep `board` in sync with the remote order list.
pub fn watch_orders(
    api: ApiClient,
    session: SessionContext,
    board: Arc<Mutex<WarehouseBoard>>,
    interval: Duration,
) -> Subscription {
    spawn_poller(
        "warehouse_orders",
        interval,
        move || {
            let api = api.clone();
            let session = session.clone();
            async move { api.warehouse().orders(&session).await }
        },
        move |orders| {
            let mut board = board.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            board.replace_orders(orders);
        },
    )
}

/// Refresh the board counters from the remote API.
pub fn watch_metrics<S>(
    api: ApiClient,
    session: SessionContext,
    interval: Duration,
    on_update: S,
) -> Subscription
where
    S: FnMut(WarehouseMetrics) + Send + 'static,
{
    spawn_poller(
        "warehouse_metrics",
        interval,
        move || {
            let api = api.clone();
            let session = session.clone();
            async move { api.warehouse().metrics(&session).await }
        },
        on_update,
    )
}

fn order_not_found(id: &str) -> ClientError {
    ClientError::Validation(CoreError::NotFound {
        entity: "WarehouseOrder",
        id: id.to_string(),
    })
}
