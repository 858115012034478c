//! Warehouse order status progression.
//!
//! Statuses advance along a single line. Each non-terminal status exposes one
//! primary action to the operator UI, and `cancelled` is reachable from any
//! non-terminal status.

use serde::{Deserialize, Serialize};

use super::WarehouseOrder;
use crate::error::CoreError;
use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseStatus {
    Received,
    Assigned,
    Picking,
    Picked,
    QualityCheck,
    Packing,
    Packed,
    ShippingLabel,
    Shipped,
    Cancelled,
}

impl WarehouseStatus {
    pub const ALL: [WarehouseStatus; 10] = [
        WarehouseStatus::Received,
        WarehouseStatus::Assigned,
        WarehouseStatus::Picking,
        WarehouseStatus::Picked,
        WarehouseStatus::QualityCheck,
        WarehouseStatus::Packing,
        WarehouseStatus::Packed,
        WarehouseStatus::ShippingLabel,
        WarehouseStatus::Shipped,
        WarehouseStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Assigned => "assigned",
            Self::Picking => "picking",
            Self::Picked => "picked",
            Self::QualityCheck => "quality_check",
            Self::Packing => "packing",
            Self::Packed => "packed",
            Self::ShippingLabel => "shipping_label",
            Self::Shipped => "shipped",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human-facing name shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Recibido",
            Self::Assigned => "Asignado",
            Self::Picking => "En Picking",
            Self::Picked => "Picking Completo",
            Self::QualityCheck => "Control de Calidad",
            Self::Packing => "Empacando",
            Self::Packed => "Empacado",
            Self::ShippingLabel => "Guía Generada",
            Self::Shipped => "Enviado",
            Self::Cancelled => "Cancelado",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Shipped | Self::Cancelled)
    }

    /// The single forward transition from this status.
    pub fn next(&self) -> Option<WarehouseStatus> {
        match self {
            Self::Received => Some(Self::Assigned),
            Self::Assigned => Some(Self::Picking),
            Self::Picking => Some(Self::Picked),
            Self::Picked => Some(Self::QualityCheck),
            Self::QualityCheck => Some(Self::Packing),
            Self::Packing => Some(Self::Packed),
            Self::Packed => Some(Self::ShippingLabel),
            Self::ShippingLabel => Some(Self::Shipped),
            Self::Shipped | Self::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Assign,
    Advance,
}

/// The primary action a board card offers for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOption {
    pub kind: ActionKind,
    pub label: &'static str,
    pub target: WarehouseStatus,
}

/// An operator command against one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WarehouseAction {
    Assign { operator: String },
    Advance,
    Cancel,
}

/// Who performed a transition and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub from: WarehouseStatus,
    pub to: WarehouseStatus,
    pub at: Timestamp,
    pub operator: Option<String>,
}

fn advance_label(from: WarehouseStatus) -> &'static str {
    match from {
        WarehouseStatus::Received => "Confirmar Asignación",
        WarehouseStatus::Assigned => "Iniciar Picking",
        WarehouseStatus::Picking => "Completar Picking",
        WarehouseStatus::Picked => "Enviar a Control de Calidad",
        WarehouseStatus::QualityCheck => "Iniciar Empaque",
        WarehouseStatus::Packing => "Completar Empaque",
        WarehouseStatus::Packed => "Generar Guía",
        WarehouseStatus::ShippingLabel => "Marcar como Enviado",
        WarehouseStatus::Shipped | WarehouseStatus::Cancelled => "",
    }
}

/// The one forward action the UI exposes for an order, if any.
///
/// A received order with nobody assigned can only be assigned; it never
/// jumps straight into picking.
pub fn primary_action(order: &WarehouseOrder) -> Option<ActionOption> {
    let target = order.status.next()?;
    if order.status == WarehouseStatus::Received && order.assigned_operator.is_none() {
        return Some(ActionOption {
            kind: ActionKind::Assign,
            label: "Asignar Operador",
            target,
        });
    }
    Some(ActionOption {
        kind: ActionKind::Advance,
        label: advance_label(order.status),
        target,
    })
}

pub fn can_cancel(order: &WarehouseOrder) -> bool {
    !order.status.is_terminal()
}

/// Apply an operator command, recording the transition.
///
/// Rejects anything other than the exposed primary action or a cancel of a
/// non-terminal order. On error the order is left untouched.
pub fn apply_action(
    order: &mut WarehouseOrder,
    action: &WarehouseAction,
    now: Timestamp,
) -> Result<WarehouseStatus, CoreError> {
    let from = order.status;
    let to = match action {
        WarehouseAction::Cancel => {
            if !can_cancel(order) {
                return Err(CoreError::Conflict(format!(
                    "Order {} is already {} and cannot be cancelled",
                    order.order_number,
                    from.as_str()
                )));
            }
            WarehouseStatus::Cancelled
        }
        WarehouseAction::Assign { operator } => {
            let option = expect_action(order, ActionKind::Assign)?;
            if operator.trim().is_empty() {
                return Err(CoreError::Validation(
                    "An operator must be selected".to_string(),
                ));
            }
            order.assigned_operator = Some(operator.trim().to_string());
            option.target
        }
        WarehouseAction::Advance => expect_action(order, ActionKind::Advance)?.target,
    };

    order.status = to;
    order.updated_at = now;
    order.history.push(StatusChange {
        from,
        to,
        at: now,
        operator: order.assigned_operator.clone(),
    });
    Ok(to)
}

fn expect_action(order: &WarehouseOrder, kind: ActionKind) -> Result<ActionOption, CoreError> {
    match primary_action(order) {
        Some(option) if option.kind == kind => Ok(option),
        Some(option) => Err(CoreError::Conflict(format!(
            "Order {} in status {} expects '{}'",
            order.order_number,
            order.status.as_str(),
            option.label
        ))),
        None => Err(CoreError::Conflict(format!(
            "Order {} in status {} has no further transitions",
            order.order_number,
            order.status.as_str()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::warehouse::{OrderPriority, WarehouseItem};

    fn order(status: WarehouseStatus, operator: Option<&str>) -> WarehouseOrder {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        WarehouseOrder {
            id: "wo-1".into(),
            order_number: "IMQ-1001".into(),
            customer_name: "Ana Gómez".into(),
            items: vec![WarehouseItem {
                sku: "SM-S921B".into(),
                name: "Galaxy S24".into(),
                quantity: 1,
            }],
            status,
            assigned_operator: operator.map(str::to_string),
            priority: OrderPriority::Normal,
            created_at: created,
            updated_at: created,
            due_date: created + Duration::hours(24),
            history: Vec::new(),
        }
    }

    #[test]
    fn test_unassigned_received_only_offers_assign() {
        let o = order(WarehouseStatus::Received, None);
        let action = primary_action(&o).unwrap();
        assert_eq!(action.kind, ActionKind::Assign);
        assert_eq!(action.target, WarehouseStatus::Assigned);
    }

    #[test]
    fn test_unassigned_received_cannot_advance() {
        let mut o = order(WarehouseStatus::Received, None);
        let err = apply_action(&mut o, &WarehouseAction::Advance, Utc::now()).unwrap_err();
        assert_matches!(err, CoreError::Conflict(_));
        assert_eq!(o.status, WarehouseStatus::Received);
        assert!(o.history.is_empty());
    }

    #[test]
    fn test_assign_then_start_picking() {
        let mut o = order(WarehouseStatus::Received, None);
        let now = Utc::now();
        let status = apply_action(
            &mut o,
            &WarehouseAction::Assign {
                operator: "Luis Martínez".into(),
            },
            now,
        )
        .unwrap();
        assert_eq!(status, WarehouseStatus::Assigned);
        assert_eq!(o.assigned_operator.as_deref(), Some("Luis Martínez"));

        let next = primary_action(&o).unwrap();
        assert_eq!(next.kind, ActionKind::Advance);
        assert_eq!(next.label, "Iniciar Picking");
        assert_eq!(next.target, WarehouseStatus::Picking);

        apply_action(&mut o, &WarehouseAction::Advance, now).unwrap();
        assert_eq!(o.status, WarehouseStatus::Picking);
        assert_eq!(o.history.len(), 2);
    }

    #[test]
    fn test_blank_operator_rejected() {
        let mut o = order(WarehouseStatus::Received, None);
        let result = apply_action(
            &mut o,
            &WarehouseAction::Assign {
                operator: "  ".into(),
            },
            Utc::now(),
        );
        assert_matches!(result, Err(CoreError::Validation(_)));
        assert!(o.assigned_operator.is_none());
    }

    #[test]
    fn test_full_progression_reaches_shipped() {
        let mut o = order(WarehouseStatus::Assigned, Some("Luis"));
        let now = Utc::now();
        while primary_action(&o).is_some() {
            apply_action(&mut o, &WarehouseAction::Advance, now).unwrap();
        }
        assert_eq!(o.status, WarehouseStatus::Shipped);
        assert_eq!(o.history.len(), 7);
    }

    #[test]
    fn test_cancel_from_non_terminal_only() {
        let mut o = order(WarehouseStatus::Packing, Some("Luis"));
        apply_action(&mut o, &WarehouseAction::Cancel, Utc::now()).unwrap();
        assert_eq!(o.status, WarehouseStatus::Cancelled);
        assert!(primary_action(&o).is_none());

        let result = apply_action(&mut o, &WarehouseAction::Cancel, Utc::now());
        assert_matches!(result, Err(CoreError::Conflict(_)));
    }

    #[test]
    fn test_shipped_has_no_actions() {
        let o = order(WarehouseStatus::Shipped, Some("Luis"));
        assert!(primary_action(&o).is_none());
        assert!(!can_cancel(&o));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&WarehouseStatus::QualityCheck).unwrap(),
            "\"quality_check\""
        );
        for status in WarehouseStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
