//! Seeded mock orders for the warehouse board.

use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{OrderPriority, WarehouseItem, WarehouseOrder, WarehouseStatus};
use crate::types::Timestamp;

/// Operators that can be assigned to picking work.
pub const WAREHOUSE_OPERATORS: &[&str] = &[
    "Carlos Pérez",
    "Luis Martínez",
    "María Rodríguez",
    "Andrea López",
    "Jorge Ramírez",
];

const CUSTOMERS: &[&str] = &[
    "Ana Gómez",
    "Felipe Castro",
    "Laura Herrera",
    "Santiago Torres",
    "Valentina Ruiz",
    "Camilo Vargas",
];

const PRODUCTS: &[(&str, &str)] = &[
    ("SM-S921B", "Galaxy S24"),
    ("SM-S928B", "Galaxy S24 Ultra"),
    ("SM-A556E", "Galaxy A55"),
    ("SM-R630", "Galaxy Buds2 Pro"),
    ("SM-X710", "Galaxy Tab S9"),
    ("SM-L310", "Galaxy Watch6"),
];

const PRIORITIES: [OrderPriority; 4] = [
    OrderPriority::Low,
    OrderPriority::Normal,
    OrderPriority::High,
    OrderPriority::Urgent,
];

/// Generate `count` orders spread across every status.
///
/// The same `seed` and `now` always yield the same orders. Received orders
/// are left unassigned about half the time; every later status has an
/// operator.
pub fn generate_mock_orders(count: usize, seed: u64, now: Timestamp) -> Vec<WarehouseOrder> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let status = WarehouseStatus::ALL[rng.random_range(0..WarehouseStatus::ALL.len())];
            let unassigned = status == WarehouseStatus::Received && rng.random_range(0..2) == 0;
            let assigned_operator = if unassigned {
                None
            } else {
                Some(pick(&mut rng, WAREHOUSE_OPERATORS).to_string())
            };

            let item_count = rng.random_range(1..=3);
            let items = (0..item_count)
                .map(|_| {
                    let (sku, name) = PRODUCTS[rng.random_range(0..PRODUCTS.len())];
                    WarehouseItem {
                        sku: sku.to_string(),
                        name: name.to_string(),
                        quantity: rng.random_range(1..=4),
                    }
                })
                .collect();

            let created_at = now - Duration::minutes(rng.random_range(10..72 * 60));
            let due_date = created_at + Duration::hours(rng.random_range(4..48));

            WarehouseOrder {
                id: format!("wo-{}", i + 1),
                order_number: format!("IMQ-{}", 10_000 + i),
                customer_name: pick(&mut rng, CUSTOMERS).to_string(),
                items,
                status,
                assigned_operator,
                priority: PRIORITIES[rng.random_range(0..PRIORITIES.len())],
                created_at,
                updated_at: created_at,
                due_date,
                history: Vec::new(),
            }
        })
        .collect()
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_same_seed_same_orders() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(
            generate_mock_orders(20, 7, now),
            generate_mock_orders(20, 7, now)
        );
    }

    #[test]
    fn test_only_received_orders_may_be_unassigned() {
        let now = Utc::now();
        for order in generate_mock_orders(200, 42, now) {
            if order.assigned_operator.is_none() {
                assert_eq!(order.status, WarehouseStatus::Received);
            }
            assert!(!order.items.is_empty());
            assert!(order.due_date > order.created_at);
        }
    }
}
