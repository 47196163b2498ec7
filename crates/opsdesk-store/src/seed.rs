//! First-run demo data for the purchase order registry.

use chrono::{TimeZone, Utc};
use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::purchase_order::{OrderItem, OrderStatus, PurchaseOrder};
use uuid::Uuid;

use crate::kv::KvStore;
use crate::registry::KvPurchaseOrderRegistry;

/// Seed two example purchase orders if the collection has never been
/// written. Returns whether seeding happened; calling again is a no-op,
/// even after every order has been deleted (the empty snapshot counts as
/// written).
pub fn seed_demo_orders<K: KvStore>(
    registry: &KvPurchaseOrderRegistry<K>,
) -> OpsdeskResult<bool> {
    if registry.is_seeded()? {
        return Ok(false);
    }
    let orders = demo_orders();
    registry.store(&orders)?;
    tracing::info!(count = orders.len(), "seeded demo purchase orders");
    Ok(true)
}

fn demo_orders() -> Vec<PurchaseOrder> {
    let first_created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let second_created = Utc.with_ymd_and_hms(2024, 1, 18, 14, 30, 0).unwrap();
    vec![
        PurchaseOrder {
            id: Uuid::new_v4(),
            po_number: "PO-2024-001".into(),
            vendor: "Stationery Direct".into(),
            description: "Stationery restock for Q1".into(),
            amount: 1250.0,
            status: OrderStatus::Approved,
            created_by: "admin@example.com".into(),
            created_at: first_created,
            updated_at: first_created,
            items: vec![
                OrderItem {
                    id: Uuid::new_v4(),
                    description: "Copy paper (box of 5 reams)".into(),
                    quantity: 10,
                    unit_price: 25.0,
                    total_price: 250.0,
                },
                OrderItem {
                    id: Uuid::new_v4(),
                    description: "Toner cartridges".into(),
                    quantity: 5,
                    unit_price: 200.0,
                    total_price: 1000.0,
                },
            ],
            images: vec![
                "https://example.com/images/po-2024-001-a.jpg".into(),
                "https://example.com/images/po-2024-001-b.jpg".into(),
            ],
        },
        PurchaseOrder {
            id: Uuid::new_v4(),
            po_number: "PO-2024-002".into(),
            vendor: "Brightline IT".into(),
            description: "Workstation peripherals".into(),
            amount: 5500.0,
            status: OrderStatus::Pending,
            created_by: "admin@example.com".into(),
            created_at: second_created,
            updated_at: second_created,
            items: vec![
                OrderItem {
                    id: Uuid::new_v4(),
                    description: "Wireless mouse".into(),
                    quantity: 20,
                    unit_price: 25.0,
                    total_price: 500.0,
                },
                OrderItem {
                    id: Uuid::new_v4(),
                    description: "USB-C docking hub".into(),
                    quantity: 10,
                    unit_price: 500.0,
                    total_price: 5000.0,
                },
            ],
            images: vec!["https://example.com/images/po-2024-002-a.jpg".into()],
        },
    ]
}
