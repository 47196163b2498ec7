//! Purchase order domain model.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("pending"),
            OrderStatus::Approved => f.write_str("approved"),
            OrderStatus::Rejected => f.write_str("rejected"),
            OrderStatus::Completed => f.write_str("completed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// `quantity * unit_price`, recomputed by the form layer whenever
    /// either factor changes.
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    /// Human-facing identifier, e.g. `PO-2026-042`.
    pub po_number: String,
    pub vendor: String,
    pub description: String,
    /// Sum of item total prices. Computed by the form layer before
    /// create/update; the registry stores what it is given.
    pub amount: f64,
    pub status: OrderStatus,
    /// Email of the creating identity.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    /// Embedded image references (data URLs or external URLs).
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePurchaseOrder {
    pub po_number: String,
    pub vendor: String,
    pub description: String,
    pub amount: f64,
    pub status: OrderStatus,
    pub created_by: String,
    pub items: Vec<OrderItem>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePurchaseOrder {
    pub po_number: Option<String>,
    pub vendor: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<OrderStatus>,
    pub items: Option<Vec<OrderItem>>,
    pub images: Option<Vec<String>>,
}

/// Generate a human-facing PO number: current year plus the last three
/// digits of the epoch-millisecond clock. Collisions are possible and not
/// checked.
pub fn generate_po_number(now: DateTime<Utc>) -> String {
    format!("PO-{}-{:03}", now.year(), now.timestamp_millis().rem_euclid(1000))
}
