//! Purchase order form: item editing, total recomputation, and payload
//! building.
//!
//! This is the one place that enforces the order-level invariants: `amount`
//! equals the sum of item totals, and an order keeps at least one item.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{OpsdeskError, OpsdeskResult};
use crate::models::purchase_order::{
    CreatePurchaseOrder, OrderItem, OrderStatus, PurchaseOrder, UpdatePurchaseOrder,
    generate_po_number,
};

/// One editable line item.
#[derive(Debug, Clone)]
pub struct OrderItemForm {
    pub id: Uuid,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl OrderItemForm {
    fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: 1,
            unit_price: 0.0,
            total_price: 0.0,
        }
    }

    fn into_item(self) -> OrderItem {
        OrderItem {
            id: self.id,
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price: self.total_price,
        }
    }
}

/// Editable state for creating or editing a purchase order.
#[derive(Debug, Clone)]
pub struct PurchaseOrderForm {
    /// Supplied when editing; generated at submission time when absent.
    pub po_number: Option<String>,
    pub vendor: String,
    pub description: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItemForm>,
    pub images: Vec<String>,
}

impl PurchaseOrderForm {
    /// A blank form with a single blank item (quantity 1, price 0).
    pub fn new() -> Self {
        Self {
            po_number: None,
            vendor: String::new(),
            description: String::new(),
            status: OrderStatus::Pending,
            items: vec![OrderItemForm::blank()],
            images: Vec::new(),
        }
    }

    /// Load an existing order for editing.
    pub fn from_order(order: &PurchaseOrder) -> Self {
        let items = if order.items.is_empty() {
            vec![OrderItemForm::blank()]
        } else {
            order
                .items
                .iter()
                .map(|item| OrderItemForm {
                    id: item.id,
                    description: item.description.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    total_price: item.total_price,
                })
                .collect()
        };
        Self {
            po_number: Some(order.po_number.clone()),
            vendor: order.vendor.clone(),
            description: order.description.clone(),
            status: order.status,
            items,
            images: order.images.clone(),
        }
    }

    pub fn add_item(&mut self) {
        self.items.push(OrderItemForm::blank());
    }

    /// Remove an item. Refused (returns `false`) when it would leave the
    /// order without any items, or when the index is out of range.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn set_item_description(&mut self, index: usize, description: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = description.into();
        }
    }

    pub fn set_item_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
            item.total_price = f64::from(quantity) * item.unit_price;
        }
    }

    pub fn set_item_unit_price(&mut self, index: usize, unit_price: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_price = unit_price;
            item.total_price = f64::from(item.quantity) * unit_price;
        }
    }

    /// Order-level amount: the sum of all item total prices.
    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }

    fn check(&self) -> OpsdeskResult<()> {
        if self.vendor.trim().is_empty() {
            return Err(OpsdeskError::validation("Vendor is required"));
        }
        if self.description.trim().is_empty() {
            return Err(OpsdeskError::validation("Description is required"));
        }
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(OpsdeskError::validation("Item quantity must be at least 1"));
        }
        if self.items.iter().any(|item| item.unit_price < 0.0) {
            return Err(OpsdeskError::validation("Unit price must not be negative"));
        }
        Ok(())
    }

    /// Build a creation payload, generating a PO number when none was
    /// supplied and computing `amount` from the item totals.
    pub fn into_create(
        self,
        created_by: &str,
        now: DateTime<Utc>,
    ) -> OpsdeskResult<CreatePurchaseOrder> {
        self.check()?;
        let amount = self.grand_total();
        let po_number = self
            .po_number
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| generate_po_number(now));
        Ok(CreatePurchaseOrder {
            po_number,
            vendor: self.vendor,
            description: self.description,
            amount,
            status: self.status,
            created_by: created_by.to_string(),
            items: self.items.into_iter().map(OrderItemForm::into_item).collect(),
            images: self.images,
        })
    }

    /// Build a full-form update payload, recomputing `amount` and
    /// replacing the item and image lists.
    pub fn into_update(self) -> OpsdeskResult<UpdatePurchaseOrder> {
        self.check()?;
        let amount = self.grand_total();
        Ok(UpdatePurchaseOrder {
            po_number: self.po_number,
            vendor: Some(self.vendor),
            description: Some(self.description),
            amount: Some(amount),
            status: Some(self.status),
            items: Some(self.items.into_iter().map(OrderItemForm::into_item).collect()),
            images: Some(self.images),
        })
    }
}

impl Default for PurchaseOrderForm {
    fn default() -> Self {
        Self::new()
    }
}
