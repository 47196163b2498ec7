//! Key-value implementation of [`PurchaseOrderRegistry`].

use chrono::Utc;
use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::purchase_order::{
    CreatePurchaseOrder, PurchaseOrder, UpdatePurchaseOrder,
};
use opsdesk_core::registry::PurchaseOrderRegistry;
use uuid::Uuid;

use crate::PURCHASE_ORDERS_KEY;
use crate::error::StoreError;
use crate::kv::KvStore;

/// Purchase order registry stored as one JSON array snapshot.
///
/// The registry does not recompute `amount` from the items; the form
/// layer owns that invariant and this layer stores what it is given.
#[derive(Debug, Clone)]
pub struct KvPurchaseOrderRegistry<K: KvStore> {
    kv: K,
}

impl<K: KvStore> KvPurchaseOrderRegistry<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub(crate) fn load(&self) -> Result<Vec<PurchaseOrder>, StoreError> {
        match self.kv.get(PURCHASE_ORDERS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn store(&self, orders: &[PurchaseOrder]) -> Result<(), StoreError> {
        let json = serde_json::to_string(orders)?;
        self.kv.put(PURCHASE_ORDERS_KEY, &json)
    }

    pub(crate) fn is_seeded(&self) -> Result<bool, StoreError> {
        Ok(self.kv.get(PURCHASE_ORDERS_KEY)?.is_some())
    }
}

impl<K: KvStore> PurchaseOrderRegistry for KvPurchaseOrderRegistry<K> {
    fn list(&self) -> OpsdeskResult<Vec<PurchaseOrder>> {
        Ok(self.load()?)
    }

    fn create(&self, input: CreatePurchaseOrder) -> OpsdeskResult<PurchaseOrder> {
        let now = Utc::now();
        let order = PurchaseOrder {
            id: Uuid::new_v4(),
            po_number: input.po_number,
            vendor: input.vendor,
            description: input.description,
            amount: input.amount,
            status: input.status,
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
            items: input.items,
            images: input.images,
        };

        let mut orders = self.load()?;
        orders.push(order.clone());
        self.store(&orders)?;
        Ok(order)
    }

    fn update(&self, id: Uuid, input: UpdatePurchaseOrder) -> OpsdeskResult<()> {
        let mut orders = self.load()?;
        for order in orders.iter_mut().filter(|o| o.id == id) {
            if let Some(po_number) = &input.po_number {
                order.po_number = po_number.clone();
            }
            if let Some(vendor) = &input.vendor {
                order.vendor = vendor.clone();
            }
            if let Some(description) = &input.description {
                order.description = description.clone();
            }
            if let Some(amount) = input.amount {
                order.amount = amount;
            }
            if let Some(status) = input.status {
                order.status = status;
            }
            if let Some(items) = &input.items {
                order.items = items.clone();
            }
            if let Some(images) = &input.images {
                order.images = images.clone();
            }
            order.updated_at = Utc::now();
        }
        self.store(&orders)?;
        Ok(())
    }

    fn delete(&self, id: Uuid) -> OpsdeskResult<()> {
        let mut orders = self.load()?;
        orders.retain(|order| order.id != id);
        self.store(&orders)?;
        Ok(())
    }
}
