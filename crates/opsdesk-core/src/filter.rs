//! Client-side filters for derived views.
//!
//! Filters are applied over a listed snapshot; the registries themselves
//! only scope by employee id.

use chrono::NaiveDate;

use crate::models::attendance::{AttendanceRecord, ClockKind};
use crate::models::purchase_order::{OrderStatus, PurchaseOrder};

/// Filter for the employee-records view.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    /// Case-insensitive substring of the employee name, or a substring of
    /// the employee id.
    pub search: Option<String>,
    pub kind: Option<ClockKind>,
    /// Keep only records whose timestamp falls on this calendar date (UTC).
    pub date: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub fn apply(&self, records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    fn matches(&self, record: &AttendanceRecord) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let name_hit = record.employee_name.to_lowercase().contains(&term);
            let id_hit = record.employee_id.to_string().contains(&term);
            if !name_hit && !id_hit {
                return false;
            }
        }
        if let Some(kind) = self.kind
            && record.kind != kind
        {
            return false;
        }
        if let Some(date) = self.date
            && record.timestamp.date_naive() != date
        {
            return false;
        }
        true
    }
}

/// Filter for the purchase-orders view.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive substring of the PO number, vendor, or description.
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn apply(&self, orders: &[PurchaseOrder]) -> Vec<PurchaseOrder> {
        orders
            .iter()
            .filter(|order| self.matches(order))
            .cloned()
            .collect()
    }

    fn matches(&self, order: &PurchaseOrder) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = order.po_number.to_lowercase().contains(&term)
                || order.vendor.to_lowercase().contains(&term)
                || order.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }
        true
    }
}
