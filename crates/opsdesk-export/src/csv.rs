//! CSV text blobs for the filtered record views.

use chrono::NaiveDate;
use opsdesk_core::models::attendance::AttendanceRecord;
use opsdesk_core::models::purchase_order::PurchaseOrder;

/// Attendance export. Header:
/// `Employee Name,Employee ID,Type,Date,Time,Latitude,Longitude,Photo`;
/// the `Photo` column is literal `Yes`/`No`.
pub fn attendance_csv(records: &[AttendanceRecord]) -> String {
    let mut lines =
        vec!["Employee Name,Employee ID,Type,Date,Time,Latitude,Longitude,Photo".to_string()];
    for record in records {
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            record.employee_name,
            record.employee_id,
            record.kind,
            record.timestamp.format("%m/%d/%Y"),
            record.timestamp.format("%H:%M:%S"),
            record.location.latitude,
            record.location.longitude,
            if record.photo.is_some() { "Yes" } else { "No" },
        ));
    }
    lines.join("\n")
}

/// Purchase order export. Header:
/// `PO Number,Vendor,Description,Amount,Status,Created Date`; vendor and
/// description are quoted.
pub fn purchase_orders_csv(orders: &[PurchaseOrder]) -> String {
    let mut lines = vec!["PO Number,Vendor,Description,Amount,Status,Created Date".to_string()];
    for order in orders {
        lines.push(format!(
            "{},\"{}\",\"{}\",{},{},{}",
            order.po_number,
            order.vendor,
            order.description,
            order.amount,
            order.status,
            order.created_at.format("%m/%d/%Y"),
        ));
    }
    lines.join("\n")
}

pub fn attendance_export_filename(today: NaiveDate) -> String {
    format!("attendance_records_{}.csv", today.format("%Y-%m-%d"))
}

pub fn purchase_orders_export_filename(today: NaiveDate) -> String {
    format!("purchase_orders_{}.csv", today.format("%Y-%m-%d"))
}
