//! Opsdesk Export — CSV text blobs for attendance and purchase orders,
//! and the self-contained printable purchase-order document.

pub mod csv;
pub mod document;

pub use csv::{
    attendance_csv, attendance_export_filename, purchase_orders_csv,
    purchase_orders_export_filename,
};
pub use document::order_document_html;
