//! Printable purchase-order document.
//!
//! Produces one self-contained HTML document: order header info, an
//! items table with a grand-total row, and — when the order carries
//! attachments — one image block per attachment on a following page.

use std::fmt::Write;

use opsdesk_core::models::purchase_order::PurchaseOrder;

/// Escape user-supplied text for embedding in the document.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn order_document_html(order: &PurchaseOrder) -> String {
    let mut items_rows = String::new();
    for item in &order.items {
        let _ = write!(
            items_rows,
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td></tr>",
            escape(&item.description),
            item.quantity,
            item.unit_price,
            item.total_price,
        );
    }

    let mut attachments = String::new();
    if !order.images.is_empty() {
        attachments.push_str("<div class=\"attachments\" style=\"page-break-before: always;\">");
        attachments.push_str("<h2>Attachments</h2>");
        for (index, image) in order.images.iter().enumerate() {
            let _ = write!(
                attachments,
                "<figure><img src=\"{}\" alt=\"Attachment {}\" /></figure>",
                escape(image),
                index + 1,
            );
        }
        attachments.push_str("</div>");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
         <title>Purchase Order {po_number}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 40px; }}\n\
         table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}\n\
         th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}\n\
         .grand-total td {{ font-weight: bold; }}\n\
         figure img {{ max-width: 100%; height: auto; }}\n\
         </style>\n</head>\n<body>\n\
         <h1>Purchase Order {po_number}</h1>\n\
         <dl>\n\
         <dt>Vendor</dt><dd>{vendor}</dd>\n\
         <dt>Description</dt><dd>{description}</dd>\n\
         <dt>Status</dt><dd>{status}</dd>\n\
         <dt>Created by</dt><dd>{created_by}</dd>\n\
         <dt>Created</dt><dd>{created_at}</dd>\n\
         </dl>\n\
         <table>\n\
         <thead><tr><th>Description</th><th>Quantity</th><th>Unit Price</th><th>Total</th></tr></thead>\n\
         <tbody>{items_rows}</tbody>\n\
         <tfoot><tr class=\"grand-total\"><td colspan=\"3\">Grand Total:</td><td>{amount:.2}</td></tr></tfoot>\n\
         </table>\n\
         {attachments}\n\
         </body>\n</html>\n",
        po_number = escape(&order.po_number),
        vendor = escape(&order.vendor),
        description = escape(&order.description),
        status = order.status,
        created_by = escape(&order.created_by),
        created_at = order.created_at.format("%m/%d/%Y"),
        items_rows = items_rows,
        amount = order.amount,
        attachments = attachments,
    )
}
