//! Tests for the typed form layer: leave date validation and day
//! counting, and purchase-order item arithmetic.

use chrono::{NaiveDate, TimeZone, Utc};
use opsdesk_core::error::OpsdeskError;
use opsdesk_core::forms::leave::LeaveRequestForm;
use opsdesk_core::forms::purchase_order::PurchaseOrderForm;
use opsdesk_core::models::identity::{AuthProvider, Identity, Role};
use opsdesk_core::models::leave::day_count;
use opsdesk_core::models::purchase_order::{OrderStatus, generate_po_number};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn employee() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: "employee@example.com".into(),
        name: "Dana Field".into(),
        role: Role::Employee,
        avatar: None,
        provider: AuthProvider::Email,
    }
}

// -----------------------------------------------------------------------
// Leave form
// -----------------------------------------------------------------------

#[test]
fn day_count_is_inclusive() {
    assert_eq!(day_count(date(2024, 6, 10), date(2024, 6, 12)), 3);
    assert_eq!(day_count(date(2024, 1, 15), date(2024, 1, 19)), 5);
    // Spans crossing a month boundary.
    assert_eq!(day_count(date(2024, 2, 28), date(2024, 3, 1)), 3);
}

#[test]
fn same_day_counts_as_one() {
    assert_eq!(day_count(date(2024, 6, 10), date(2024, 6, 10)), 1);
}

#[test]
fn submission_rejects_start_not_before_end() {
    // Equal dates are rejected even though the day-count formula would
    // yield 1 for them; the ordering check is strict.
    let form = LeaveRequestForm {
        start_date: date(2024, 6, 10),
        end_date: date(2024, 6, 10),
        reason: "trip".into(),
    };
    assert!(matches!(
        form.validate(),
        Err(OpsdeskError::Validation { .. })
    ));

    let form = LeaveRequestForm {
        start_date: date(2024, 6, 12),
        end_date: date(2024, 6, 10),
        reason: "trip".into(),
    };
    assert!(form.into_create(&employee()).is_err());
}

#[test]
fn create_payload_carries_requester_and_days() {
    let who = employee();
    let form = LeaveRequestForm {
        start_date: date(2024, 6, 10),
        end_date: date(2024, 6, 12),
        reason: "trip".into(),
    };
    let create = form.into_create(&who).unwrap();
    assert_eq!(create.employee_id, who.id);
    assert_eq!(create.employee_name, who.name);
    assert_eq!(create.days, 3);
    assert_eq!(create.reason, "trip");
}

#[test]
fn edit_payload_recomputes_days() {
    let form = LeaveRequestForm {
        start_date: date(2024, 3, 1),
        end_date: date(2024, 3, 5),
        reason: "personal".into(),
    };
    let update = form.into_update().unwrap();
    assert_eq!(update.days, Some(5));
    assert_eq!(update.status, None);
}

// -----------------------------------------------------------------------
// Purchase order form
// -----------------------------------------------------------------------

#[test]
fn new_form_starts_with_one_blank_item() {
    let form = PurchaseOrderForm::new();
    assert_eq!(form.items.len(), 1);
    assert_eq!(form.items[0].quantity, 1);
    assert_eq!(form.items[0].unit_price, 0.0);
    assert_eq!(form.grand_total(), 0.0);
}

#[test]
fn amount_is_sum_of_item_totals() {
    let mut form = PurchaseOrderForm::new();
    form.set_item_quantity(0, 2);
    form.set_item_unit_price(0, 10.0);
    form.add_item();
    form.set_item_quantity(1, 1);
    form.set_item_unit_price(1, 5.0);
    assert_eq!(form.grand_total(), 25.0);

    // Editing a factor recomputes the item total and the grand total.
    form.set_item_quantity(0, 3);
    assert_eq!(form.items[0].total_price, 30.0);
    assert_eq!(form.grand_total(), 35.0);
}

#[test]
fn removing_sole_item_is_refused() {
    let mut form = PurchaseOrderForm::new();
    assert!(!form.remove_item(0));
    assert_eq!(form.items.len(), 1);

    form.add_item();
    assert!(form.remove_item(1));
    assert_eq!(form.items.len(), 1);
    // Back to one item: refused again.
    assert!(!form.remove_item(0));
}

#[test]
fn create_payload_computes_amount_and_po_number() {
    let mut form = PurchaseOrderForm::new();
    form.vendor = "Tooling Ltd.".into();
    form.description = "Bench equipment".into();
    form.set_item_description(0, "Torque wrench");
    form.set_item_quantity(0, 4);
    form.set_item_unit_price(0, 12.5);

    let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
    let create = form.into_create("admin@example.com", now).unwrap();
    assert_eq!(create.amount, 50.0);
    assert_eq!(create.status, OrderStatus::Pending);
    assert!(create.po_number.starts_with("PO-2026-"));
    assert_eq!(create.po_number.len(), "PO-2026-".len() + 3);
}

#[test]
fn missing_vendor_is_rejected() {
    let mut form = PurchaseOrderForm::new();
    form.description = "no vendor".into();
    let err = form.into_update();
    assert!(matches!(err, Err(OpsdeskError::Validation { .. })));
}

#[test]
fn po_number_format() {
    let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let number = generate_po_number(now);
    assert!(number.starts_with("PO-2024-"));
    let suffix = number.rsplit('-').next().unwrap();
    assert_eq!(suffix.len(), 3);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));
}
