//! Annual leave domain model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Pending => f.write_str("pending"),
            LeaveStatus::Approved => f.write_str("approved"),
            LeaveStatus::Rejected => f.write_str("rejected"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive day span, computed by the form layer at submission time.
    pub days: i64,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// Creation input. Carries no status or applied date: the registry always
/// starts a request as `Pending` and stamps the applied date itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub reason: String,
}

/// Partial update merged over an existing request. The registry performs
/// no field-level validation here; callers validate before calling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateLeaveRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub days: Option<i64>,
    pub reason: Option<String>,
    pub status: Option<LeaveStatus>,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    /// A decision always sets this, so deciding without comments clears
    /// any prior ones.
    pub comments: Option<Option<String>>,
}

/// Inclusive day count between two calendar dates:
/// `ceil((end - start) in ms / 86_400_000) + 1`, which for whole calendar
/// dates is the signed day difference plus one. A same-day span counts as
/// one day. Validation of the ordering (`start < end`) is a separate,
/// stricter check owned by the form layer.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}
