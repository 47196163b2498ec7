//! Registry trait definitions for the domain collections.
//!
//! Each registry owns its collection exclusively and persists the whole
//! snapshot on every write. Cross-references (employee ids) are by value;
//! deleting an identity does not cascade.
//!
//! All operations are synchronous: the backing store is local. Operations
//! addressing an id that is absent from the collection are silent no-ops
//! (`Ok(())`), never errors.

use uuid::Uuid;

use crate::error::OpsdeskResult;
use crate::models::{
    attendance::{AttendanceRecord, CreateAttendanceRecord},
    identity::Identity,
    leave::{CreateLeaveRequest, LeaveRequest, UpdateLeaveRequest},
    purchase_order::{CreatePurchaseOrder, PurchaseOrder, UpdatePurchaseOrder},
};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Persisted snapshot of the current identity. At most one identity is
/// stored at a time.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> OpsdeskResult<Option<Identity>>;
    fn save(&self, identity: &Identity) -> OpsdeskResult<()>;
    fn clear(&self) -> OpsdeskResult<()>;
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

/// Append-only ledger of clock events. Records are never updated; the only
/// mutations are append and per-record delete.
pub trait AttendanceLedger: Send + Sync {
    fn append(&self, input: CreateAttendanceRecord) -> OpsdeskResult<AttendanceRecord>;
    /// All records, or only those for one employee. Full scan, no
    /// pagination; timestamps are materialized instants, not strings.
    fn list(&self, employee_id: Option<Uuid>) -> OpsdeskResult<Vec<AttendanceRecord>>;
    fn delete(&self, id: Uuid) -> OpsdeskResult<()>;
}

// ---------------------------------------------------------------------------
// Annual leave
// ---------------------------------------------------------------------------

pub trait LeaveRegistry: Send + Sync {
    fn list(&self, employee_id: Option<Uuid>) -> OpsdeskResult<Vec<LeaveRequest>>;
    /// Assigns a fresh id, stamps the applied date, and forces the initial
    /// status to `Pending`.
    fn create(&self, input: CreateLeaveRequest) -> OpsdeskResult<LeaveRequest>;
    /// Merges the given fields into the existing record. No field-level
    /// validation happens here; that is the caller's responsibility.
    fn update(&self, id: Uuid, input: UpdateLeaveRequest) -> OpsdeskResult<()>;
    /// Sets status, approver name, approval date (today), and comments in
    /// one update. Re-deciding an already-decided request overwrites the
    /// prior decision (last write wins).
    fn approve(&self, id: Uuid, approved_by: &str, comments: Option<String>)
    -> OpsdeskResult<()>;
    fn reject(&self, id: Uuid, approved_by: &str, comments: Option<String>) -> OpsdeskResult<()>;
    fn delete(&self, id: Uuid) -> OpsdeskResult<()>;
}

// ---------------------------------------------------------------------------
// Purchase orders
// ---------------------------------------------------------------------------

pub trait PurchaseOrderRegistry: Send + Sync {
    fn list(&self) -> OpsdeskResult<Vec<PurchaseOrder>>;
    /// Assigns a fresh id and stamps `created_at`/`updated_at`. The given
    /// `amount` is stored as-is; computing it from the items is the form
    /// layer's job.
    fn create(&self, input: CreatePurchaseOrder) -> OpsdeskResult<PurchaseOrder>;
    /// Merges the given fields and stamps `updated_at`.
    fn update(&self, id: Uuid, input: UpdatePurchaseOrder) -> OpsdeskResult<()>;
    fn delete(&self, id: Uuid) -> OpsdeskResult<()>;
}
