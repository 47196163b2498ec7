//! Key-value-backed implementations of the `opsdesk-core` registry
//! traits.

mod attendance;
mod leave;
mod purchase_order;
mod session;

pub use attendance::KvAttendanceLedger;
pub use leave::KvLeaveRegistry;
pub use purchase_order::KvPurchaseOrderRegistry;
pub use session::KvSessionStore;
