//! Opsdesk Store — local key-value persistence and registry
//! implementations.
//!
//! This crate provides:
//! - The storage adapter seam ([`KvStore`]) with an in-memory backend
//!   ([`MemoryKv`]) and a file-backed one ([`FileKv`])
//! - Implementations of the `opsdesk-core` registry traits on top of it
//! - First-run demo seeding ([`seed_demo_orders`])
//! - Error types ([`StoreError`])
//!
//! Every collection is persisted as one JSON-encoded snapshot under a
//! fixed namespace key; each write replaces the whole snapshot, so
//! concurrent writers are last-writer-wins by design.

mod error;
mod kv;
pub mod registry;
mod seed;

pub use error::StoreError;
pub use kv::{FileKv, KvStore, MemoryKv};
pub use seed::seed_demo_orders;

/// Fixed namespace key for the persisted session identity.
pub const SESSION_KEY: &str = "opsdesk_user";
/// Fixed namespace key for the attendance record array.
pub const ATTENDANCE_KEY: &str = "attendance_records";
/// Fixed namespace key for the purchase order array.
pub const PURCHASE_ORDERS_KEY: &str = "opsdesk_purchase_orders";
/// Fixed namespace key for the leave request array.
pub const LEAVE_REQUESTS_KEY: &str = "opsdesk_leave_requests";
