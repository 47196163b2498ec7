//! Domain models for Opsdesk.
//!
//! These are the core types shared across all crates.

pub mod attendance;
pub mod identity;
pub mod leave;
pub mod purchase_order;
