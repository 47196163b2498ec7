//! Opsdesk Core — domain models, registry traits, typed forms, and
//! filtering helpers shared across all crates.

pub mod error;
pub mod filter;
pub mod forms;
pub mod models;
pub mod registry;

pub use error::{OpsdeskError, OpsdeskResult};
