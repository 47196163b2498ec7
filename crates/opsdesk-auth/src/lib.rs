//! Opsdesk Auth — session service: demo-credential login, simulated
//! external-provider login, logout, and rehydration from the persisted
//! session snapshot.

pub mod config;
pub mod service;

pub use config::{DemoCredential, SessionConfig};
pub use service::SessionService;
