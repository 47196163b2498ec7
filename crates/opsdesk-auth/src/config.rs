//! Session service configuration.
//!
//! There is no real backend: authentication matches against a fixed demo
//! credential set, and the "API latency" is a configurable sleep. Tests
//! set the delays to zero.

use std::time::Duration;

use opsdesk_core::models::identity::{AuthProvider, Identity, Role};
use uuid::Uuid;

/// One entry of the fixed credential set.
#[derive(Debug, Clone)]
pub struct DemoCredential {
    pub identity: Identity,
    pub secret: String,
}

/// Configuration for the session service.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fixed credential set matched by `login`.
    pub credentials: Vec<DemoCredential>,
    /// Simulated latency before a credential login resolves
    /// (default: 1000 ms).
    pub login_delay: Duration,
    /// Simulated latency for the external-provider handshake
    /// (default: 1500 ms).
    pub provider_login_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credentials: vec![
                DemoCredential {
                    identity: Identity {
                        id: Uuid::from_u128(1),
                        email: "admin@example.com".into(),
                        name: "Admin User".into(),
                        role: Role::Admin,
                        avatar: None,
                        provider: AuthProvider::Email,
                    },
                    secret: "password".into(),
                },
                DemoCredential {
                    identity: Identity {
                        id: Uuid::from_u128(2),
                        email: "employee@example.com".into(),
                        name: "Dana Field".into(),
                        role: Role::Employee,
                        avatar: None,
                        provider: AuthProvider::Email,
                    },
                    secret: "password".into(),
                },
            ],
            login_delay: Duration::from_millis(1000),
            provider_login_delay: Duration::from_millis(1500),
        }
    }
}
