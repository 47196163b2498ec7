//! Identity domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role used for advisory presentation-layer gating. Nothing in the
/// registries enforces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

/// How the identity was established.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Email + secret against the local credential set.
    Email,
    /// Simulated third-party OAuth handshake.
    External,
}

/// The authenticated user's profile, used for attribution and role gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub provider: AuthProvider,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
