//! Session service — login, logout, and session rehydration.

use std::sync::{PoisonError, RwLock};

use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::identity::{AuthProvider, Identity, Role};
use opsdesk_core::registry::SessionStore;
use uuid::Uuid;

use crate::config::SessionConfig;

/// Holds the current authenticated identity for one user session.
///
/// Generic over the session store so the service has no dependency on
/// the storage crate. At most one identity is current at a time; every
/// successful login persists the snapshot, and construction rehydrates
/// from it.
pub struct SessionService<S: SessionStore> {
    store: S,
    config: SessionConfig,
    current: RwLock<Option<Identity>>,
}

impl<S: SessionStore> SessionService<S> {
    /// Build the service and rehydrate any persisted identity. A corrupt
    /// or unreadable snapshot logs a warning and starts logged out rather
    /// than failing startup.
    pub fn new(store: S, config: SessionConfig) -> Self {
        let current = match store.load() {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!(error = %err, "could not rehydrate session, starting logged out");
                None
            }
        };
        Self {
            store,
            config,
            current: RwLock::new(current),
        }
    }

    /// The current authenticated identity, if any.
    pub fn current(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Authenticate against the fixed credential set.
    ///
    /// Emails compare case-insensitively. Returns `Ok(false)` on a
    /// mismatch — bad credentials are never an error — and only a
    /// storage failure while persisting the snapshot surfaces as `Err`.
    pub async fn login(&self, email: &str, secret: &str) -> OpsdeskResult<bool> {
        tokio::time::sleep(self.config.login_delay).await;

        let email = email.to_lowercase();
        let found = self
            .config
            .credentials
            .iter()
            .find(|cred| cred.identity.email.to_lowercase() == email && cred.secret == secret);

        match found {
            Some(cred) => {
                self.set_current(cred.identity.clone())?;
                tracing::info!(email = %cred.identity.email, "login succeeded");
                Ok(true)
            }
            None => {
                tracing::info!("login failed: no matching credentials");
                Ok(false)
            }
        }
    }

    /// Simulated third-party OAuth handshake. Always succeeds after the
    /// configured delay, synthesizing a fresh employee identity.
    pub async fn login_with_provider(&self) -> OpsdeskResult<bool> {
        tokio::time::sleep(self.config.provider_login_delay).await;

        let identity = Identity {
            id: Uuid::new_v4(),
            email: "demo.external@example.com".into(),
            name: "External Demo User".into(),
            role: Role::Employee,
            avatar: None,
            provider: AuthProvider::External,
        };
        tracing::info!(email = %identity.email, "provider login succeeded");
        self.set_current(identity)?;
        Ok(true)
    }

    /// Clear the current identity and remove the persisted snapshot. No
    /// other side effects.
    pub fn logout(&self) -> OpsdeskResult<()> {
        self.store.clear()?;
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = None;
        Ok(())
    }

    fn set_current(&self, identity: Identity) -> OpsdeskResult<()> {
        self.store.save(&identity)?;
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(identity);
        Ok(())
    }
}
