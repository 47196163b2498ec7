//! Integration tests for the session service over the in-memory store.

use std::time::Duration;

use opsdesk_auth::{SessionConfig, SessionService};
use opsdesk_core::models::identity::{AuthProvider, Role};
use opsdesk_core::registry::SessionStore;
use opsdesk_store::MemoryKv;
use opsdesk_store::registry::KvSessionStore;

fn test_config() -> SessionConfig {
    SessionConfig {
        login_delay: Duration::ZERO,
        provider_login_delay: Duration::ZERO,
        ..Default::default()
    }
}

fn service() -> SessionService<KvSessionStore<MemoryKv>> {
    SessionService::new(KvSessionStore::new(MemoryKv::new()), test_config())
}

#[tokio::test]
async fn login_happy_path_persists_identity() {
    let svc = service();
    assert!(svc.current().is_none());

    let ok = svc.login("admin@example.com", "password").await.unwrap();
    assert!(ok);

    let current = svc.current().expect("identity set");
    assert_eq!(current.email, "admin@example.com");
    assert_eq!(current.role, Role::Admin);
}

#[tokio::test]
async fn login_email_compare_is_case_insensitive() {
    let svc = service();
    let ok = svc.login("Admin@Example.COM", "password").await.unwrap();
    assert!(ok);
    assert!(svc.current().is_some());
}

#[tokio::test]
async fn bad_credentials_return_false_and_persist_nothing() {
    let kv = std::sync::Arc::new(MemoryKv::new());
    let svc = SessionService::new(KvSessionStore::new(kv.clone()), test_config());

    let ok = svc.login("admin@example.com", "wrong").await.unwrap();
    assert!(!ok);
    let ok = svc.login("nobody@example.com", "password").await.unwrap();
    assert!(!ok);

    assert!(svc.current().is_none());
    // Nothing reached the underlying store either.
    assert!(KvSessionStore::new(kv).load().unwrap().is_none());
}

#[tokio::test]
async fn provider_login_synthesizes_employee() {
    let svc = service();
    let ok = svc.login_with_provider().await.unwrap();
    assert!(ok);

    let current = svc.current().expect("identity set");
    assert_eq!(current.role, Role::Employee);
    assert_eq!(current.provider, AuthProvider::External);
}

#[tokio::test]
async fn logout_clears_state_and_snapshot() {
    let svc = service();
    svc.login("employee@example.com", "password").await.unwrap();
    assert!(svc.current().is_some());

    svc.logout().unwrap();
    assert!(svc.current().is_none());
    // Logging out twice is fine.
    svc.logout().unwrap();
}

#[tokio::test]
async fn session_rehydrates_across_restarts() {
    let kv = std::sync::Arc::new(MemoryKv::new());

    let svc = SessionService::new(KvSessionStore::new(kv.clone()), test_config());
    svc.login("employee@example.com", "password").await.unwrap();
    drop(svc);

    // A fresh service over the same storage picks the identity back up.
    let restarted = SessionService::new(KvSessionStore::new(kv), test_config());
    let current = restarted.current().expect("rehydrated identity");
    assert_eq!(current.email, "employee@example.com");
}
