//! Integration tests for the persisted session snapshot.

use opsdesk_core::models::identity::{AuthProvider, Identity, Role};
use opsdesk_core::registry::SessionStore;
use opsdesk_store::registry::KvSessionStore;
use opsdesk_store::{FileKv, MemoryKv};
use uuid::Uuid;

fn admin() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: "admin@example.com".into(),
        name: "Admin User".into(),
        role: Role::Admin,
        avatar: None,
        provider: AuthProvider::Email,
    }
}

#[test]
fn save_load_clear_round_trip() {
    let store = KvSessionStore::new(MemoryKv::new());
    assert!(store.load().unwrap().is_none());

    let identity = admin();
    store.save(&identity).unwrap();

    let loaded = store.load().unwrap().expect("identity persisted");
    assert_eq!(loaded.id, identity.id);
    assert_eq!(loaded.email, identity.email);
    assert_eq!(loaded.role, Role::Admin);

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    // Clearing an empty store is fine.
    store.clear().unwrap();
}

#[test]
fn snapshot_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let identity = admin();

    {
        let store = KvSessionStore::new(FileKv::open(dir.path()).unwrap());
        store.save(&identity).unwrap();
    }

    let reopened = KvSessionStore::new(FileKv::open(dir.path()).unwrap());
    let loaded = reopened.load().unwrap().expect("identity persisted");
    assert_eq!(loaded.id, identity.id);
    assert_eq!(loaded.provider, AuthProvider::Email);
}
