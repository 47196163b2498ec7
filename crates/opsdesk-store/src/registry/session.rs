//! Key-value implementation of [`SessionStore`].

use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::identity::Identity;
use opsdesk_core::registry::SessionStore;

use crate::SESSION_KEY;
use crate::error::StoreError;
use crate::kv::KvStore;

/// Single-record identity snapshot under the fixed session key.
#[derive(Debug, Clone)]
pub struct KvSessionStore<K: KvStore> {
    kv: K,
}

impl<K: KvStore> KvSessionStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }
}

impl<K: KvStore> SessionStore for KvSessionStore<K> {
    fn load(&self) -> OpsdeskResult<Option<Identity>> {
        match self.kv.get(SESSION_KEY)? {
            Some(json) => {
                let identity = serde_json::from_str(&json).map_err(StoreError::from)?;
                Ok(Some(identity))
            }
            None => Ok(None),
        }
    }

    fn save(&self, identity: &Identity) -> OpsdeskResult<()> {
        let json = serde_json::to_string(identity).map_err(StoreError::from)?;
        self.kv.put(SESSION_KEY, &json)?;
        Ok(())
    }

    fn clear(&self) -> OpsdeskResult<()> {
        self.kv.remove(SESSION_KEY)?;
        Ok(())
    }
}
