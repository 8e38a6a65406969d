//! services/app/src/adapters/memory.rs
//!
//! An in-memory implementation of the `KeyValueStore` port. Used by tests and
//! by shells that want a throwaway, non-persistent backend.

use std::collections::HashMap;

use async_trait::async_trait;
use markbook_core::ports::{KeyValueStore, PortResult};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> PortResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> PortResult<()> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> PortResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_delete_cycle() {
        let store = InMemoryStore::new();
        assert!(store.get("k").await.unwrap().is_none());

        store.put("k", b"v".to_vec()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().unwrap(), b"v");

        store.delete("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }
}
