//! crates/markbook_core/src/testing.rs
//!
//! Shared test doubles for the core crate's unit tests: an in-memory
//! `KeyValueStore` and a transparent `PasswordScheme`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::NewAccount;
use crate::ports::{KeyValueStore, PasswordScheme, PortError, PortResult};

/// A mutexed in-memory store, sufficient for single-threaded unit tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> PortResult<Option<Vec<u8>>> {
        let entries = self.lock()?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> PortResult<()> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> PortResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

impl MemoryStore {
    fn lock(&self) -> PortResult<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .lock()
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }
}

pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::default())
}

/// A scheme that stores the password with a marker prefix. Keeps unit tests
/// readable while preserving the exact-match contract.
pub struct PlainScheme;

impl PasswordScheme for PlainScheme {
    fn hash(&self, password: &str) -> PortResult<String> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash == format!("plain:{password}")
    }
}

pub fn plain_scheme() -> Arc<PlainScheme> {
    Arc::new(PlainScheme)
}

pub trait NewAccountExt {
    fn sample(email: &str, name: &str, password: &str) -> NewAccount;
}

impl NewAccountExt for NewAccount {
    fn sample(email: &str, name: &str, password: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            name: name.to_string(),
            phone: "555-0100".to_string(),
            dob: NaiveDate::from_ymd_opt(2001, 7, 16).unwrap(),
            password: password.to_string(),
        }
    }
}
