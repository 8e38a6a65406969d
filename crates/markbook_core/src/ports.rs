//! crates/markbook_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to stay independent of the concrete storage backend (flat files, an
//! embedded KV store, a real database) and of the password hashing algorithm.

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external backends (e.g. the
/// filesystem). Storage failures are fatal and propagate; they are never
/// silently mapped to "empty".
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Storage failure: {0}")]
    Storage(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The storage contract the core depends on: plain get/put/delete over opaque
/// byte values. Each `put` replaces the full value for the key wholesale, so a
/// backend may implement it as a whole-file rewrite.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored bytes for `key`, or `None` if the key has never
    /// been written. Absence is not an error; I/O failures are.
    async fn get(&self, key: &str) -> PortResult<Option<Vec<u8>>>;

    /// Replaces the value for `key` with `value` atomically with respect to
    /// readers (a reader sees either the old or the new value, never a mix).
    async fn put(&self, key: &str, value: Vec<u8>) -> PortResult<()>;

    /// Removes `key`. Deleting an absent key is a no-op.
    async fn delete(&self, key: &str) -> PortResult<()>;
}

/// The password hashing contract at the credential boundary.
///
/// The core never sees the algorithm; `verify` must accept exactly the
/// passwords that `hash` was given (case-sensitive, no normalization).
pub trait PasswordScheme: Send + Sync {
    /// Hashes a plaintext password into an opaque, storable string.
    fn hash(&self, password: &str) -> PortResult<String>;

    /// Checks a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
