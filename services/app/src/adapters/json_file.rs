//! services/app/src/adapters/json_file.rs
//!
//! The flat-file storage adapter: a concrete implementation of the
//! `KeyValueStore` port over one file per key. Each `put` writes the whole
//! value to a temporary file and renames it into place, so readers see either
//! the old content or the new content, never a torn write.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use markbook_core::ports::{KeyValueStore, PortError, PortResult};
use tracing::debug;

/// A file-per-key store rooted at a data directory.
///
/// Key segments (separated by `/`) become path components below the root.
/// Segment characters outside a conservative safe set are percent-encoded, so
/// arbitrary emails embedded in keys stay inside their own file and cannot
/// escape the data directory.
#[derive(Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in key.split('/').filter(|s| !s.is_empty()) {
            path.push(encode_segment(segment));
        }
        path
    }
}

/// Percent-encodes everything outside `[A-Za-z0-9_@+-]`.
///
/// Dots are encoded too, which rules out `.` and `..` path components.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'@' | b'+' | b'-' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn io_err(path: &Path, err: std::io::Error) -> PortError {
    PortError::Storage(format!("{}: {err}", path.display()))
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> PortResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_err(&path, err)),
        }
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> PortResult<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_err(parent, e))?;
        }

        // Whole-file replace: write beside the target, then rename over it.
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, &value)
            .await
            .map_err(|e| io_err(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_err(&path, e))?;
        debug!(key, bytes = value.len(), "replaced stored value");
        Ok(())
    }

    async fn delete(&self, key: &str) -> PortResult<()> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_err(&path, err)),
        }
    }
}
