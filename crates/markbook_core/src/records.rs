//! crates/markbook_core/src/records.rs
//!
//! The record store: one current score snapshot per user. A submission fully
//! replaces whatever was stored before; there is no history and no merge.

use std::sync::Arc;

use tracing::info;

use crate::domain::ScoreSet;
use crate::error::CoreError;
use crate::ports::{KeyValueStore, PortError};

/// Persists per-user score sets over a `KeyValueStore`, one row per user.
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The storage key for one user's marks.
    ///
    /// Derived deterministically and exclusively from the email, so records
    /// for distinct users land under distinct keys and never collide.
    fn key_for(email: &str) -> String {
        format!("records/{email}/marks")
    }

    /// Stores `scores` as the user's current snapshot, replacing any
    /// previous one.
    pub async fn submit(&self, email: &str, scores: &ScoreSet) -> Result<(), CoreError> {
        let bytes =
            serde_json::to_vec(scores).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.store.put(&Self::key_for(email), bytes).await?;
        info!(%email, "stored marks snapshot");
        Ok(())
    }

    /// Returns the user's current score set.
    ///
    /// Fails with [`CoreError::NotFound`] if the user has never submitted;
    /// callers must treat that as "prompt for submission", never as zero
    /// scores.
    pub async fn fetch(&self, email: &str) -> Result<ScoreSet, CoreError> {
        let bytes = self
            .store
            .get(&Self::key_for(email))
            .await?
            .ok_or(CoreError::NotFound)?;
        let scores =
            serde_json::from_slice(&bytes).map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::Subject;
    use crate::testing::test_store;

    fn scores(values: [u8; 5]) -> ScoreSet {
        let map: BTreeMap<Subject, u8> =
            Subject::ALL.iter().copied().zip(values).collect();
        ScoreSet::new(map).unwrap()
    }

    #[tokio::test]
    async fn fetch_before_any_submission_is_not_found() {
        let records = RecordStore::new(test_store());
        let err = records.fetch("ada@example.com").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound));
    }

    #[tokio::test]
    async fn resubmission_fully_replaces_the_previous_snapshot() {
        let records = RecordStore::new(test_store());
        let first = scores([10, 20, 30, 40, 50]);
        let second = scores([90, 80, 70, 60, 50]);

        records.submit("ada@example.com", &first).await.unwrap();
        records.submit("ada@example.com", &second).await.unwrap();

        let fetched = records.fetch("ada@example.com").await.unwrap();
        assert_eq!(fetched, second);
    }

    #[tokio::test]
    async fn users_never_see_each_others_records() {
        let records = RecordStore::new(test_store());
        let ada = scores([100, 100, 100, 100, 100]);
        let bob = scores([0, 0, 0, 0, 0]);

        records.submit("ada@example.com", &ada).await.unwrap();
        records.submit("bob@example.com", &bob).await.unwrap();

        assert_eq!(records.fetch("ada@example.com").await.unwrap(), ada);
        assert_eq!(records.fetch("bob@example.com").await.unwrap(), bob);
    }
}
