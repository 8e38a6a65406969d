//! crates/markbook_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage backend; the serde derives
//! exist only so adapters can persist them as plain JSON.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The fixed set of subjects a user submits marks for.
///
/// The variant order is the canonical display order: every report series is
/// emitted in `Subject::ALL` order so charts render reproducibly regardless
/// of how the underlying mapping is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    Maths,
    Physics,
    Chemistry,
    English,
    Hindi,
}

impl Subject {
    /// All subjects in canonical order.
    pub const ALL: [Subject; 5] = [
        Subject::Maths,
        Subject::Physics,
        Subject::Chemistry,
        Subject::English,
        Subject::Hindi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::Maths => "Maths",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::English => "English",
            Subject::Hindi => "Hindi",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The details a user supplies at signup, before any hashing has happened.
///
/// Only used on the way into `CredentialStore::register` - contains the
/// plaintext password and must never be persisted as-is.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub password: String,
}

/// A stored user account, keyed by email in the credential mapping.
///
/// `password_hash` is an opaque string produced by the `PasswordScheme` port;
/// the core never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub password_hash: String,
}

/// The identity handed back by a successful `authenticate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
}

/// One user's current marks, one entry per subject.
///
/// A `ScoreSet` built through [`ScoreSet::new`] is guaranteed complete and in
/// range. Sets deserialized from storage are re-checked by the report engine
/// before any statistics are computed, so a hand-edited data file cannot
/// produce a silent partial average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSet {
    scores: BTreeMap<Subject, u8>,
}

impl ScoreSet {
    /// Builds a score set from a raw subject mapping, validating that every
    /// subject is present and every score is within 0..=100.
    pub fn new(scores: BTreeMap<Subject, u8>) -> Result<Self, CoreError> {
        for subject in Subject::ALL {
            match scores.get(&subject) {
                None => return Err(CoreError::IncompleteScoreSet(subject)),
                Some(&score) if score > 100 => {
                    return Err(CoreError::ScoreOutOfRange { subject, score })
                }
                Some(_) => {}
            }
        }
        Ok(Self { scores })
    }

    pub fn get(&self, subject: Subject) -> Option<u8> {
        self.scores.get(&subject).copied()
    }

    /// True when every subject in `Subject::ALL` has an entry.
    pub fn is_complete(&self) -> bool {
        Subject::ALL.iter().all(|s| self.scores.contains_key(s))
    }
}

/// Derived report statistics for one `ScoreSet`. Computed fresh on every
/// request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    /// Arithmetic mean of the five subject scores.
    pub average: f64,
    /// Per-subject scores in `Subject::ALL` order, for line/bar rendering.
    pub series: Vec<(Subject, u8)>,
    /// Sum of all scores, the denominator for proportional views.
    pub total: u32,
}

/// One slice of the proportional (pie) view.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub subject: Subject,
    pub score: u8,
    /// This subject's share of the total, in (0.0, 1.0].
    pub fraction: f64,
}
