//! crates/markbook_core/src/error.rs
//!
//! Defines the primary error type for the core crate. Every fallible core
//! operation returns one of these, so the presentation shell can match on a
//! single taxonomy to decide what to render.

use crate::domain::Subject;
use crate::ports::PortError;

/// The primary error type for the core crate.
///
/// `AlreadyExists`, `InvalidCredentials` and `NotFound` are recoverable
/// user-facing conditions: the shell surfaces a message and lets the user
/// retry. `Unauthenticated` is a programming error under correct shell usage
/// and should fail loudly in development.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Signup attempted with an email that already has an account.
    #[error("An account already exists for this email")]
    AlreadyExists,

    /// Login attempted with an unknown email or a wrong password. The two
    /// cases are deliberately indistinguishable to the caller.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user has never submitted marks; the shell should prompt for a
    /// submission, never display zero scores.
    #[error("No marks found for this user")]
    NotFound,

    /// A submission or stored score set is missing a subject.
    #[error("Score set is missing a mark for {0}")]
    IncompleteScoreSet(Subject),

    /// A submitted score falls outside 0..=100.
    #[error("Score {score} for {subject} is out of range (0-100)")]
    ScoreOutOfRange { subject: Subject, score: u8 },

    /// A core operation that needs an identity was invoked on an anonymous
    /// session.
    #[error("Operation requires an authenticated session")]
    Unauthenticated,

    /// All scores are zero, so a proportional view has no denominator.
    #[error("All scores are zero; proportional report has no data")]
    DegenerateReport,

    /// Represents an error that propagated up from one of the storage ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),
}
