//! services/app/src/shell.rs
//!
//! The facade the presentation shell talks to. These methods are the complete
//! surface the UI may call into the core: signup, login, logout, marks
//! submission, and report retrieval. The UI owns input collection, navigation
//! and chart rendering, and implements none of this logic itself.

use std::sync::Arc;

use markbook_core::{
    report, CoreError, CredentialStore, KeyValueStore, NewAccount, PasswordScheme, PieSlice,
    RecordStore, ReportSummary, ScoreSet, SessionContext,
};
use tracing::info;

use crate::adapters::{Argon2Scheme, JsonFileStore};
use crate::config::Config;
use crate::error::AppError;

/// Everything the shell needs to render one user's report page.
///
/// `pie` is `None` when every score is zero: the proportional view has no
/// denominator, and the shell should render a "no data" placeholder instead
/// of a chart.
#[derive(Debug, Clone)]
pub struct MarksReport {
    pub summary: ReportSummary,
    pub pie: Option<Vec<PieSlice>>,
}

/// Wires the core components to concrete adapters and exposes the
/// presentation boundary.
#[derive(Clone)]
pub struct Markbook {
    credentials: CredentialStore,
    records: RecordStore,
}

impl Markbook {
    /// Builds a markbook over any storage backend and password scheme.
    pub fn new(store: Arc<dyn KeyValueStore>, scheme: Arc<dyn PasswordScheme>) -> Self {
        Self {
            credentials: CredentialStore::new(store.clone(), scheme),
            records: RecordStore::new(store),
        }
    }

    /// Builds a markbook over the flat-file store described by `config`,
    /// with Argon2 password hashing.
    pub fn open(config: &Config) -> Self {
        info!(data_dir = %config.data_dir.display(), "opening markbook data directory");
        Self::new(
            Arc::new(JsonFileStore::new(config.data_dir.clone())),
            Arc::new(Argon2Scheme::new()),
        )
    }

    /// Creates a new account. The caller stays on the login page afterwards;
    /// signup does not authenticate.
    pub async fn sign_up(&self, account: NewAccount) -> Result<(), AppError> {
        self.credentials.register(account).await?;
        Ok(())
    }

    /// Attempts a login and returns the session the shell should continue
    /// with. On failure the existing session is untouched and the error is
    /// surfaced for a retry prompt.
    pub async fn login(
        &self,
        session: &SessionContext,
        email: &str,
        password: &str,
    ) -> Result<SessionContext, AppError> {
        let user = self.credentials.authenticate(email, password).await?;
        info!(%email, "login successful");
        Ok(session.clone().login(user))
    }

    /// Clears the session back to anonymous.
    #[must_use]
    pub fn logout(&self, session: &SessionContext) -> SessionContext {
        session.clone().logout()
    }

    /// Stores the authenticated user's marks, replacing any previous
    /// submission.
    pub async fn submit_marks(
        &self,
        session: &SessionContext,
        scores: &ScoreSet,
    ) -> Result<(), AppError> {
        let user = session.current_user()?;
        self.records.submit(&user.email, scores).await?;
        Ok(())
    }

    /// Fetches the authenticated user's marks and derives the report data.
    ///
    /// Fails with [`CoreError::NotFound`] if the user has never submitted,
    /// which the shell renders as "please submit your marks first".
    pub async fn report(&self, session: &SessionContext) -> Result<MarksReport, AppError> {
        let user = session.current_user()?;
        let scores = self.records.fetch(&user.email).await?;
        let summary = report::summarize(&scores)?;
        let pie = match report::proportions(&summary) {
            Ok(slices) => Some(slices),
            Err(CoreError::DegenerateReport) => None,
            Err(err) => return Err(err.into()),
        };
        Ok(MarksReport { summary, pie })
    }
}
