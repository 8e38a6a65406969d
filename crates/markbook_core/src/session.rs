//! crates/markbook_core/src/session.rs
//!
//! The session context: a small state machine tracking who, if anyone, is
//! authenticated for the current interaction. It is an explicit value passed
//! through each operation, never ambient global state, and it is not
//! persisted across restarts.

use crate::domain::AuthUser;
use crate::error::CoreError;

/// The authentication state of the current interaction.
///
/// Starts `Anonymous`; `login` moves to `Authenticated`; `logout` moves back.
/// There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionContext {
    #[default]
    Anonymous,
    Authenticated(AuthUser),
}

impl SessionContext {
    /// Transitions to `Authenticated` with the given identity.
    ///
    /// A login attempt on an already-authenticated session is a no-op: the
    /// existing identity is kept, since the login surface is unreachable once
    /// authenticated.
    #[must_use]
    pub fn login(self, user: AuthUser) -> Self {
        match self {
            SessionContext::Anonymous => SessionContext::Authenticated(user),
            authenticated @ SessionContext::Authenticated(_) => authenticated,
        }
    }

    /// Clears the session back to `Anonymous`. Idempotent.
    #[must_use]
    pub fn logout(self) -> Self {
        SessionContext::Anonymous
    }

    /// Returns the authenticated identity, or [`CoreError::Unauthenticated`].
    ///
    /// Record and report operations must only run against an authenticated
    /// session; hitting this error means the shell called the core out of
    /// order.
    pub fn current_user(&self) -> Result<&AuthUser, CoreError> {
        match self {
            SessionContext::Authenticated(user) => Ok(user),
            SessionContext::Anonymous => Err(CoreError::Unauthenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionContext::Authenticated(_))
    }
}
