//! crates/markbook_core/src/credentials.rs
//!
//! The credential store: persists user accounts and validates logins.
//! Accounts live in a single mapping keyed by email, rewritten wholesale on
//! every registration (write-then-replace, not incremental).

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{AuthUser, NewAccount, UserAccount};
use crate::error::CoreError;
use crate::ports::{KeyValueStore, PasswordScheme, PortResult};

/// Storage key for the full email-to-account mapping.
const ACCOUNTS_KEY: &str = "users";

/// Persists and validates user identity records over a `KeyValueStore`.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
    scheme: Arc<dyn PasswordScheme>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>, scheme: Arc<dyn PasswordScheme>) -> Self {
        Self { store, scheme }
    }

    /// Registers a new account.
    ///
    /// Fails with [`CoreError::AlreadyExists`] if the email is already a key
    /// in the account mapping. On success the whole mapping is persisted in
    /// one `put`.
    pub async fn register(&self, account: NewAccount) -> Result<(), CoreError> {
        let mut accounts = self.load().await?;
        if accounts.contains_key(&account.email) {
            return Err(CoreError::AlreadyExists);
        }

        let password_hash = self.scheme.hash(&account.password)?;
        accounts.insert(
            account.email.clone(),
            UserAccount {
                name: account.name,
                phone: account.phone,
                dob: account.dob,
                password_hash,
            },
        );
        self.save(&accounts).await?;
        info!(email = %account.email, "registered new account");
        Ok(())
    }

    /// Validates a login attempt.
    ///
    /// An unknown email and a wrong password both yield
    /// [`CoreError::InvalidCredentials`]; the caller cannot tell which.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthUser, CoreError> {
        let accounts = self.load().await?;
        let account = accounts.get(email).ok_or(CoreError::InvalidCredentials)?;
        if !self.scheme.verify(password, &account.password_hash) {
            return Err(CoreError::InvalidCredentials);
        }
        Ok(AuthUser {
            email: email.to_string(),
            name: account.name.clone(),
        })
    }

    /// Loads the full account mapping, bootstrapping an empty one on first use.
    ///
    /// Malformed or non-mapping stored content is treated as empty (defensive
    /// read) rather than raised; genuine I/O failures still propagate.
    async fn load(&self) -> PortResult<BTreeMap<String, UserAccount>> {
        match self.store.get(ACCOUNTS_KEY).await? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(accounts) => Ok(accounts),
                Err(err) => {
                    warn!(%err, "credential store content is malformed, treating as empty");
                    Ok(BTreeMap::new())
                }
            },
            None => {
                // First-ever use: initialize the backing store to an empty
                // mapping. Idempotent, and only taken when nothing is stored,
                // so an existing non-empty store is never overwritten.
                let empty = BTreeMap::new();
                self.save(&empty).await?;
                Ok(empty)
            }
        }
    }

    async fn save(&self, accounts: &BTreeMap<String, UserAccount>) -> PortResult<()> {
        let bytes = serde_json::to_vec(accounts)
            .map_err(|e| crate::ports::PortError::Unexpected(e.to_string()))?;
        self.store.put(ACCOUNTS_KEY, bytes).await
    }
}
