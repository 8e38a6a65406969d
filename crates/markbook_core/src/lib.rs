pub mod credentials;
pub mod domain;
pub mod error;
pub mod ports;
pub mod records;
pub mod report;
pub mod session;

#[cfg(test)]
mod testing;

pub use credentials::CredentialStore;
pub use domain::{
    AuthUser, NewAccount, PieSlice, ReportSummary, ScoreSet, Subject, UserAccount,
};
pub use error::CoreError;
pub use ports::{KeyValueStore, PasswordScheme, PortError, PortResult};
pub use records::RecordStore;
pub use session::SessionContext;
