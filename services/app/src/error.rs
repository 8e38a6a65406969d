//! services/app/src/error.rs
//!
//! Defines the primary error type for the `app` crate.

use markbook_core::error::CoreError;
use markbook_core::ports::PortError;

use crate::config::ConfigError;

/// The primary error type for the `app` crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the core components.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Represents an error that propagated up from one of the storage ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a standard Input/Output error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
