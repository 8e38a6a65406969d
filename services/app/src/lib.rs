pub mod adapters;
pub mod config;
pub mod error;
pub mod shell;
pub mod telemetry;

// Re-export the facade and its report type so a shell binary only needs
// `app_lib` and `markbook_core` in scope.
pub use error::AppError;
pub use shell::{Markbook, MarksReport};
pub use telemetry::init_tracing;
