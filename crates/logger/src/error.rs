//! Error types for facade setup
//!
//! Emission itself has no failure mode: every item is stringified through
//! `Display`, which is total. Only installing global state can fail.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while wiring up the facade
#[derive(Debug, Error)]
pub enum Error {
    /// The process-wide facade was already installed
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// Failed to install the `log` crate bridge
    #[cfg(feature = "log-compat")]
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),

    /// Failed to install the tracing bridge
    #[cfg(feature = "tracing-compat")]
    #[error(transparent)]
    SetTracing(#[from] tracing::dispatcher::SetGlobalDefaultError),
}
