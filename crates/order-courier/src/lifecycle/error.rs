//! Error types for the simulation lifecycle.

use courier_framework::FrameworkError;
use thiserror::Error;

/// Errors that end a simulation run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifecycleError {
    /// The configuration cannot produce a meaningful run.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The courier task panicked or was aborted. The shutdown sequence still
    /// ran to completion before this was returned.
    #[error("Courier failed: {0}")]
    Courier(#[from] FrameworkError),
}
