//! # Framework Errors
//!
//! Errors raised by the worker plumbing itself rather than by the work a
//! worker performs. Domain crates define their own error types and wrap this
//! one where a lifecycle operation can fail.

use tokio::task::JoinError;

/// Errors that can occur within the worker framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    /// The task panicked before it could hand its result back.
    #[error("Worker task failed: {0}")]
    WorkerFailed(String),
    /// The task was aborted while someone was waiting for it.
    #[error("Worker task was cancelled")]
    WorkerCancelled,
}

impl From<JoinError> for FrameworkError {
    fn from(e: JoinError) -> Self {
        if e.is_cancelled() {
            FrameworkError::WorkerCancelled
        } else {
            FrameworkError::WorkerFailed(e.to_string())
        }
    }
}
