//! # Stop Handle
//!
//! The control half of a worker. A [`StopHandle`] is handed out by
//! [`WorkerRunner::new`](crate::WorkerRunner::new) and can be cloned freely.

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Lifecycle of a worker loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Pulling and handling items.
    Running,
    /// A stop was requested; the loop exits before taking another item.
    Stopping,
    /// The loop has exited. Terminal.
    Stopped,
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerState::Running => write!(f, "running"),
            WorkerState::Stopping => write!(f, "stopping"),
            WorkerState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Requests and observes the shutdown of a running worker.
///
/// The state lives in a `watch` channel shared with the runner. Its current
/// value is the cooperative flag the loop checks before every item, and a
/// change to it wakes the loop out of a blocked `next_item`. Publishing the
/// new value and waking the loop are one operation, so a stop can never be
/// missed by a loop that is just about to park.
///
/// The handles are the only owners of the sender. Once every clone is
/// dropped the channel closes and the runner stops.
#[derive(Clone)]
pub struct StopHandle {
    state: Arc<watch::Sender<WorkerState>>,
}

impl StopHandle {
    pub(crate) fn new(state: Arc<watch::Sender<WorkerState>>) -> Self {
        Self { state }
    }

    /// Asks the worker to stop. Returns `false` if it was already stopping
    /// or stopped.
    pub fn stop(&self) -> bool {
        let requested = self.state.send_if_modified(|state| {
            if *state == WorkerState::Running {
                *state = WorkerState::Stopping;
                true
            } else {
                false
            }
        });
        debug!(requested, "Stop requested");
        requested
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WorkerState {
        *self.state.borrow()
    }
}
