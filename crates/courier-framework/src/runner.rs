//! # Worker Runner
//!
//! `WorkerRunner` is the loop half of a worker: it owns the [`Worker`] and
//! the receiving side of the stop signal, and it runs until asked to stop.
//!
//! # Usage Pattern
//!
//! 1. **Create**: `WorkerRunner::new(worker)` returns the runner and its
//!    [`StopHandle`].
//! 2. **Run**: spawn `runner.run()` on the runtime. The task resolves to the
//!    worker itself, so whatever it accumulated can be inspected afterwards.
//! 3. **Stop**: call [`StopHandle::stop`], then await the task (see
//!    [`join_task`]). Dropping every clone of the handle stops the loop
//!    too.
//!
//! ```rust
//! use async_trait::async_trait;
//! use courier_framework::{join_task, BlockingQueue, Worker, WorkerRunner};
//! use std::convert::Infallible;
//! use std::sync::{Arc, Weak};
//!
//! struct Printer {
//!     source: Arc<BlockingQueue<String>>,
//!     printed: usize,
//! }
//!
//! #[async_trait]
//! impl Worker for Printer {
//!     type Item = String;
//!     type Error = Infallible;
//!
//!     async fn next_item(&mut self) -> String {
//!         self.source.dequeue().await
//!     }
//!
//!     async fn handle(&mut self, line: String) -> Result<(), Infallible> {
//!         println!("{line}");
//!         self.printed += 1;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = Arc::new(BlockingQueue::new());
//!     source.enqueue("hello".to_string());
//!
//!     let (runner, stop) = WorkerRunner::new(Printer { source: source.clone(), printed: 0 });
//!     let task = tokio::spawn(runner.run());
//!
//!     while !source.is_empty() {
//!         tokio::time::sleep(std::time::Duration::from_millis(10)).await;
//!     }
//!     stop.stop();
//!     let printer = join_task(task).await.unwrap();
//!     assert_eq!(printer.printed, 1);
//! }
//! ```

use crate::error::FrameworkError;
use crate::handle::{StopHandle, WorkerState};
use crate::worker::Worker;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Drives a [`Worker`] until a stop is requested.
///
/// The runner only holds a weak reference to the state sender; the
/// [`StopHandle`] clones own it. When the last handle is dropped the channel
/// closes and the loop exits as if stopped.
pub struct WorkerRunner<W: Worker> {
    worker: W,
    state: Weak<watch::Sender<WorkerState>>,
    stop: watch::Receiver<WorkerState>,
}

impl<W: Worker> WorkerRunner<W> {
    /// Creates a runner in the `Running` state and the handle that stops it.
    pub fn new(worker: W) -> (Self, StopHandle) {
        let (sender, stop) = watch::channel(WorkerState::Running);
        let state = Arc::new(sender);
        let runner = Self {
            worker,
            state: Arc::downgrade(&state),
            stop,
        };
        let handle = StopHandle::new(state);
        (runner, handle)
    }

    /// Runs the loop and returns the worker once it has stopped.
    ///
    /// Before each item the loop checks the stop flag; while waiting for an
    /// item it also listens for a state change, so a stop wakes it even when
    /// the source stays empty. Items still pending in the source at that
    /// point are left there.
    pub async fn run(mut self) -> W {
        let worker_type = short_type_name::<W>();
        info!(worker_type, "Worker started");

        let mut handled = 0usize;
        loop {
            let state = *self.stop.borrow_and_update();
            if state != WorkerState::Running {
                debug!(worker_type, %state, "Stop flag observed");
                break;
            }

            tokio::select! {
                // Prefer the stop signal when both are ready so no item is
                // taken after a stop was published.
                biased;
                changed = self.stop.changed() => {
                    if changed.is_err() {
                        debug!(worker_type, "All stop handles dropped");
                        break;
                    }
                }
                item = self.worker.next_item() => {
                    debug!(worker_type, ?item, "Handling item");
                    match self.worker.handle(item).await {
                        Ok(()) => handled += 1,
                        Err(e) => warn!(worker_type, error = %e, "Handle failed"),
                    }
                }
            }
        }

        self.worker.on_stop().await;
        if let Some(state) = self.state.upgrade() {
            state.send_replace(WorkerState::Stopped);
        }
        info!(worker_type, handled, "Worker stopped");
        self.worker
    }
}

/// The bare type name of `T`: `"MockWorker"` rather than
/// `"courier_framework::mock::MockWorker<alloc::string::String>"`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

/// Awaits a spawned task, turning a panic or abort into a [`FrameworkError`].
pub async fn join_task<T>(handle: JoinHandle<T>) -> Result<T, FrameworkError> {
    handle.await.map_err(FrameworkError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::BlockingQueue;
    use async_trait::async_trait;
    use std::time::Duration;

    #[derive(Debug, thiserror::Error)]
    #[error("odd item {0}")]
    struct OddItem(u32);

    struct EvenCollector {
        source: Arc<BlockingQueue<u32>>,
        kept: Vec<u32>,
        stopped: bool,
    }

    impl EvenCollector {
        fn new(source: Arc<BlockingQueue<u32>>) -> Self {
            Self {
                source,
                kept: Vec::new(),
                stopped: false,
            }
        }
    }

    #[async_trait]
    impl Worker for EvenCollector {
        type Item = u32;
        type Error = OddItem;

        async fn next_item(&mut self) -> u32 {
            self.source.dequeue().await
        }

        async fn handle(&mut self, item: u32) -> Result<(), OddItem> {
            if item % 2 == 1 {
                return Err(OddItem(item));
            }
            self.kept.push(item);
            Ok(())
        }

        async fn on_stop(&mut self) {
            self.stopped = true;
        }
    }

    async fn wait_until_empty(queue: &BlockingQueue<u32>) {
        while !queue.is_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_stop_wakes_worker_blocked_on_empty_source() {
        let source = Arc::new(BlockingQueue::new());
        let (runner, stop) = WorkerRunner::new(EvenCollector::new(source));
        let task = tokio::spawn(runner.run());

        // Let the worker park.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(stop.state(), WorkerState::Running);

        assert!(stop.stop());
        let worker = tokio::time::timeout(Duration::from_secs(1), join_task(task))
            .await
            .expect("worker did not stop in time")
            .unwrap();

        assert!(worker.stopped);
        assert!(worker.kept.is_empty());
        assert_eq!(stop.state(), WorkerState::Stopped);
        assert!(!stop.stop(), "second stop is a no-op");
    }

    #[tokio::test]
    async fn test_handle_errors_do_not_end_the_loop() {
        let source = Arc::new(BlockingQueue::new());
        for i in [2, 3, 4] {
            source.enqueue(i);
        }

        let (runner, stop) = WorkerRunner::new(EvenCollector::new(source.clone()));
        let task = tokio::spawn(runner.run());

        wait_until_empty(&source).await;
        stop.stop();
        let worker = join_task(task).await.unwrap();

        assert_eq!(worker.kept, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_stop_before_run_leaves_items_pending() {
        let source = Arc::new(BlockingQueue::new());
        source.enqueue(10);

        let (runner, stop) = WorkerRunner::new(EvenCollector::new(source.clone()));
        stop.stop();
        assert_eq!(stop.state(), WorkerState::Stopping);

        let worker = runner.run().await;

        assert!(worker.kept.is_empty());
        assert_eq!(source.drain(), vec![10]);
        assert_eq!(stop.state(), WorkerState::Stopped);
    }

    #[tokio::test]
    async fn test_dropping_every_handle_stops_the_worker() {
        let source = Arc::new(BlockingQueue::new());
        let (runner, stop) = WorkerRunner::new(EvenCollector::new(source.clone()));
        let second = stop.clone();
        let task = tokio::spawn(runner.run());

        source.enqueue(2);
        wait_until_empty(&source).await;
        drop(stop);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!task.is_finished(), "one handle is still alive");

        drop(second);
        let worker = tokio::time::timeout(Duration::from_secs(1), join_task(task))
            .await
            .expect("worker kept running without a handle")
            .unwrap();

        assert!(worker.stopped);
        assert_eq!(worker.kept, vec![2]);

        // Nothing consumes the source any more.
        source.enqueue(4);
        assert_eq!(source.drain(), vec![4]);
    }

    #[test]
    fn test_short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name::<EvenCollector>(), "EvenCollector");
        assert_eq!(
            short_type_name::<crate::mock::MockWorker<String>>(),
            "MockWorker"
        );
    }

    #[tokio::test]
    async fn test_join_task_reports_panics() {
        let task = tokio::spawn(async {
            panic!("boom");
        });
        let result = join_task(task).await;
        assert!(matches!(result, Err(FrameworkError::WorkerFailed(_))));
    }

    #[tokio::test]
    async fn test_join_task_reports_cancellation() {
        let task = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        task.abort();
        assert_eq!(join_task(task).await, Err(FrameworkError::WorkerCancelled));
    }
}
