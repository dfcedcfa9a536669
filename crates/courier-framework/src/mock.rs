//! # Mock Worker
//!
//! `MockWorker<T>` is a [`Worker`] that pulls from a shared
//! [`BlockingQueue`] and records everything it handles. Queue the items you
//! expect with [`MockWorker::expect`]; each handled item is checked against
//! the next expectation in order, and [`MockWorker::verify`] fails if any
//! expectation was never met.
//!
//! Use it to test producers (anything that feeds a queue) without writing a
//! bespoke consumer.
//!
//! ```rust
//! use courier_framework::mock::MockWorker;
//! use courier_framework::{join_task, BlockingQueue, WorkerRunner};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let queue = Arc::new(BlockingQueue::new());
//!     let mut mock = MockWorker::new(queue.clone());
//!     mock.expect("a").expect("b");
//!
//!     let (runner, stop) = WorkerRunner::new(mock);
//!     let task = tokio::spawn(runner.run());
//!
//!     queue.enqueue("a");
//!     queue.enqueue("b");
//!     while !queue.is_empty() {
//!         tokio::time::sleep(std::time::Duration::from_millis(5)).await;
//!     }
//!
//!     stop.stop();
//!     let mock = join_task(task).await.unwrap();
//!     mock.verify();
//! }
//! ```

use crate::queue::BlockingQueue;
use crate::worker::Worker;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt::Debug;
use std::sync::Arc;

/// A recording worker with ordered expectations.
pub struct MockWorker<T> {
    source: Arc<BlockingQueue<T>>,
    expectations: VecDeque<T>,
    handled: Vec<T>,
}

impl<T> MockWorker<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    /// Creates a mock with no expectations that consumes from `source`.
    pub fn new(source: Arc<BlockingQueue<T>>) -> Self {
        Self {
            source,
            expectations: VecDeque::new(),
            handled: Vec::new(),
        }
    }

    /// Expects `item` to be the next one handled after all earlier
    /// expectations.
    pub fn expect(&mut self, item: T) -> &mut Self {
        self.expectations.push_back(item);
        self
    }

    /// Everything handled so far, in handling order.
    pub fn handled(&self) -> &[T] {
        &self.handled
    }

    /// Panics if any expectation was never met.
    pub fn verify(&self) {
        assert!(
            self.expectations.is_empty(),
            "Unmet expectations: {:?} (handled: {:?})",
            self.expectations,
            self.handled
        );
    }
}

#[async_trait]
impl<T> Worker for MockWorker<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    type Item = T;
    type Error = Infallible;

    async fn next_item(&mut self) -> T {
        self.source.dequeue().await
    }

    async fn handle(&mut self, item: T) -> Result<(), Infallible> {
        if let Some(expected) = self.expectations.pop_front() {
            assert_eq!(expected, item, "Handled item does not match expectation");
        }
        self.handled.push(item);
        Ok(())
    }
}
