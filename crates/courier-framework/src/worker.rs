//! # Worker Trait
//!
//! The `Worker` trait is the contract a long-running consumer implements to be
//! driven by a [`WorkerRunner`](crate::WorkerRunner). The runner owns the
//! loop, the stop signal and the logging; the worker only says where the next
//! item comes from and what to do with it.
//!
//! # Provided Methods (Hooks)
//! - [`Worker::on_stop`] runs once after the loop exits. The default does
//!   nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// A consumer that pulls items from a blocking source and handles them one
/// at a time.
///
/// # Cancel safety
/// [`Worker::next_item`] is raced against the stop signal and may be dropped
/// before it completes. Implementations must not consume an item unless they
/// return it; [`BlockingQueue::dequeue`](crate::BlockingQueue::dequeue)
/// satisfies this.
#[async_trait]
pub trait Worker: Send + 'static {
    /// The unit of work.
    type Item: Send + Debug;

    /// Error returned by [`Worker::handle`]. Use
    /// [`Infallible`](std::convert::Infallible) when handling cannot fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Waits for the next item.
    async fn next_item(&mut self) -> Self::Item;

    /// Processes one item. Once called, it always runs to completion; a stop
    /// request is only observed between items.
    async fn handle(&mut self, item: Self::Item) -> Result<(), Self::Error>;

    /// Called after the loop exits, before the runner reports `Stopped`.
    async fn on_stop(&mut self) {}
}
