//! # Blocking Queue
//!
//! An unbounded FIFO shared between any number of producers and a consumer
//! that parks while the queue is empty.
//!
//! Producers never wait: [`BlockingQueue::enqueue`] appends under a short
//! mutex and wakes a parked consumer. The consumer calls
//! [`BlockingQueue::dequeue`], which suspends the calling task (not the
//! thread) until an item shows up.
//!
//! ## Cancellation
//!
//! `dequeue` only removes an item at the moment it returns it, so dropping
//! the future (for example when it loses a `tokio::select!` race against a
//! stop signal) never loses an item. This is what lets a worker be woken out
//! of a blocked dequeue without any error path.
//!
//! ```rust
//! use courier_framework::BlockingQueue;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let queue = Arc::new(BlockingQueue::new());
//!
//!     let consumer = {
//!         let queue = queue.clone();
//!         tokio::spawn(async move { queue.dequeue().await })
//!     };
//!
//!     queue.enqueue("first");
//!     assert_eq!(consumer.await.unwrap(), "first");
//!     assert!(queue.is_empty());
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

/// Unbounded multi-producer FIFO with an async blocking dequeue.
#[derive(Debug)]
pub struct BlockingQueue<T> {
    items: Mutex<VecDeque<T>>,
    available: Notify,
}

impl<T> BlockingQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            available: Notify::new(),
        }
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an item to the tail. Never blocks, never fails.
    pub fn enqueue(&self, item: T) {
        self.lock().push_back(item);
        // Stores a permit when nobody is parked yet, so a consumer that is
        // about to park still sees this item.
        self.available.notify_one();
    }

    /// Removes and returns the head, suspending until one is available.
    pub async fn dequeue(&self) -> T {
        loop {
            if let Some(item) = self.try_dequeue() {
                return item;
            }
            self.available.notified().await;
        }
    }

    /// Removes the head if there is one.
    pub fn try_dequeue(&self) -> Option<T> {
        self.lock().pop_front()
    }

    /// Takes every pending item, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.lock().drain(..).collect()
    }

    /// Number of pending items at the time of the call.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Snapshot emptiness check. Racy by nature: use it for polling, not as
    /// a synchronization point.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
