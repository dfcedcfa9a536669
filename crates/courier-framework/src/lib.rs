//! # Courier Framework
//!
//! Building blocks for in-process producer/consumer systems on Tokio: a
//! blocking FIFO that many tasks can feed, and a stoppable worker loop that
//! drains it.
//!
//! ## Why a framework crate?
//!
//! The interesting part of a producer/consumer system is not the business
//! rule a consumer applies to each item, it is the plumbing around it:
//!
//! - producers must never block each other or the consumer,
//! - the consumer must park (not spin) while there is nothing to do,
//! - and a stop request must reach the consumer even while it is parked.
//!
//! Writing that plumbing once and keeping domain code to a small trait
//! implementation keeps those guarantees in one place.
//!
//! ## Main Components
//!
//! - [`BlockingQueue`]: unbounded FIFO with a non-blocking `enqueue` and an
//!   async, cancel-safe `dequeue`.
//! - [`Worker`]: the trait a consumer implements (`next_item` + `handle`).
//! - [`WorkerRunner`]: the generic loop that drives a `Worker`.
//! - [`StopHandle`] / [`WorkerState`]: the control side of a running loop
//!   (`Running` -> `Stopping` -> `Stopped`).
//! - [`FrameworkError`]: failures of the plumbing itself (a worker task
//!   panicked or was aborted).
//!
//! ## Stop Protocol
//!
//! A stop is a single publication on a `tokio::sync::watch` channel. The
//! runner reads the published state before every item (the cooperative
//! flag) and races `next_item` against the channel's change notification
//! (the wake-up). Because the flag and the wake-up are the same channel,
//! there is no window in which a stop can be published but not observed.
//!
//! The [`StopHandle`] clones own the sending side. Dropping the last one
//! closes the channel, which the runner treats as a stop.
//!
//! ## Testing
//!
//! [`mock::MockWorker`] records what it handles and checks it against
//! ordered expectations, so producers can be tested against a real runner.

pub mod error;
pub mod handle;
pub mod mock;
pub mod queue;
pub mod runner;
pub mod tracing;
pub mod worker;

// Re-export core types for convenience
pub use error::FrameworkError;
pub use handle::{StopHandle, WorkerState};
pub use queue::BlockingQueue;
pub use runner::{join_task, WorkerRunner};
pub use worker::Worker;
