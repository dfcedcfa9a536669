//! # System Lifecycle & Orchestration
//!
//! The individual pieces (inventory, order system, customers, courier) are
//! simple; this module is where they are wired together and sequenced.
//!
//! ## The Run Sequence
//!
//! [`Simulation::run`] follows a fixed order:
//!
//! 1. **Customers**: every customer is spawned on its own task and they all
//!    race for stock concurrently. The coordinator waits for each of them.
//! 2. **Courier**: started only once every customer is done, so it drains a
//!    queue that no longer grows.
//! 3. **Drain wait**: the coordinator polls
//!    [`OrderSystem::is_queue_empty`](crate::order_system::OrderSystem::is_queue_empty)
//!    with a fixed delay between checks. This is a polling heuristic; it
//!    reacts within one interval, not immediately.
//! 4. **Shutdown**: the courier is asked to stop (which also wakes it if it
//!    is parked on the empty queue) and joined. Anything still queued is
//!    reported as abandoned.
//!
//! ## Dependency Injection
//!
//! There is no global state. The [`Inventory`](crate::inventory::Inventory)
//! is built from [`SimulationConfig::seed_stock`] and handed to the
//! [`OrderSystem`](crate::order_system::OrderSystem), which is cloned into
//! every customer and into the courier.
//!
//! ## Failure Handling
//!
//! Running out of stock is a normal outcome and shows up in
//! [`SimulationReport::refused`]. A task that panics is logged; the
//! coordinator still finishes the shutdown sequence and prints its final
//! confirmation before returning.

pub mod config;
pub mod error;
pub mod simulation;

pub use config::*;
pub use error::*;
pub use simulation::*;
