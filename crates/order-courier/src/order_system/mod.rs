//! # Order System
//!
//! Ties the [`Inventory`] to the pending-order queue.
//!
//! - **Producers** (customers) call [`OrderSystem::place_order`]: one unit is
//!   reserved atomically and, only if that worked, an [`Order`] is queued.
//! - **The consumer** (courier) calls [`OrderSystem::take_next_order`], which
//!   parks until an order is available.
//!
//! Reservation and enqueue are two separate steps. Only the reservation has
//! to be atomic: nobody but the placing customer acts on the outcome, so
//! another task observing the stock drop before the order shows up in the
//! queue is harmless.
//!
//! `OrderSystem` is a cheap handle over shared state; clone it into every
//! task that needs it.

pub mod error;

pub use error::*;

use crate::inventory::Inventory;
use crate::model::{Order, OrderId};
use courier_framework::BlockingQueue;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Inventory + order queue, shared by customers and the courier.
#[derive(Clone)]
pub struct OrderSystem {
    inventory: Arc<Inventory>,
    queue: Arc<BlockingQueue<Order>>,
    next_order_id: Arc<AtomicU64>,
}

impl OrderSystem {
    /// Creates an order system over an existing inventory with an empty
    /// queue.
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self {
            inventory,
            queue: Arc::new(BlockingQueue::new()),
            next_order_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// The inventory this system reserves from.
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// Reserves one unit of `product` and queues an order for `customer`.
    ///
    /// # Errors
    /// [`OrderError::InsufficientStock`] if no unit is left. Nothing is
    /// queued in that case and the caller is not expected to retry.
    #[instrument(skip(self))]
    pub fn place_order(&self, customer: &str, product: &str) -> Result<Order, OrderError> {
        if let Err(e) = self.inventory.reserve(product, 1) {
            warn!(error = %e, "Insufficient stock for {}", product);
            return Err(e.into());
        }

        let id = OrderId(self.next_order_id.fetch_add(1, Ordering::SeqCst));
        let order = Order::new(id, customer, product);
        self.queue.enqueue(order.clone());
        info!(order_id = %id, "Order placed: {} ordered {}", customer, product);
        Ok(order)
    }

    /// Waits for the next queued order.
    ///
    /// Cancel-safe: dropping the future before it resolves leaves the queue
    /// untouched.
    pub async fn take_next_order(&self) -> Order {
        self.queue.dequeue().await
    }

    /// Whether the queue was empty at the time of the call. Only suitable
    /// for polling.
    pub fn is_queue_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of orders waiting for the courier.
    pub fn pending_orders(&self) -> usize {
        self.queue.len()
    }

    /// Removes and returns every order still queued. Used after the courier
    /// has stopped to account for orders it will never deliver.
    pub fn abandon_pending(&self) -> Vec<Order> {
        self.queue.drain()
    }
}
