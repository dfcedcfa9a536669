//! # Courier
//!
//! The single consumer of the order queue. The courier is a
//! [`Worker`](courier_framework::Worker): the framework's runner owns the
//! loop and the stop protocol, the courier only fetches and delivers.
//!
//! Lifecycle (`Running -> Stopping -> Stopped`) is observed through the
//! [`StopHandle`] returned by [`Courier::start`]. Once stopped, the courier
//! takes no further orders even if some are still queued; those are left for
//! the caller to collect with
//! [`OrderSystem::abandon_pending`](crate::order_system::OrderSystem::abandon_pending).

use crate::model::Order;
use crate::order_system::OrderSystem;
use async_trait::async_trait;
use courier_framework::{StopHandle, Worker, WorkerRunner};
use std::convert::Infallible;
use tokio::task::JoinHandle;
use tracing::info;

/// Delivers queued orders one at a time.
pub struct Courier {
    system: OrderSystem,
    delivered: Vec<Order>,
}

impl Courier {
    pub fn new(system: OrderSystem) -> Self {
        Self {
            system,
            delivered: Vec::new(),
        }
    }

    /// Spawns the courier loop. The task resolves to the courier once it has
    /// stopped.
    pub fn start(system: OrderSystem) -> (JoinHandle<Courier>, StopHandle) {
        let (runner, stop) = WorkerRunner::new(Self::new(system));
        (tokio::spawn(runner.run()), stop)
    }

    /// Orders delivered so far, in delivery order.
    pub fn delivered(&self) -> &[Order] {
        &self.delivered
    }

    pub fn into_delivered(self) -> Vec<Order> {
        self.delivered
    }
}

#[async_trait]
impl Worker for Courier {
    type Item = Order;
    type Error = Infallible;

    async fn next_item(&mut self) -> Order {
        self.system.take_next_order().await
    }

    async fn handle(&mut self, order: Order) -> Result<(), Infallible> {
        info!(
            order_id = %order.id,
            product = %order.product,
            "Courier delivered the order of {}",
            order.customer
        );
        self.delivered.push(order);
        Ok(())
    }

    async fn on_stop(&mut self) {
        info!(delivered = self.delivered.len(), "Courier off duty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use courier_framework::{join_task, WorkerState};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_stop_while_waiting_on_empty_queue() {
        let system = OrderSystem::new(Arc::new(Inventory::new()));
        let (task, stop) = Courier::start(system);

        tokio::time::sleep(Duration::from_millis(50)).await;
        stop.stop();

        let courier = tokio::time::timeout(Duration::from_secs(1), join_task(task))
            .await
            .expect("courier hung on an empty queue")
            .unwrap();
        assert!(courier.delivered().is_empty());
        assert_eq!(stop.state(), WorkerState::Stopped);
    }

    #[tokio::test]
    async fn test_courier_delivers_what_was_placed() {
        let system = OrderSystem::new(Arc::new(Inventory::with_stock([("Pizza", 3)])));
        let first = system.place_order("Alice", "Pizza").unwrap();
        let second = system.place_order("Bob", "Pizza").unwrap();

        let (task, stop) = Courier::start(system.clone());
        while !system.is_queue_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        stop.stop();

        let delivered = join_task(task).await.unwrap().into_delivered();
        assert_eq!(delivered, vec![first, second]);
    }
}
