//! # Simulation
//!
//! One full run of the order courier: customers, then the courier until the
//! queue drains, then shutdown. [`Simulation::run`] owns every task it
//! spawns; dropping its future stops the courier as well.

use super::{LifecycleError, SimulationConfig};
use crate::courier::Courier;
use crate::customer::Customer;
use crate::inventory::Inventory;
use crate::model::{Order, Product};
use crate::order_system::{OrderError, OrderSystem};
use courier_framework::join_task;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The coordinator of one producer/consumer run.
///
/// `Simulation` is responsible for:
/// - **Wiring**: building the [`Inventory`] from the seed stock and injecting
///   it into the [`OrderSystem`]
/// - **Sequencing**: customers first, then the courier, then shutdown
/// - **Accounting**: collecting what was placed, refused, delivered and
///   abandoned into a [`SimulationReport`]
///
/// # Example
///
/// ```rust
/// use order_courier::lifecycle::{Simulation, SimulationConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let report = Simulation::new(SimulationConfig::default())
///         .unwrap()
///         .run()
///         .await
///         .unwrap();
///     assert_eq!(report.delivered.len(), 2);
/// }
/// ```
pub struct Simulation {
    config: SimulationConfig,
    system: OrderSystem,
}

/// What happened during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    /// Orders successfully placed, in the order the customer tasks were joined.
    pub placed: Vec<Order>,
    /// Placement attempts refused for lack of stock.
    pub refused: Vec<OrderError>,
    /// Customer tasks that panicked or were aborted before reporting.
    pub failed_customers: usize,
    /// Orders the courier delivered, in delivery order.
    pub delivered: Vec<Order>,
    /// Orders still queued after the courier stopped.
    pub abandoned: Vec<Order>,
    /// Stock left at the end, sorted by product name.
    pub final_stock: Vec<Product>,
}

impl Simulation {
    /// Validates `config` and builds the inventory and order system for it.
    pub fn new(config: SimulationConfig) -> Result<Self, LifecycleError> {
        config.validate()?;
        let inventory = Inventory::with_stock(
            config
                .seed_stock
                .iter()
                .map(|(name, count)| (name.clone(), *count)),
        );
        let system = OrderSystem::new(Arc::new(inventory));
        Ok(Self { config, system })
    }

    /// The order system the run operates on.
    pub fn system(&self) -> &OrderSystem {
        &self.system
    }

    /// Runs the whole sequence and reports on it.
    ///
    /// 1. Spawns every customer and waits for all of them.
    /// 2. Starts the courier.
    /// 3. Polls until the queue is empty or the courier has ended.
    /// 4. Stops the courier and waits for it.
    ///
    /// A customer task that fails is logged and counted; the run goes on.
    /// A courier task that fails is logged, the remaining shutdown steps
    /// still run, and the failure is returned at the end.
    ///
    /// Dropping the returned future (a timeout, an aborted parent task) drops
    /// the courier's only [`StopHandle`](courier_framework::StopHandle), which
    /// stops the courier; orders still queued stay in the [`OrderSystem`].
    pub async fn run(self) -> Result<SimulationReport, LifecycleError> {
        let Self { config, system } = self;

        // =====================================================================
        // Step 1: Customers
        // =====================================================================

        let customers: Vec<_> = config
            .customers
            .iter()
            .map(|spec| {
                let customer = Customer::from(spec);
                let name = customer.name().to_string();
                (name, customer.spawn(system.clone()))
            })
            .collect();

        let mut placed = Vec::new();
        let mut refused = Vec::new();
        let mut failed_customers = 0;
        for (name, handle) in customers {
            match join_task(handle).await {
                Ok(Ok(order)) => placed.push(order),
                Ok(Err(e)) => refused.push(e),
                Err(e) => {
                    // Stop waiting on this one and keep shutting down.
                    error!(customer = %name, error = %e, "Customer task failed");
                    failed_customers += 1;
                }
            }
        }
        info!(
            placed = placed.len(),
            refused = refused.len(),
            "All customers finished"
        );

        // =====================================================================
        // Step 2: Courier, until the queue drains
        // =====================================================================

        let (courier_task, courier) = Courier::start(system.clone());

        let interval = config.drain_poll_interval();
        // A dead courier never drains the queue.
        while !system.is_queue_empty() && !courier_task.is_finished() {
            tokio::time::sleep(interval).await;
        }

        // =====================================================================
        // Step 3: Shutdown
        // =====================================================================

        info!("Stopping courier...");
        courier.stop();

        let (delivered, courier_error) = match join_task(courier_task).await {
            Ok(courier) => (courier.into_delivered(), None),
            Err(e) => {
                error!(error = %e, "Courier task failed");
                (Vec::new(), Some(e))
            }
        };

        let abandoned = system.abandon_pending();
        if !abandoned.is_empty() {
            warn!(count = abandoned.len(), "Orders left undelivered");
        }

        let final_stock = system.inventory().snapshot();
        for product in &final_stock {
            info!(product = %product.name, stock = product.stock, "Final stock");
        }
        info!("System terminated.");

        if let Some(e) = courier_error {
            return Err(e.into());
        }
        Ok(SimulationReport {
            placed,
            refused,
            failed_customers,
            delivered,
            abandoned,
            final_stock,
        })
    }
}
