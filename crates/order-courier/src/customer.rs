//! # Customer
//!
//! A customer is a one-shot task: it places a single order for itself and
//! ends. There is no retry; a customer who finds the product sold out just
//! goes home without an order.

use crate::lifecycle::CustomerSpec;
use crate::model::Order;
use crate::order_system::{OrderError, OrderSystem};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// A customer who wants one unit of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    product: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            product: product.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Places this customer's order exactly once and returns the outcome.
    #[instrument(skip_all, fields(customer = %self.name))]
    pub async fn run(self, system: OrderSystem) -> Result<Order, OrderError> {
        debug!(product = %self.product, "Customer arrived");
        system.place_order(&self.name, &self.product)
    }

    /// Runs the customer on its own task.
    pub fn spawn(self, system: OrderSystem) -> JoinHandle<Result<Order, OrderError>> {
        tokio::spawn(self.run(system))
    }
}

impl From<&CustomerSpec> for Customer {
    fn from(spec: &CustomerSpec) -> Self {
        Self::new(spec.name.clone(), spec.product.clone())
    }
}
