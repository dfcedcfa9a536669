//! # Simulation Configuration
//!
//! Everything a run needs is fixed up front in a [`SimulationConfig`]. The
//! default reproduces the demo: two products, two customers, and a 100 ms
//! drain poll. Tests build their own with the `with_*` helpers.
//!
//! ```rust
//! use order_courier::lifecycle::SimulationConfig;
//! use std::time::Duration;
//!
//! let config = SimulationConfig::empty()
//!     .with_stock("Pizza", 0)
//!     .with_customer("Alice", "Pizza")
//!     .with_drain_poll_interval(Duration::from_millis(10));
//! assert!(config.validate().is_ok());
//! ```

use super::LifecycleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Default delay between two "is the queue empty yet?" checks.
pub const DEFAULT_DRAIN_POLL_INTERVAL_MS: u64 = 100;

/// One customer and the product they want.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSpec {
    pub name: String,
    pub product: String,
}

impl CustomerSpec {
    pub fn new(name: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            product: product.into(),
        }
    }
}

/// Seed data and timing for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Initial stock per product name.
    pub seed_stock: BTreeMap<String, u32>,
    /// Customers, spawned in this order.
    pub customers: Vec<CustomerSpec>,
    /// Delay between drain checks, in milliseconds.
    pub drain_poll_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::empty()
            .with_stock("Pizza", 10)
            .with_stock("Burger", 15)
            .with_customer("Alice", "Pizza")
            .with_customer("Bob", "Burger")
    }
}

impl SimulationConfig {
    /// No products, no customers, default timing.
    pub fn empty() -> Self {
        Self {
            seed_stock: BTreeMap::new(),
            customers: Vec::new(),
            drain_poll_interval_ms: DEFAULT_DRAIN_POLL_INTERVAL_MS,
        }
    }

    /// Sets the initial stock of `product`, replacing any earlier value.
    pub fn with_stock(mut self, product: impl Into<String>, count: u32) -> Self {
        self.seed_stock.insert(product.into(), count);
        self
    }

    pub fn with_customer(mut self, name: impl Into<String>, product: impl Into<String>) -> Self {
        self.customers.push(CustomerSpec::new(name, product));
        self
    }

    pub fn with_drain_poll_interval(mut self, interval: Duration) -> Self {
        self.drain_poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn drain_poll_interval(&self) -> Duration {
        Duration::from_millis(self.drain_poll_interval_ms)
    }

    /// Rejects configurations the coordinator cannot run sensibly.
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.drain_poll_interval_ms == 0 {
            return Err(LifecycleError::InvalidConfig(
                "drain_poll_interval_ms must be greater than zero".into(),
            ));
        }
        if let Some(spec) = self
            .customers
            .iter()
            .find(|c| c.name.trim().is_empty() || c.product.trim().is_empty())
        {
            return Err(LifecycleError::InvalidConfig(format!(
                "customer entries need a name and a product, got {:?}",
                spec
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_demo_seed() {
        let config = SimulationConfig::default();

        assert_eq!(config.seed_stock.get("Pizza"), Some(&10));
        assert_eq!(config.seed_stock.get("Burger"), Some(&15));
        assert_eq!(
            config.customers,
            vec![CustomerSpec::new("Alice", "Pizza"), CustomerSpec::new("Bob", "Burger")]
        );
        assert_eq!(config.drain_poll_interval(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_poll_interval_is_rejected() {
        let config = SimulationConfig::default().with_drain_poll_interval(Duration::ZERO);
        assert!(matches!(config.validate(), Err(LifecycleError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{ "customers": [{ "name": "Carol", "product": "Burger" }] }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.customers, vec![CustomerSpec::new("Carol", "Burger")]);
        assert_eq!(config.seed_stock, SimulationConfig::default().seed_stock);
        assert_eq!(config.drain_poll_interval_ms, DEFAULT_DRAIN_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig::empty()
            .with_stock("Pizza", 0)
            .with_customer("Alice", "Pizza")
            .with_drain_poll_interval(Duration::from_millis(5));

        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
    }

    #[test]
    fn test_blank_customer_is_rejected() {
        let config = SimulationConfig::empty().with_customer(" ", "Pizza");
        assert!(matches!(config.validate(), Err(LifecycleError::InvalidConfig(_))));
    }
}
