use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Represents a customer order waiting for, or handed to, the courier.
///
/// Orders only come into existence after the inventory has released one unit
/// of the product, and they are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub product: String,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the order system)
    /// * `customer` - Name of the customer who placed it
    /// * `product` - Name of the product ordered
    pub fn new(id: OrderId, customer: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            id,
            customer: customer.into(),
            product: product.into(),
        }
    }
}
