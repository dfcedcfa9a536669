use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A product line and its remaining stock.
///
/// Products are identified by name. The [`Inventory`](crate::inventory::Inventory)
/// owns the live counts; a `Product` is a copy taken from it, e.g. by
/// [`Inventory::snapshot`](crate::inventory::Inventory::snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `stock` - Units on hand
    pub fn new(name: impl Into<String>, stock: u32) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.stock)
    }
}
