//! Error types for the order system.

use crate::inventory::InventoryError;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Not enough stock left; the order was not created.
    #[error(transparent)]
    InsufficientStock(#[from] InventoryError),
}
