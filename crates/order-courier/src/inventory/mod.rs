//! # Inventory
//!
//! Shared stock counts, keyed by product name.
//!
//! ## Atomicity
//!
//! Every operation takes the same mutex for its whole duration, so
//! "check that enough stock is left, then subtract" is a single step. Two
//! customers racing for the last unit can never both get it, and a reader
//! never sees a decrement half-applied.
//!
//! ## Unknown products
//!
//! A product the inventory has never heard of simply has zero stock. It is
//! not an error to ask about it, and reserving it fails with
//! [`InventoryError::InsufficientStock`] like any other sold-out product.
//!
//! ## Usage
//!
//! ```rust
//! use order_courier::inventory::Inventory;
//!
//! let inventory = Inventory::with_stock([("Pizza", 1)]);
//! assert!(inventory.decrement_if_available("Pizza", 1));
//! assert!(!inventory.decrement_if_available("Pizza", 1));
//! assert_eq!(inventory.current_stock("Pizza"), 0);
//! assert_eq!(inventory.current_stock("Sushi"), 0);
//! ```

pub mod error;

pub use error::*;

use crate::model::Product;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Thread-safe product name -> remaining count map.
#[derive(Debug, Default)]
pub struct Inventory {
    stock: Mutex<HashMap<String, u32>>,
}

impl Inventory {
    /// Creates an inventory with no products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory seeded with the given counts. Repeated names are
    /// added together.
    pub fn with_stock<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let inventory = Self::new();
        for (name, count) in seed {
            inventory.restock(name, count);
        }
        inventory
    }

    // Every critical section below leaves the map consistent before any
    // point that could panic, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, u32>> {
        self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `amount` units (saturating) and returns the new level.
    pub fn restock(&self, product: impl Into<String>, amount: u32) -> u32 {
        let mut stock = self.lock();
        let count = stock.entry(product.into()).or_insert(0);
        *count = count.saturating_add(amount);
        *count
    }

    /// Atomically takes `amount` units of `product` if that many are left.
    ///
    /// On failure nothing changes. Reserving zero units always succeeds.
    pub fn reserve(&self, product: &str, amount: u32) -> Result<(), InventoryError> {
        let mut stock = self.lock();
        let available = stock.get(product).copied().unwrap_or(0);
        if available < amount {
            debug!(product, requested = amount, available, "Reservation refused");
            return Err(InventoryError::InsufficientStock {
                product: product.to_string(),
                requested: amount,
                available,
            });
        }
        // Unknown products only get here with amount == 0; nothing to record.
        if let Some(count) = stock.get_mut(product) {
            *count -= amount;
            debug!(product, reserved = amount, remaining = *count, "Stock reserved");
        }
        Ok(())
    }

    /// Atomically decrements `product` by `amount` if enough is left.
    /// Returns whether the decrement happened.
    pub fn decrement_if_available(&self, product: &str, amount: u32) -> bool {
        self.reserve(product, amount).is_ok()
    }

    /// Current count for `product`, 0 if unknown.
    pub fn current_stock(&self, product: &str) -> u32 {
        self.lock().get(product).copied().unwrap_or(0)
    }

    /// A consistent copy of all counts, sorted by product name.
    pub fn snapshot(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .lock()
            .iter()
            .map(|(name, count)| Product::new(name.clone(), *count))
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    #[test]
    fn test_successful_decrements_subtract_exactly() {
        let inventory = Inventory::with_stock([("Pizza", 10), ("Burger", 15)]);

        for _ in 0..4 {
            assert!(inventory.decrement_if_available("Pizza", 1));
        }
        assert!(inventory.decrement_if_available("Burger", 5));

        assert_eq!(inventory.current_stock("Pizza"), 6);
        assert_eq!(inventory.current_stock("Burger"), 10);
    }

    #[test]
    fn test_failed_reserve_leaves_stock_unchanged() {
        let inventory = Inventory::with_stock([("Pizza", 2)]);

        let err = inventory.reserve("Pizza", 3).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                product: "Pizza".into(),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(inventory.current_stock("Pizza"), 2);
    }

    #[test]
    fn test_zero_stock_product_is_refused() {
        let inventory = Inventory::with_stock([("Pizza", 0)]);
        assert!(!inventory.decrement_if_available("Pizza", 1));
        assert_eq!(inventory.current_stock("Pizza"), 0);
    }

    #[test]
    fn test_unknown_product_reads_as_zero() {
        let inventory = Inventory::new();

        assert_eq!(inventory.current_stock("Sushi"), 0);
        assert!(!inventory.decrement_if_available("Sushi", 1));
        assert!(inventory.decrement_if_available("Sushi", 0));
        assert!(inventory.snapshot().is_empty(), "lookups must not create entries");
    }

    #[test]
    fn test_with_stock_merges_duplicates_and_snapshot_is_sorted() {
        let inventory = Inventory::with_stock([("Pizza", 1), ("Burger", 2), ("Pizza", 3)]);
        assert_eq!(
            inventory.snapshot(),
            vec![Product::new("Burger", 2), Product::new("Pizza", 4)]
        );
        assert_eq!(inventory.restock("Burger", u32::MAX), u32::MAX);
    }

    #[test]
    fn test_concurrent_decrements_never_oversell() {
        let inventory = Inventory::with_stock([("Pizza", 25)]);
        let successes = AtomicU32::new(0);
        let failures = AtomicU32::new(0);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..10 {
                        if inventory.decrement_if_available("Pizza", 1) {
                            successes.fetch_add(1, Ordering::SeqCst);
                        } else {
                            failures.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                });
            }
        });

        assert_eq!(successes.load(Ordering::SeqCst), 25);
        assert_eq!(failures.load(Ordering::SeqCst), 80 - 25);
        assert_eq!(inventory.current_stock("Pizza"), 0);
    }
}
