//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! Status lines (orders placed, deliveries, shutdown milestones) are emitted
//! at `info`, so the filter defaults to `info` when `RUST_LOG` is unset.
//!
//! ```bash
//! # Status lines only (default)
//! cargo run
//!
//! # Include per-item debug events from the worker loop
//! RUST_LOG=debug cargo run
//!
//! # Filter to one crate
//! RUST_LOG=courier_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run of the order courier looks like:
//!
//! ```text
//! INFO place_order: Order placed: Alice ordered Pizza order_id=order_1
//! INFO place_order: Order placed: Bob ordered Burger order_id=order_2
//! INFO Worker started worker_type="Courier"
//! INFO Courier delivered the order of Alice order_id=order_1 product="Pizza"
//! INFO Courier delivered the order of Bob order_id=order_2 product="Burger"
//! INFO Stopping courier...
//! INFO Worker stopped worker_type="Courier" handled=2
//! INFO System terminated.
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes compact, stdout logging filtered by `RUST_LOG` (default
/// `info`).
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - the messages name their component
        .compact()
        .try_init();
}
