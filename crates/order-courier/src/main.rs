//! # Order Courier Demo
//!
//! Runs the default simulation: `Pizza: 10`, `Burger: 15`; Alice orders a
//! Pizza and Bob a Burger, then the courier delivers both and is stopped.
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! ```

use courier_framework::tracing::setup_tracing;
use order_courier::lifecycle::{Simulation, SimulationConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order courier simulation");

    let simulation = Simulation::new(SimulationConfig::default()).map_err(|e| e.to_string())?;
    let report = simulation.run().await.map_err(|e| e.to_string())?;

    info!(
        placed = report.placed.len(),
        refused = report.refused.len(),
        delivered = report.delivered.len(),
        "Simulation completed"
    );
    Ok(())
}
