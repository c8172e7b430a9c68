//! # fleet-sim
//!
//! Simulated printer fleet with staggered status reveal.
//!
//! ## Scope
//!
//! This crate owns the simulation core:
//! - Randomized fleet data generation (no real device contact)
//! - The staggered-reveal orchestrator: every printer starts as a
//!   `Checking` placeholder and resolves to its final state after an
//!   independent random delay
//! - Snapshot publication over a `tokio::sync::watch` channel
//!
//! Presentation (WHAT the snapshots look like on screen) stays in the
//! front end: table rendering and device actions live in `fleet-console`.
//!
//! ## Example
//!
//! ```ignore
//! use fleet_sim::{FleetGenerator, FleetSim, SimConfig};
//!
//! let sim = FleetSim::start(&SimConfig::default(), &FleetGenerator::default())?;
//! let mut rx = sim.subscribe();
//! while rx.changed().await.is_ok() {
//!     let snapshot = rx.borrow().clone();
//!     println!("{} printers, {} still checking", snapshot.len(), snapshot.checking_count());
//!     if snapshot.is_settled() {
//!         break;
//!     }
//! }
//! ```

mod error;
mod generator;
mod sim;
mod snapshot;

// Re-exports
pub use error::{SimError, SimResult};
pub use generator::{DEFAULT_FLEET_SIZE, FleetGenerator};
pub use sim::{DEFAULT_DELAY_MAX, DEFAULT_DELAY_MIN, FleetSim, RevealDelay, SimConfig};
pub use snapshot::FleetSnapshot;
