//! Printer fleet monitoring demo
//!
//! Starts a simulated fleet session, renders every published snapshot to
//! the terminal until all printers have resolved, then demonstrates the
//! device-action pass-throughs and exits.

mod actions;
mod config;
mod logger;
mod render;

use fleet_sim::{FleetGenerator, FleetSim};
use shared::PrinterStatus;

use crate::actions::{ConsoleActions, DeviceActions};
use crate::config::Config;
use crate::render::{ConsoleRender, RenderSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init(&config.log_level, config.log_json)?;

    let sim_config = config.sim_config();
    sim_config.validate()?;
    tracing::info!(
        fleet_size = sim_config.fleet_size,
        delay_min_ms = config.delay_min_ms,
        delay_max_ms = config.delay_max_ms,
        "starting printer fleet simulation"
    );

    let sim = FleetSim::start(&sim_config, &FleetGenerator::default())?;
    let mut rx = sim.subscribe();
    let sink = ConsoleRender;

    // Initial placeholder collection, then one frame per applied reveal
    sink.render(&rx.borrow_and_update().clone());
    while !rx.borrow().is_settled() {
        if rx.changed().await.is_err() {
            break;
        }
        let snapshot = rx.borrow_and_update().clone();
        sink.render(&snapshot);
    }

    // Demonstrate the pass-through device actions on the first printer
    // that came up online
    let snapshot = sim.snapshot();
    if let Some(printer) = snapshot
        .printers
        .iter()
        .find(|p| p.status == PrinterStatus::Online)
    {
        let actions = ConsoleActions;
        actions.open_web_interface(printer);
        actions.maintenance_notice(printer);
    }

    tracing::info!(version = snapshot.version, "fleet settled, exiting");
    Ok(())
}
