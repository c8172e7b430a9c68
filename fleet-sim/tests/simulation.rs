//! Orchestrator integration tests
//!
//! All timer-dependent behavior runs under tokio's paused clock
//! (`start_paused = true`), so delay ordering and the merge contract are
//! exercised deterministically instead of against wall-clock timing.

use std::collections::HashSet;
use std::time::Duration;

use fleet_sim::{FleetGenerator, FleetSim, RevealDelay, SimConfig};
use shared::PrinterStatus;

/// Let spawned reveal tasks run after the clock moved.
async fn drain_tasks() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

async fn advance(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    drain_tasks().await;
}

fn config(fleet_size: usize) -> SimConfig {
    SimConfig {
        fleet_size,
        ..SimConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn initial_publish_is_all_checking_with_distinct_ids() {
    let sim = FleetSim::start(&config(5), &FleetGenerator::default()).unwrap();

    // Published immediately, no blocking wait
    let snapshot = sim.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot.version, 0);

    let mut ids = HashSet::new();
    for printer in &snapshot.printers {
        assert_eq!(printer.status, PrinterStatus::Checking);
        assert_eq!(printer.page_count, 0);
        assert_eq!(printer.toner_level, 0);
        ids.insert(printer.id.clone());
    }
    assert_eq!(ids.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn fleet_settles_after_max_delay() {
    let sim = FleetSim::start(&config(5), &FleetGenerator::default()).unwrap();

    // Past the exclusive upper bound of the delay window
    advance(1600).await;

    let snapshot = sim.snapshot();
    assert!(snapshot.is_settled());
    assert_eq!(snapshot.len(), 5);
    for printer in &snapshot.printers {
        assert!(matches!(
            printer.status,
            PrinterStatus::Online | PrinterStatus::Offline
        ));
        assert!(printer.toner_level <= 100);
    }
}

#[tokio::test(start_paused = true)]
async fn reveals_fire_independently_per_index() {
    let delays = RevealDelay::Fixed(vec![
        Duration::from_millis(100),
        Duration::from_millis(200),
        Duration::from_millis(1700),
    ]);
    let sim = FleetSim::start_with_delays(3, &FleetGenerator::default(), delays).unwrap();

    // At 150ms only index 0 has fired
    advance(150).await;
    let snapshot = sim.snapshot();
    assert!(!snapshot.printers[0].is_checking());
    assert!(snapshot.printers[1].is_checking());
    assert!(snapshot.printers[2].is_checking());
    assert_eq!(snapshot.version, 1);

    // At 250ms index 1 joins; index 2 is untouched by either reveal
    advance(100).await;
    let snapshot = sim.snapshot();
    assert!(!snapshot.printers[0].is_checking());
    assert!(!snapshot.printers[1].is_checking());
    assert!(snapshot.printers[2].is_checking());
    assert_eq!(snapshot.printers[2].page_count, 0);
    assert_eq!(snapshot.version, 2);

    advance(1500).await;
    assert!(sim.snapshot().is_settled());
}

#[tokio::test(start_paused = true)]
async fn count_ids_and_transitions_hold_across_the_session() {
    let delays: Vec<Duration> = (0..5)
        .map(|i| Duration::from_millis((i as u64 + 1) * 100))
        .collect();
    let sim =
        FleetSim::start_with_delays(5, &FleetGenerator::default(), RevealDelay::Fixed(delays))
            .unwrap();

    let initial = sim.snapshot();
    let initial_ids: Vec<String> = initial.printers.iter().map(|p| p.id.clone()).collect();
    let mut resolved: HashSet<usize> = HashSet::new();

    // Step the clock through the whole window, checking invariants at
    // every observation point
    for _ in 0..12 {
        advance(50).await;
        let snapshot = sim.snapshot();

        // Count invariance
        assert_eq!(snapshot.len(), 5);

        for (index, printer) in snapshot.printers.iter().enumerate() {
            if printer.is_checking() {
                // Sentinel holds while checking; resolution is one-way
                assert!(!resolved.contains(&index));
                assert_eq!(printer.page_count, 0);
                assert_eq!(printer.toner_level, 0);
                // Identity assigned at first publish stays put
                assert_eq!(printer.id, initial_ids[index]);
            } else {
                resolved.insert(index);
            }
        }
    }

    assert_eq!(resolved.len(), 5);
    assert!(sim.snapshot().is_settled());
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_every_settling_step() {
    let delays = RevealDelay::Fixed(vec![
        Duration::from_millis(300),
        Duration::from_millis(600),
    ]);
    let sim = FleetSim::start_with_delays(2, &FleetGenerator::default(), delays).unwrap();
    let mut rx = sim.subscribe();

    assert_eq!(rx.borrow().checking_count(), 2);

    advance(300).await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().checking_count(), 1);

    advance(300).await;
    assert!(rx.has_changed().unwrap());
    let last = rx.borrow_and_update().clone();
    assert!(last.is_settled());
    assert_eq!(last.version, 2);
}

#[tokio::test(start_paused = true)]
async fn shutdown_lets_pending_reveals_noop() {
    let delays = RevealDelay::Fixed(vec![
        Duration::from_millis(100),
        Duration::from_millis(1000),
    ]);
    let sim = FleetSim::start_with_delays(2, &FleetGenerator::default(), delays).unwrap();

    advance(150).await;
    assert!(!sim.snapshot().printers[0].is_checking());

    sim.shutdown();
    advance(2000).await;

    // The cancelled reveal never fired; the applied one stays visible
    let snapshot = sim.snapshot();
    assert!(!snapshot.printers[0].is_checking());
    assert!(snapshot.printers[1].is_checking());
    assert_eq!(snapshot.version, 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_cleanly() {
    let delays = RevealDelay::Fixed(vec![Duration::from_millis(500)]);
    let sim = FleetSim::start_with_delays(1, &FleetGenerator::default(), delays).unwrap();
    let rx = sim.subscribe();

    drop(sim);
    advance(1000).await;

    // No panic, no late write: the record is still the placeholder the
    // subscriber last saw
    assert!(rx.borrow().printers[0].is_checking());
}

#[tokio::test(start_paused = true)]
async fn zero_fleet_size_is_rejected_at_start() {
    let err = FleetSim::start(
        &SimConfig {
            fleet_size: 0,
            ..SimConfig::default()
        },
        &FleetGenerator::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("fleet_size"));
}
