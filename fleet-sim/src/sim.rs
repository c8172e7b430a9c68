//! Staggered-reveal orchestration
//!
//! Owns the canonical fleet collection and drives each record from its
//! `Checking` placeholder to the resolved state produced by a second
//! generator pass, one independently delayed reveal per index.
//!
//! # Merge contract
//!
//! Every reveal task merges into the *latest* published snapshot through
//! [`watch::Sender::send_modify`], never a snapshot captured at schedule
//! time, so reveals that fire out of order cannot clobber each other.
//! Exactly one reveal fires per index; reveals for distinct indices are
//! unordered and independent.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use shared::PrinterRecord;

use crate::error::{SimError, SimResult};
use crate::generator::{DEFAULT_FLEET_SIZE, FleetGenerator};
use crate::snapshot::FleetSnapshot;

/// Default reveal delay window, matching the original dashboard pacing
pub const DEFAULT_DELAY_MIN: Duration = Duration::from_millis(100);
/// Upper bound is exclusive
pub const DEFAULT_DELAY_MAX: Duration = Duration::from_millis(1600);

/// Simulation parameters
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of printers in the session; fixed for its lifetime
    pub fleet_size: usize,
    /// Minimum reveal delay (inclusive)
    pub delay_min: Duration,
    /// Maximum reveal delay (exclusive)
    pub delay_max: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fleet_size: DEFAULT_FLEET_SIZE,
            delay_min: DEFAULT_DELAY_MIN,
            delay_max: DEFAULT_DELAY_MAX,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.fleet_size == 0 {
            return Err(SimError::InvalidConfig(
                "fleet_size must be at least 1".to_string(),
            ));
        }
        if self.delay_min >= self.delay_max {
            return Err(SimError::InvalidConfig(format!(
                "delay range is empty: {:?} >= {:?}",
                self.delay_min, self.delay_max
            )));
        }
        Ok(())
    }
}

/// Per-index reveal delay policy
#[derive(Debug, Clone)]
pub enum RevealDelay {
    /// Sample uniformly in `[min, max)` per index
    Uniform { min: Duration, max: Duration },
    /// Explicit delay per index; missing entries fire immediately (tests)
    Fixed(Vec<Duration>),
}

impl RevealDelay {
    fn for_index(&self, index: usize) -> Duration {
        match self {
            RevealDelay::Uniform { min, max } => {
                let lo = min.as_millis() as u64;
                let hi = max.as_millis() as u64;
                if lo >= hi {
                    return *min;
                }
                Duration::from_millis(rand::thread_rng().gen_range(lo..hi))
            }
            RevealDelay::Fixed(delays) => {
                delays.get(index).copied().unwrap_or(Duration::ZERO)
            }
        }
    }
}

/// Handle to a running fleet simulation session
///
/// Publishes the placeholder collection on start, then one snapshot per
/// applied reveal. Dropping the handle cancels pending reveals; updates
/// already applied stay visible to existing subscribers.
#[derive(Debug)]
pub struct FleetSim {
    tx: Arc<watch::Sender<FleetSnapshot>>,
    cancel: CancellationToken,
}

impl FleetSim {
    /// Start a session with uniformly random reveal delays.
    pub fn start(config: &SimConfig, generator: &FleetGenerator) -> SimResult<Self> {
        config.validate()?;
        let delay = RevealDelay::Uniform {
            min: config.delay_min,
            max: config.delay_max,
        };
        Self::start_with_delays(config.fleet_size, generator, delay)
    }

    /// Start a session with an explicit delay policy.
    ///
    /// Runs the placeholder pass and publishes it immediately, runs the
    /// resolved pass, then spawns one one-shot reveal task per index.
    pub fn start_with_delays(
        fleet_size: usize,
        generator: &FleetGenerator,
        delay: RevealDelay,
    ) -> SimResult<Self> {
        if fleet_size == 0 {
            return Err(SimError::InvalidConfig(
                "fleet_size must be at least 1".to_string(),
            ));
        }

        // Placeholder pass: same shape as the final data, checking status,
        // zeroed metrics. Published before any timer is armed.
        let drafts = generator.generate(fleet_size);
        let placeholders: Vec<PrinterRecord> = drafts
            .iter()
            .enumerate()
            .map(|(index, draft)| PrinterRecord::placeholder(draft, index))
            .collect();

        let (tx, _rx) = watch::channel(FleetSnapshot::loading());
        let tx = Arc::new(tx);
        tx.send_replace(FleetSnapshot::new(placeholders));
        tracing::info!(fleet_size, "fleet session started, all printers checking");

        // Resolved pass: the final truth for this session. Identity is
        // re-derived from the resolved draft's address + index; index i of
        // the initial collection is always replaced by index i of this set.
        let resolved = generator.generate(fleet_size);

        let cancel = CancellationToken::new();
        for (index, draft) in resolved.into_iter().enumerate() {
            let record = PrinterRecord::resolved(draft, index);
            let wait = delay.for_index(index);
            let tx = Arc::clone(&tx);
            let cancel = cancel.clone();

            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!(index, "reveal cancelled before firing");
                    }
                    _ = tokio::time::sleep(wait) => {
                        tracing::debug!(
                            index,
                            id = %record.id,
                            status = %record.status,
                            delay_ms = wait.as_millis() as u64,
                            "printer probe resolved"
                        );
                        // Read-modify-write against the latest snapshot
                        tx.send_modify(|snapshot| snapshot.resolve_slot(index, record));
                    }
                }
            });
        }

        Ok(Self { tx, cancel })
    }

    /// Subscribe to the evolving snapshot stream.
    pub fn subscribe(&self) -> watch::Receiver<FleetSnapshot> {
        self.tx.subscribe()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> FleetSnapshot {
        self.tx.borrow().clone()
    }

    /// Cancel reveals that have not fired yet. Applied updates stay
    /// visible; there is no way to un-resolve a record.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for FleetSim {
    fn drop(&mut self) {
        // Pending reveal tasks observe the token and no-op
        self.cancel.cancel();
    }
}
