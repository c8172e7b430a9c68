//! Versioned fleet snapshot
//!
//! The canonical collection published to observers. All mutation goes
//! through [`FleetSnapshot::resolve_slot`], so every state change is
//! explicit and testable without a rendering layer attached.

use serde::{Deserialize, Serialize};

use shared::util::now_millis;
use shared::{PrinterRecord, Timestamp};

/// One published state of the fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSnapshot {
    /// Ordered collection; position is stable for the whole session
    pub printers: Vec<PrinterRecord>,
    /// True only before the initial placeholder publish
    pub loading: bool,
    /// Bumped on every applied update
    pub version: u64,
    /// When this snapshot was last modified (Unix millis)
    pub updated_at: Timestamp,
}

impl Default for FleetSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

impl FleetSnapshot {
    /// Pre-publish state, before the placeholder collection exists
    pub fn loading() -> Self {
        Self {
            printers: Vec::new(),
            loading: true,
            version: 0,
            updated_at: now_millis(),
        }
    }

    /// Initial visible collection (version 0)
    pub fn new(printers: Vec<PrinterRecord>) -> Self {
        Self {
            printers,
            loading: false,
            version: 0,
            updated_at: now_millis(),
        }
    }

    /// Replace the record at `index` with its resolved form.
    ///
    /// This is the single update entry point. The slot must still be in
    /// `Checking`: exactly one reveal fires per index, and a resolved
    /// record never goes back to checking, so anything else is a bug and
    /// gets dropped with a warning instead of clobbering live state.
    pub fn resolve_slot(&mut self, index: usize, record: PrinterRecord) {
        let Some(slot) = self.printers.get_mut(index) else {
            tracing::warn!(index, "resolve_slot: index out of range, dropping update");
            return;
        };
        if !slot.is_checking() {
            tracing::warn!(index, id = %slot.id, "resolve_slot: slot already resolved, dropping update");
            return;
        }
        *slot = record;
        self.version += 1;
        self.updated_at = now_millis();
    }

    /// True when no record is still `Checking`
    pub fn is_settled(&self) -> bool {
        self.printers.iter().all(|p| !p.is_checking())
    }

    /// Number of records still in the placeholder state
    pub fn checking_count(&self) -> usize {
        self.printers.iter().filter(|p| p.is_checking()).count()
    }

    pub fn len(&self) -> usize {
        self.printers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }
}
