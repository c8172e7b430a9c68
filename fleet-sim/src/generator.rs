//! Fleet data generation
//!
//! Pure, randomized generation of printer drafts. Each call yields an
//! independently randomized full data set; the orchestrator calls it twice
//! per session (once for the placeholder pass, once for the resolved pass).

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;

use shared::{PrinterDraft, PrinterStatus};

/// Default number of printers in a simulated fleet
pub const DEFAULT_FLEET_SIZE: usize = 10;

const MODELS: &[&str] = &[
    "HP LaserJet Pro M404dn",
    "Brother HL-L6400DW",
    "Epson EcoTank L3250",
    "Canon imageRUNNER 1643i",
    "Xerox VersaLink C405",
    "Kyocera ECOSYS P3145dn",
    "Lexmark MS431dw",
    "Samsung Xpress M2885FW",
];

const DEPARTMENTS: &[&str] = &[
    "Finance",
    "Human Resources",
    "Engineering",
    "Marketing",
    "Logistics",
    "Legal",
    "Reception",
];

const LOCATIONS: &[&str] = &[
    "Ground Floor - Lobby",
    "1st Floor - East Wing",
    "1st Floor - West Wing",
    "2nd Floor - Copy Room",
    "3rd Floor - Open Space",
    "Annex - Warehouse",
];

const OFFLINE_MESSAGES: &[&str] = &[
    "Paper jam in tray 2",
    "Out of toner",
    "No response from device",
    "Cover open",
    "Firmware update required",
];

/// Random printer draft generator with injectable name pools
///
/// No I/O, no external dependency; every call to [`generate`] is an
/// independent randomized pass over the same field set.
///
/// [`generate`]: FleetGenerator::generate
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    models: Vec<String>,
    departments: Vec<String>,
    locations: Vec<String>,
    offline_messages: Vec<String>,
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self {
            models: MODELS.iter().map(|s| s.to_string()).collect(),
            departments: DEPARTMENTS.iter().map(|s| s.to_string()).collect(),
            locations: LOCATIONS.iter().map(|s| s.to_string()).collect(),
            offline_messages: OFFLINE_MESSAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FleetGenerator {
    /// Generator with custom name pools (used by tests)
    pub fn with_pools(
        models: Vec<String>,
        departments: Vec<String>,
        locations: Vec<String>,
    ) -> Self {
        Self {
            models,
            departments,
            locations,
            offline_messages: OFFLINE_MESSAGES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Generate `count` randomized drafts.
    ///
    /// Deterministic in shape (same field set, same count), randomized in
    /// content. Drafts carry a final status; `Checking` never appears here.
    pub fn generate(&self, count: usize) -> Vec<PrinterDraft> {
        let mut rng = rand::thread_rng();
        (0..count).map(|index| self.draft(&mut rng, index)).collect()
    }

    fn draft(&self, rng: &mut impl Rng, index: usize) -> PrinterDraft {
        // Online-biased, the way a healthy office fleet reads
        let status = if rng.gen_bool(0.75) {
            PrinterStatus::Online
        } else {
            PrinterStatus::Offline
        };

        // Skew a slice of the fleet toward low toner so the dashboard has
        // something to warn about
        let toner_level: u8 = if rng.gen_bool(0.2) {
            rng.gen_range(0..=20)
        } else {
            rng.gen_range(21..=100)
        };

        let status_message = match status {
            PrinterStatus::Offline if rng.gen_bool(0.6) => self
                .offline_messages
                .choose(rng)
                .cloned(),
            _ => None,
        };

        PrinterDraft {
            model: self.pick(&self.models, rng),
            ip: format!("192.168.{}.{}", rng.gen_range(0..8), 10 + index),
            department: self.pick(&self.departments, rng),
            location: self.pick(&self.locations, rng),
            status,
            page_count: rng.gen_range(1_200..500_000),
            toner_level,
            serial: Self::serial(rng),
            status_message,
        }
    }

    fn pick(&self, pool: &[String], rng: &mut impl Rng) -> String {
        pool.choose(rng).cloned().unwrap_or_default()
    }

    fn serial(rng: &mut impl Rng) -> String {
        let suffix: String = rng
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        format!("BRX-{}", suffix.to_uppercase())
    }
}
