//! Console configuration
//!
//! All settings come from environment variables with sensible defaults:
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | FLEET_SIZE | 10 | printers in the simulated fleet |
//! | REVEAL_DELAY_MIN_MS | 100 | minimum reveal delay (inclusive) |
//! | REVEAL_DELAY_MAX_MS | 1600 | reveal delay upper bound (exclusive) |
//! | LOG_LEVEL | info | tracing filter when RUST_LOG is unset |
//! | LOG_JSON | false | emit JSON-formatted logs |

use std::time::Duration;

use fleet_sim::{DEFAULT_FLEET_SIZE, SimConfig};

#[derive(Debug, Clone)]
pub struct Config {
    pub fleet_size: usize,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fleet_size: DEFAULT_FLEET_SIZE,
            delay_min_ms: 100,
            delay_max_ms: 1600,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fleet_size: std::env::var("FLEET_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fleet_size),
            delay_min_ms: std::env::var("REVEAL_DELAY_MIN_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.delay_min_ms),
            delay_max_ms: std::env::var("REVEAL_DELAY_MAX_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.delay_max_ms),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
        }
    }

    /// Simulation parameters derived from this config.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            fleet_size: self.fleet_size,
            delay_min: Duration::from_millis(self.delay_min_ms),
            delay_max: Duration::from_millis(self.delay_max_ms),
        }
    }
}
