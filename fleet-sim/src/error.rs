//! Error types for the simulation core

use thiserror::Error;

/// Simulation error types
///
/// Generation itself is pure and total; the only failure mode is a
/// configuration that cannot describe a valid session.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid simulation configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;
