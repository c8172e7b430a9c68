//! Shared types for the printer fleet simulator
//!
//! Model types and small utilities used by both the simulation core
//! and the console front end.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use models::{PrinterDraft, PrinterRecord, PrinterStatus};
pub use serde::{Deserialize, Serialize};
pub use types::Timestamp;
