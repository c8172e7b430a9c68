//! Data models

pub mod printer;

pub use printer::{PrinterDraft, PrinterRecord, PrinterStatus};
