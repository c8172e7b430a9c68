//! Printer Fleet Model
//!
//! A [`PrinterDraft`] is what the generator produces; a [`PrinterRecord`] is
//! a draft with its identity assigned from network address + position index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Printer status as shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterStatus {
    /// Device reachable and ready
    Online,
    /// Device unreachable or reporting a fault
    Offline,
    /// Placeholder shown while the simulated probe is pending
    Checking,
}

impl PrinterStatus {
    pub fn is_checking(&self) -> bool {
        matches!(self, PrinterStatus::Checking)
    }
}

impl fmt::Display for PrinterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterStatus::Online => write!(f, "online"),
            PrinterStatus::Offline => write!(f, "offline"),
            PrinterStatus::Checking => write!(f, "checking"),
        }
    }
}

/// Generated printer data, before identity assignment
///
/// Drafts carry a final status (`Online` or `Offline`); `Checking` only
/// exists on placeholder records, never on generator output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterDraft {
    pub model: String,
    pub ip: String,
    pub department: String,
    pub location: String,
    pub status: PrinterStatus,
    pub page_count: u32,
    /// Toner percentage, 0..=100
    pub toner_level: u8,
    pub serial: String,
    pub status_message: Option<String>,
}

/// One simulated printer in the fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterRecord {
    /// Stable identity: `<ip>-<index>`, assigned once at creation and
    /// never recomputed
    pub id: String,
    pub model: String,
    pub ip: String,
    pub department: String,
    pub location: String,
    pub status: PrinterStatus,
    pub page_count: u32,
    pub toner_level: u8,
    pub serial: String,
    pub status_message: Option<String>,
}

impl PrinterRecord {
    /// Build the `Checking` placeholder shown before the probe resolves.
    ///
    /// Metrics are forced to the unknown sentinel (`page_count = 0`,
    /// `toner_level = 0`); the remaining fields are carried from the draft.
    /// The serial is carried too but treated as not-yet-available by the
    /// render layer while the record is checking.
    pub fn placeholder(draft: &PrinterDraft, index: usize) -> Self {
        Self {
            id: Self::identity(&draft.ip, index),
            model: draft.model.clone(),
            ip: draft.ip.clone(),
            department: draft.department.clone(),
            location: draft.location.clone(),
            status: PrinterStatus::Checking,
            page_count: 0,
            toner_level: 0,
            serial: draft.serial.clone(),
            status_message: draft.status_message.clone(),
        }
    }

    /// Build the resolved record for position `index`, keeping the draft's
    /// final status and metrics verbatim.
    pub fn resolved(draft: PrinterDraft, index: usize) -> Self {
        Self {
            id: Self::identity(&draft.ip, index),
            model: draft.model,
            ip: draft.ip,
            department: draft.department,
            location: draft.location,
            status: draft.status,
            page_count: draft.page_count,
            toner_level: draft.toner_level,
            serial: draft.serial,
            status_message: draft.status_message,
        }
    }

    fn identity(ip: &str, index: usize) -> String {
        format!("{}-{}", ip, index)
    }

    pub fn is_checking(&self) -> bool {
        self.status.is_checking()
    }
}
