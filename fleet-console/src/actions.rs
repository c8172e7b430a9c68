//! Device action pass-throughs
//!
//! Inert side effects triggered from the dashboard: pointing an external
//! viewer at a printer's web interface and surfacing a maintenance notice.
//! Stateless, no return value consumed by the core.

use shared::PrinterRecord;

pub trait DeviceActions {
    /// Emit the device's web endpoint for an external viewing context.
    fn open_web_interface(&self, printer: &PrinterRecord);

    /// Surface a user-visible maintenance notice for the device.
    fn maintenance_notice(&self, printer: &PrinterRecord);
}

/// Terminal-backed actions: the demo has no browser, so both actions are
/// emitted as log lines.
pub struct ConsoleActions;

impl DeviceActions for ConsoleActions {
    fn open_web_interface(&self, printer: &PrinterRecord) {
        tracing::info!(
            id = %printer.id,
            url = %format!("http://{}", printer.ip),
            "open printer web interface"
        );
    }

    fn maintenance_notice(&self, printer: &PrinterRecord) {
        tracing::info!(
            model = %printer.model,
            ip = %printer.ip,
            "maintenance functions requested"
        );
    }
}
