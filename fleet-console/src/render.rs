//! Console render sink
//!
//! Consumes fleet snapshots and prints a plain-text table. One-way: the
//! sink never feeds anything back into the simulation core.

use fleet_sim::FleetSnapshot;
use shared::PrinterRecord;

/// Render sink contract: given a snapshot, produce a visual representation.
pub trait RenderSink {
    fn render(&self, snapshot: &FleetSnapshot);
}

/// Plain-text table renderer for the terminal
pub struct ConsoleRender;

impl ConsoleRender {
    fn row(&self, index: usize, printer: &PrinterRecord) {
        // Metrics and serial are not-yet-available while checking
        let (toner, pages, serial) = if printer.is_checking() {
            ("--".to_string(), "--".to_string(), "--".to_string())
        } else {
            (
                format!("{}%", printer.toner_level),
                printer.page_count.to_string(),
                printer.serial.clone(),
            )
        };

        println!(
            "{:<3} {:<26} {:<14} {:<16} {:>6} {:>9}  {:<14} {:<10} {}",
            index,
            printer.model,
            printer.ip,
            printer.department,
            toner,
            pages,
            serial,
            printer.status.to_string(),
            printer.status_message.as_deref().unwrap_or(""),
        );
    }
}

impl RenderSink for ConsoleRender {
    fn render(&self, snapshot: &FleetSnapshot) {
        if snapshot.loading {
            println!("Loading printer data...");
            return;
        }

        println!();
        println!(
            "Printer fleet (v{}): {} printers, {} still checking",
            snapshot.version,
            snapshot.len(),
            snapshot.checking_count()
        );
        println!(
            "{:<3} {:<26} {:<14} {:<16} {:>6} {:>9}  {:<14} {:<10} {}",
            "#", "model", "ip", "department", "toner", "pages", "serial", "status", "note"
        );
        for (index, printer) in snapshot.printers.iter().enumerate() {
            self.row(index, printer);
        }
    }
}
