//! DSP Tracker - store coverage dashboard
//!
//! Fetches the published store-coverage CSV, filters it per report, and
//! renders the result as a styled table with summary metrics.

mod data;
mod gui;
mod stats;
mod table;

mod tests;

use eframe::egui;
use gui::TrackerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("DSP Tracker"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "DSP Tracker",
        options,
        Box::new(|cc| Ok(Box::new(TrackerApp::new(cc)))),
    )
}
