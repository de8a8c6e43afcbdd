//! BankScope - Banking Campaign CSV Analysis & Dashboard Viewer
//!
//! A Rust application for exploring a bank-marketing dataset: raw data
//! preview, summary aggregates, and interactive charts.

mod charts;
mod data;
mod gui;
mod report;

use std::path::PathBuf;

use eframe::egui;
use gui::BankScopeApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional dataset to open at startup
    let initial_csv = std::env::args().nth(1).map(PathBuf::from);

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("BankScope"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "BankScope",
        options,
        Box::new(|cc| Ok(Box::new(BankScopeApp::new(cc, initial_csv)))),
    )
}
