//! BankScope Main Application
//! Top bar with dataset controls and a tabbed dashboard body.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

use egui::{Color32, ComboBox, RichText};
use log::{error, info, warn};

use crate::charts::{render_chart_png, ChartKind};
use crate::data::{load_csv, write_csv, Dataset};
use crate::gui::charts_tab::{ChartsTab, ChartsTabAction};
use crate::gui::data_tab::{DataTab, DataTabAction};
use crate::gui::insights_tab::InsightsTab;
use crate::report::{compute_report, Report};

/// Exported chart image dimensions
const CHART_PNG_WIDTH: u32 = 1000;
const CHART_PNG_HEIGHT: u32 = 620;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete { dataset: Dataset, report: Report },
    Error(String),
}

/// Dashboard tab selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Data,
    Insights,
    Charts,
}

/// Field delimiter used for loading and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    const ALL: [Delimiter; 3] = [Delimiter::Comma, Delimiter::Semicolon, Delimiter::Tab];

    fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Tab => b'\t',
        }
    }

    fn label(self) -> &'static str {
        match self {
            Delimiter::Comma => "Comma (,)",
            Delimiter::Semicolon => "Semicolon (;)",
            Delimiter::Tab => "Tab",
        }
    }
}

/// Main application window.
pub struct BankScopeApp {
    dataset: Option<Arc<Dataset>>,
    report: Option<Report>,
    csv_path: Option<PathBuf>,
    delimiter: Delimiter,
    tab: Tab,
    status: String,
    last_export: Option<PathBuf>,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl BankScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_csv: Option<PathBuf>) -> Self {
        let mut app = Self {
            dataset: None,
            report: None,
            csv_path: None,
            delimiter: Delimiter::Comma,
            tab: Tab::Data,
            status: "Ready".to_string(),
            last_export: None,
            load_rx: None,
            is_loading: false,
        };

        if let Some(path) = initial_csv {
            app.start_load(path);
        }

        app
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Load the dataset and compute its report in a background thread.
    fn start_load(&mut self, path: PathBuf) {
        self.is_loading = true;
        self.status = format!("Loading {}...", path.display());
        self.csv_path = Some(path.clone());

        let delimiter = self.delimiter.as_byte();
        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            match load_csv(&path, delimiter) {
                Ok(dataset) => {
                    let report = compute_report(&dataset);
                    let _ = tx.send(LoadResult::Complete { dataset, report });
                }
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.status = status;
                    }
                    LoadResult::Complete { dataset, report } => {
                        info!("loaded {} records", dataset.len());
                        if dataset.is_empty() {
                            warn!("dataset has a header but no records");
                        }
                        self.status = format!("Loaded {} records", dataset.len());
                        self.dataset = Some(Arc::new(dataset));
                        self.report = Some(report);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        error!("CSV load failed: {error}");
                        self.status = format!("Error: {error}");
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Export the raw dataset back to delimited text.
    fn handle_export_csv(&mut self) {
        let Some(dataset) = self.dataset.clone() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("bank_data.csv")
            .save_file()
        else {
            return; // User cancelled
        };

        match write_csv(&dataset, &path, self.delimiter.as_byte()) {
            Ok(()) => {
                info!("exported {} records to '{}'", dataset.len(), path.display());
                self.status = format!("Exported dataset to {}", path.display());
                self.last_export = Some(path);
            }
            Err(e) => {
                error!("CSV export failed: {e}");
                self.status = format!("Error: {e}");
            }
        }
    }

    /// Render one chart to a PNG file.
    fn handle_export_chart(&mut self, kind: ChartKind) {
        let Some(dataset) = self.dataset.clone() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(kind.file_name())
            .save_file()
        else {
            return; // User cancelled
        };

        match render_chart_png(kind, &dataset, &path, CHART_PNG_WIDTH, CHART_PNG_HEIGHT) {
            Ok(()) => {
                info!("rendered '{}' to '{}'", kind.title(), path.display());
                self.status = format!("Saved chart to {}", path.display());
                self.last_export = Some(path);
            }
            Err(e) => {
                error!("chart export failed: {e}");
                self.status = format!("Error: {e}");
            }
        }
    }

    /// Open the most recent export with the system default app.
    fn handle_open_export(&mut self) {
        if let Some(path) = &self.last_export {
            if let Err(e) = open::that(path) {
                error!("failed to open '{}': {e}", path.display());
                self.status = format!("Error: {e}");
            }
        }
    }

    fn status_color(&self) -> Color32 {
        if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Saved") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        }
    }
}

impl eframe::App for BankScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("🏦 BankScope")
                        .size(20.0)
                        .color(Color32::from_rgb(100, 149, 237)),
                );
                ui.separator();

                if ui.button("📂 Browse CSV").clicked() {
                    self.handle_browse_csv();
                }

                ComboBox::from_id_salt("delimiter")
                    .width(130.0)
                    .selected_text(self.delimiter.label())
                    .show_ui(ui, |ui| {
                        for delimiter in Delimiter::ALL {
                            ui.selectable_value(&mut self.delimiter, delimiter, delimiter.label());
                        }
                    });

                if let Some(name) = self
                    .csv_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                {
                    ui.label(RichText::new(name).size(12.0).color(Color32::GRAY));
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for (tab, title) in [
                    (Tab::Data, "📋 Data Preview"),
                    (Tab::Insights, "📊 Key Insights"),
                    (Tab::Charts, "📈 Visualizations"),
                ] {
                    if ui.selectable_label(self.tab == tab, title).clicked() {
                        self.tab = tab;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.status)
                            .size(11.0)
                            .color(self.status_color()),
                    );
                });
            });
            ui.add_space(4.0);
        });

        let mut data_action = DataTabAction::None;
        let mut charts_action = ChartsTabAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            match (&self.dataset, &self.report) {
                (Some(dataset), Some(report)) => match self.tab {
                    Tab::Data => {
                        data_action = DataTab::show(ui, dataset, self.last_export.is_some());
                    }
                    Tab::Insights => InsightsTab::show(ui, report),
                    Tab::Charts => {
                        charts_action = ChartsTab::show(ui, dataset);
                    }
                },
                _ => {
                    ui.centered_and_justified(|ui| {
                        let hint = if self.is_loading {
                            "Loading..."
                        } else {
                            "No Data - browse for a CSV file to begin"
                        };
                        ui.label(RichText::new(hint).size(20.0));
                    });
                }
            }
        });

        match data_action {
            DataTabAction::ExportCsv => self.handle_export_csv(),
            DataTabAction::OpenLastExport => self.handle_open_export(),
            DataTabAction::None => {}
        }

        if let ChartsTabAction::SavePng(kind) = charts_action {
            self.handle_export_chart(kind);
        }
    }
}
