//! Data Preview Tab
//! Scrollable table of raw records with CSV export.

use egui::{Color32, RichText, ScrollArea};

use crate::data::{Dataset, COLUMNS};

/// Rows shown in the preview table.
const PREVIEW_ROWS: usize = 100;

/// Actions triggered by the data tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataTabAction {
    None,
    ExportCsv,
    OpenLastExport,
}

/// Raw dataset preview with export controls.
pub struct DataTab;

impl DataTab {
    pub fn show(ui: &mut egui::Ui, dataset: &Dataset, has_export: bool) -> DataTabAction {
        let mut action = DataTabAction::None;

        ui.heading("Dataset Preview");
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} records, {} columns",
                    dataset.len(),
                    COLUMNS.len()
                ))
                .size(12.0)
                .color(Color32::GRAY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("💾 Export CSV").clicked() {
                    action = DataTabAction::ExportCsv;
                }
                if has_export && ui.button("📂 Open Last Export").clicked() {
                    action = DataTabAction::OpenLastExport;
                }
            });
        });

        ui.add_space(8.0);

        let shown = dataset.len().min(PREVIEW_ROWS);
        if shown < dataset.len() {
            ui.label(
                RichText::new(format!("Showing first {} of {} records", shown, dataset.len()))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
            ui.add_space(4.0);
        }

        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            egui::Grid::new("data_preview")
                .striped(true)
                .min_col_width(60.0)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    for column in COLUMNS {
                        ui.label(RichText::new(column).strong().size(11.0));
                    }
                    ui.end_row();

                    for record in &dataset.records()[..shown] {
                        for value in record.field_values() {
                            ui.label(RichText::new(value).size(11.0));
                        }
                        ui.end_row();
                    }
                });
        });

        action
    }
}
