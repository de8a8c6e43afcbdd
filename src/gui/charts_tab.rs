//! Visualizations Tab
//! The three dashboard charts in collapsible sections.

use egui::{CollapsingHeader, RichText, ScrollArea};

use crate::charts::{ChartKind, ChartPlotter};
use crate::data::Dataset;

/// Actions triggered by the charts tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartsTabAction {
    None,
    SavePng(ChartKind),
}

/// Collapsible chart sections with per-chart export.
pub struct ChartsTab;

impl ChartsTab {
    pub fn show(ui: &mut egui::Ui, dataset: &Dataset) -> ChartsTabAction {
        let mut action = ChartsTabAction::None;

        ui.heading("Visualizations");
        ui.add_space(10.0);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, kind) in ChartKind::ALL.into_iter().enumerate() {
                    CollapsingHeader::new(RichText::new(kind.title()).size(14.0).strong())
                        .default_open(index == 0)
                        .show(ui, |ui| {
                            if ui.small_button("💾 Save PNG").clicked() {
                                action = ChartsTabAction::SavePng(kind);
                            }
                            ui.add_space(4.0);

                            match kind {
                                ChartKind::AgeDistribution => {
                                    ChartPlotter::draw_age_distribution(ui, dataset)
                                }
                                ChartKind::DurationByMarital => {
                                    ChartPlotter::draw_duration_by_marital(ui, dataset)
                                }
                                ChartKind::AgeByJob => ChartPlotter::draw_age_by_job(ui, dataset),
                            }
                        });
                    ui.add_space(8.0);
                }
            });

        action
    }
}
