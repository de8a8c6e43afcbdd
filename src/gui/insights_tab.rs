//! Key Insights Tab
//! Metric cards and aggregate tables derived from the report.

use egui::{Color32, RichText};

use crate::report::Report;

const CARD_VALUE_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

/// Report-backed metric cards and summary tables.
pub struct InsightsTab;

impl InsightsTab {
    pub fn show(ui: &mut egui::Ui, report: &Report) {
        ui.heading("Key Insights");
        ui.add_space(10.0);

        let yes_share = report.subscription_share.get("yes").copied().unwrap_or(0.0);
        let no_share = report.subscription_share.get("no").copied().unwrap_or(0.0);

        ui.columns(3, |columns| {
            Self::metric_card(
                &mut columns[0],
                "Clients Attracted (Subscribed)",
                format!("{:.2}%", yes_share * 100.0),
                &format!(
                    "{:+.2}% vs not subscribed",
                    (yes_share - no_share) * 100.0
                ),
            );
            Self::metric_card(
                &mut columns[1],
                "Avg Call Duration (Subscribed)",
                fmt_mean_unit(report.avg_call_duration_subscribed, "seconds"),
                "Average duration of calls for clients who subscribed.",
            );
            Self::metric_card(
                &mut columns[2],
                "Avg Age (Subscribed & Single)",
                fmt_mean_unit(report.avg_age_unmarried_subscribed, "years"),
                "Average age of subscribed clients who are single.",
            );
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(
            RichText::new("Mean Numerical Features Among Subscribed Clients")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);

        egui::Grid::new("mean_numeric_table")
            .striped(true)
            .min_col_width(90.0)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Feature").strong().size(11.0));
                ui.label(RichText::new("Mean Value").strong().size(11.0));
                ui.end_row();

                for (field, mean) in &report.mean_numeric_by_subscribed {
                    ui.label(RichText::new(*field).size(11.0));
                    ui.label(RichText::new(fmt_mean(*mean)).size(11.0));
                    ui.end_row();
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(
            RichText::new("Average Age and Call Duration by Job Type")
                .size(14.0)
                .strong(),
        );
        ui.label(
            RichText::new(
                "How client age and call duration vary across employment types. \
                 Useful for tailoring marketing campaigns.",
            )
            .size(11.0)
            .color(Color32::GRAY),
        );
        ui.add_space(5.0);

        egui::Grid::new("avg_by_job_table")
            .striped(true)
            .min_col_width(90.0)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Job").strong().size(11.0));
                ui.label(RichText::new("Mean Age").strong().size(11.0));
                ui.label(RichText::new("Mean Duration").strong().size(11.0));
                ui.end_row();

                for (job, means) in &report.avg_age_duration_by_job {
                    ui.label(RichText::new(job).size(11.0));
                    ui.label(RichText::new(format!("{:.2}", means.age)).size(11.0));
                    ui.label(RichText::new(format!("{:.2}", means.duration)).size(11.0));
                    ui.end_row();
                }
            });
    }

    fn metric_card(ui: &mut egui::Ui, label: &str, value: String, caption: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(label).size(12.0).strong());
                ui.label(
                    RichText::new(value)
                        .size(22.0)
                        .strong()
                        .color(CARD_VALUE_COLOR),
                );
                ui.label(RichText::new(caption).size(10.0).color(Color32::GRAY));
            });
    }
}

fn fmt_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    }
}

fn fmt_mean_unit(mean: Option<f64>, unit: &str) -> String {
    match mean {
        Some(value) => format!("{value:.2} {unit}"),
        None => "n/a".to_string(),
    }
}
