//! Chart Plotter Module
//! Creates the dashboard's interactive visualizations using egui_plot.

use std::collections::BTreeMap;

use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot};

use crate::data::{Dataset, Record};
use crate::report::mean_duration_by_marital;

/// Color for subscribed clients
pub const SUBSCRIBED_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
/// Color for clients who declined the offer
pub const DECLINED_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Age histogram bin width in years.
pub const AGE_BIN_WIDTH: i64 = 5;

const CHART_HEIGHT: f32 = 320.0;

/// One age histogram bin covering [start, start + width), split by outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBin {
    pub start: i64,
    pub subscribed: usize,
    pub declined: usize,
}

/// Five-number summary backing one box in the job boxplot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
}

/// Bucket ages into fixed-width bins aligned to multiples of `bin_width`,
/// counting subscribed and declined clients separately.
pub fn age_histogram(records: &[Record], bin_width: i64) -> Vec<AgeBin> {
    if records.is_empty() {
        return Vec::new();
    }

    let (min, max) = records.iter().fold((i64::MAX, i64::MIN), |(lo, hi), r| {
        (lo.min(r.age), hi.max(r.age))
    });
    let first = min.div_euclid(bin_width) * bin_width;
    let count = ((max - first) / bin_width + 1) as usize;

    let mut bins: Vec<AgeBin> = (0..count)
        .map(|i| AgeBin {
            start: first + i as i64 * bin_width,
            subscribed: 0,
            declined: 0,
        })
        .collect();

    for record in records {
        let slot = ((record.age - first) / bin_width) as usize;
        if let Some(bin) = bins.get_mut(slot) {
            if record.is_subscribed() {
                bin.subscribed += 1;
            } else {
                bin.declined += 1;
            }
        }
    }

    bins
}

/// Quartiles with IQR whiskers, index-based like the boxplot display expects.
pub fn five_number_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let q1 = sorted[n / 4];
    let median = sorted[n / 2];
    let q3 = sorted[3 * n / 4];
    let iqr = q3 - q1;
    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= q1 - 1.5 * iqr)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= q3 + 1.5 * iqr)
        .unwrap_or(q3);

    Some(BoxSummary {
        whisker_low,
        q1,
        median,
        q3,
        whisker_high,
    })
}

/// Ages grouped by job category, for the job boxplot.
pub fn ages_by_job(records: &[Record]) -> BTreeMap<String, Vec<f64>> {
    let mut by_job: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_job
            .entry(record.job.clone())
            .or_default()
            .push(record.age as f64);
    }
    by_job
}

/// Draws the three dashboard charts from the raw dataset.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Stacked histogram: age distribution split by subscription outcome.
    pub fn draw_age_distribution(ui: &mut egui::Ui, dataset: &Dataset) {
        let bins = age_histogram(dataset.records(), AGE_BIN_WIDTH);
        let width = AGE_BIN_WIDTH as f64;

        let subscribed: Vec<Bar> = bins
            .iter()
            .map(|bin| {
                Bar::new(bin.start as f64 + width / 2.0, bin.subscribed as f64).width(width * 0.95)
            })
            .collect();
        let declined: Vec<Bar> = bins
            .iter()
            .map(|bin| {
                Bar::new(bin.start as f64 + width / 2.0, bin.declined as f64).width(width * 0.95)
            })
            .collect();

        let subscribed_chart = BarChart::new(subscribed)
            .color(SUBSCRIBED_COLOR)
            .name("yes");
        let declined_chart = BarChart::new(declined)
            .color(DECLINED_COLOR)
            .name("no")
            .stack_on(&[&subscribed_chart]);

        Plot::new("age_distribution")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Age")
            .y_axis_label("Clients")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(subscribed_chart);
                plot_ui.bar_chart(declined_chart);
            });
    }

    /// Bar chart: average call duration per marital status.
    pub fn draw_duration_by_marital(ui: &mut egui::Ui, dataset: &Dataset) {
        let means: Vec<(String, f64)> = mean_duration_by_marital(dataset.records())
            .into_iter()
            .collect();

        let bars: Vec<Bar> = means
            .iter()
            .enumerate()
            .map(|(i, (_, mean))| {
                Bar::new(i as f64, *mean)
                    .width(0.6)
                    .fill(PALETTE[i % PALETTE.len()])
            })
            .collect();

        let labels: Vec<String> = means.iter().map(|(status, _)| status.clone()).collect();

        Plot::new("duration_by_marital")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Marital Status")
            .y_axis_label("Avg Duration (seconds)")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Boxplot: age distribution per job category.
    pub fn draw_age_by_job(ui: &mut egui::Ui, dataset: &Dataset) {
        let by_job = ages_by_job(dataset.records());
        let labels: Vec<String> = by_job.keys().cloned().collect();

        Plot::new("age_by_job")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Job")
            .y_axis_label("Age")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, (job, ages)) in by_job.iter().enumerate() {
                    let Some(summary) = five_number_summary(ages) else {
                        continue;
                    };

                    let color = PALETTE[i % PALETTE.len()];
                    let box_elem = BoxElem::new(
                        i as f64,
                        BoxSpread::new(
                            summary.whisker_low,
                            summary.q1,
                            summary.median,
                            summary.q3,
                            summary.whisker_high,
                        ),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color));

                    plot_ui.box_plot(BoxPlot::new(vec![box_elem]).name(job));
                }
            });
    }
}
