//! Static Chart Renderer
//! Renders the dashboard charts to PNG files via plotters, mirroring the
//! interactive versions for export.

use std::path::Path;

use anyhow::Context;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::plotter::{age_histogram, ages_by_job, AGE_BIN_WIDTH};
use crate::data::Dataset;
use crate::report::mean_duration_by_marital;

const SUBSCRIBED: RGBColor = RGBColor(52, 152, 219); // Blue
const DECLINED: RGBColor = RGBColor(231, 76, 60); // Red
const BAR: RGBColor = RGBColor(46, 204, 113); // Green

/// Identifies one of the three dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    AgeDistribution,
    DurationByMarital,
    AgeByJob,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::AgeDistribution,
        ChartKind::DurationByMarital,
        ChartKind::AgeByJob,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::AgeDistribution => "Age Distribution by Subscription Status",
            ChartKind::DurationByMarital => "Average Call Duration by Marital Status",
            ChartKind::AgeByJob => "Age Distribution by Job Type",
        }
    }

    /// Suggested file name for the save dialog.
    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::AgeDistribution => "age_distribution.png",
            ChartKind::DurationByMarital => "avg_call_duration_by_marital.png",
            ChartKind::AgeByJob => "age_by_job.png",
        }
    }
}

/// Render one chart to a PNG file.
pub fn render_chart_png(
    kind: ChartKind,
    dataset: &Dataset,
    path: &Path,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    match kind {
        ChartKind::AgeDistribution => draw_age_distribution(&root, dataset)?,
        ChartKind::DurationByMarital => draw_duration_by_marital(&root, dataset)?,
        ChartKind::AgeByJob => draw_age_by_job(&root, dataset)?,
    }

    root.present()
        .with_context(|| format!("failed to write chart image '{}'", path.display()))?;
    Ok(())
}

fn draw_age_distribution(
    root: &DrawingArea<BitMapBackend, Shift>,
    dataset: &Dataset,
) -> anyhow::Result<()> {
    let bins = age_histogram(dataset.records(), AGE_BIN_WIDTH);
    let x_start = bins.first().map(|b| b.start).unwrap_or(0);
    let x_end = bins.last().map(|b| b.start + AGE_BIN_WIDTH).unwrap_or(1);
    let y_max = bins
        .iter()
        .map(|b| (b.subscribed + b.declined) as i64)
        .max()
        .unwrap_or(1);

    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::AgeDistribution.title(), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_start..x_end, 0i64..y_max + y_max / 10 + 1)?;

    chart
        .configure_mesh()
        .x_desc("Age")
        .y_desc("Clients")
        .draw()?;

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [
                    (bin.start, 0),
                    (bin.start + AGE_BIN_WIDTH, bin.subscribed as i64),
                ],
                SUBSCRIBED.filled(),
            )
        }))?
        .label("yes")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], SUBSCRIBED.filled()));

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [
                    (bin.start, bin.subscribed as i64),
                    (
                        bin.start + AGE_BIN_WIDTH,
                        (bin.subscribed + bin.declined) as i64,
                    ),
                ],
                DECLINED.filled(),
            )
        }))?
        .label("no")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], DECLINED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_duration_by_marital(
    root: &DrawingArea<BitMapBackend, Shift>,
    dataset: &Dataset,
) -> anyhow::Result<()> {
    let means: Vec<(String, f64)> = mean_duration_by_marital(dataset.records())
        .into_iter()
        .collect();
    let n = means.len().max(1) as f64;
    let y_max = means
        .iter()
        .map(|(_, mean)| *mean)
        .fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::DurationByMarital.title(), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..n - 0.5, 0.0..y_max * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(means.len().max(1))
        .x_label_formatter(&|x| {
            let idx = x.round();
            if idx >= 0.0 && (x - idx).abs() < 0.25 && (idx as usize) < means.len() {
                means[idx as usize].0.clone()
            } else {
                String::new()
            }
        })
        .x_desc("Marital Status")
        .y_desc("Avg Duration (seconds)")
        .draw()?;

    chart.draw_series(means.iter().enumerate().map(|(i, (_, mean))| {
        Rectangle::new(
            [(i as f64 - 0.3, 0.0), (i as f64 + 0.3, *mean)],
            BAR.filled(),
        )
    }))?;
    Ok(())
}

fn draw_age_by_job(
    root: &DrawingArea<BitMapBackend, Shift>,
    dataset: &Dataset,
) -> anyhow::Result<()> {
    let by_job: Vec<(String, Vec<f64>)> = ages_by_job(dataset.records()).into_iter().collect();
    let ages = by_job.iter().flat_map(|(_, ages)| ages.iter().copied());
    let (y_min, y_max) = ages.fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    // Quartiles works in f32, so the y axis does too.
    let (y_min, y_max) = if by_job.is_empty() {
        (0f32, 1f32)
    } else {
        ((y_min - 5.0) as f32, (y_max + 5.0) as f32)
    };

    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::AgeByJob.title(), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d(
            (0i32..by_job.len().max(1) as i32).into_segmented(),
            y_min..y_max,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => by_job
                .get(*i as usize)
                .map(|(job, _)| job.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Job")
        .y_desc("Age")
        .draw()?;

    chart.draw_series(by_job.iter().enumerate().map(|(i, (_, ages))| {
        Boxplot::new_vertical(SegmentValue::CenterOf(i as i32), &Quartiles::new(ages))
    }))?;
    Ok(())
}
