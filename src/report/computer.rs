//! Report Computer Module
//! Derives the summary aggregates the dashboard displays from a loaded
//! dataset.

use std::collections::BTreeMap;

use crate::data::{Dataset, Record, NUMERIC_COLUMNS};

/// Mean age and call duration for one job category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobMeans {
    pub age: f64,
    pub duration: f64,
}

/// Summary aggregates derived from one dataset.
///
/// A pure function of the dataset: recomputing from the same records yields
/// an identical report. Empty subsets surface as `None`, never as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Fraction of all records per outcome label. Sums to 1.0 over the
    /// observed labels; empty for an empty dataset.
    pub subscription_share: BTreeMap<String, f64>,
    /// Mean of each numeric column over subscribed clients. Empty for an
    /// empty dataset; `None` per column when nobody subscribed.
    pub mean_numeric_by_subscribed: BTreeMap<&'static str, Option<f64>>,
    /// Mean call duration over subscribed clients.
    pub avg_call_duration_subscribed: Option<f64>,
    /// Mean age over subscribed clients who are single.
    pub avg_age_unmarried_subscribed: Option<f64>,
    /// Mean age and call duration per job category, over all records.
    /// Keys are exactly the distinct jobs observed.
    pub avg_age_duration_by_job: BTreeMap<String, JobMeans>,
}

/// Compute the full report from a dataset.
pub fn compute_report(dataset: &Dataset) -> Report {
    let records = dataset.records();

    Report {
        subscription_share: subscription_share(records),
        mean_numeric_by_subscribed: mean_numeric_by_subscribed(records),
        avg_call_duration_subscribed: mean(
            records
                .iter()
                .filter(|r| r.is_subscribed())
                .map(|r| r.duration as f64),
        ),
        avg_age_unmarried_subscribed: mean(
            records
                .iter()
                .filter(|r| r.is_subscribed() && r.is_single())
                .map(|r| r.age as f64),
        ),
        avg_age_duration_by_job: job_means(records),
    }
}

/// Group records by a key column and compute the mean of each extractor per
/// group, accumulating sums and counts in a single pass. Groups exist only
/// if at least one record produced them.
pub fn grouped_means(
    records: &[Record],
    key: fn(&Record) -> &str,
    extractors: &[fn(&Record) -> f64],
) -> BTreeMap<String, Vec<f64>> {
    let mut sums: BTreeMap<String, (usize, Vec<f64>)> = BTreeMap::new();

    for record in records {
        let entry = sums
            .entry(key(record).to_string())
            .or_insert_with(|| (0, vec![0.0; extractors.len()]));
        entry.0 += 1;
        for (sum, extract) in entry.1.iter_mut().zip(extractors) {
            *sum += extract(record);
        }
    }

    sums.into_iter()
        .map(|(group, (count, totals))| {
            let means = totals.into_iter().map(|t| t / count as f64).collect();
            (group, means)
        })
        .collect()
}

/// Mean call duration per marital status, feeding the duration chart.
pub fn mean_duration_by_marital(records: &[Record]) -> BTreeMap<String, f64> {
    grouped_means(records, marital_of, &[duration_of])
        .into_iter()
        .map(|(marital, means)| (marital, means[0]))
        .collect()
}

fn subscription_share(records: &[Record]) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.deposit.clone()).or_default() += 1;
    }

    let total = records.len() as f64;
    counts
        .into_iter()
        .map(|(label, count)| (label, count as f64 / total))
        .collect()
}

fn mean_numeric_by_subscribed(records: &[Record]) -> BTreeMap<&'static str, Option<f64>> {
    if records.is_empty() {
        return BTreeMap::new();
    }

    let mut count = 0usize;
    let mut sums = [0.0; NUMERIC_COLUMNS.len()];
    for record in records.iter().filter(|r| r.is_subscribed()) {
        count += 1;
        for (sum, value) in sums.iter_mut().zip(record.numeric_values()) {
            *sum += value;
        }
    }

    NUMERIC_COLUMNS
        .iter()
        .zip(sums)
        .map(|(name, sum)| {
            let mean = (count > 0).then(|| sum / count as f64);
            (*name, mean)
        })
        .collect()
}

fn job_means(records: &[Record]) -> BTreeMap<String, JobMeans> {
    grouped_means(records, job_of, &[age_of, duration_of])
        .into_iter()
        .map(|(job, means)| {
            (
                job,
                JobMeans {
                    age: means[0],
                    duration: means[1],
                },
            )
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut count = 0usize;
    let mut sum = 0.0;
    for value in values {
        count += 1;
        sum += value;
    }
    (count > 0).then(|| sum / count as f64)
}

fn job_of(record: &Record) -> &str {
    &record.job
}

fn marital_of(record: &Record) -> &str {
    &record.marital
}

fn age_of(record: &Record) -> f64 {
    record.age as f64
}

fn duration_of(record: &Record) -> f64 {
    record.duration as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn record(age: i64, job: &str, marital: &str, duration: i64, deposit: &str) -> Record {
        Record {
            age,
            job: job.to_string(),
            marital: marital.to_string(),
            education: "secondary".to_string(),
            default: "no".to_string(),
            balance: 0,
            housing: "no".to_string(),
            loan: "no".to_string(),
            contact: "cellular".to_string(),
            day: 1,
            month: "may".to_string(),
            duration,
            campaign: 1,
            pdays: -1,
            previous: 0,
            poutcome: "unknown".to_string(),
            deposit: deposit.to_string(),
        }
    }

    #[test]
    fn shares_sum_to_one_on_non_empty_data() {
        let dataset = Dataset::new(vec![
            record(30, "admin.", "single", 200, "yes"),
            record(40, "admin.", "married", 100, "no"),
            record(50, "services", "married", 150, "no"),
        ]);

        let report = compute_report(&dataset);
        let total: f64 = report.subscription_share.values().sum();
        assert!((total - 1.0).abs() < TOLERANCE);
        assert!((report.subscription_share["yes"] - 1.0 / 3.0).abs() < TOLERANCE);
        assert!((report.subscription_share["no"] - 2.0 / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn two_record_scenario() {
        let dataset = Dataset::new(vec![
            record(30, "admin.", "single", 200, "yes"),
            record(40, "admin.", "married", 100, "no"),
        ]);

        let report = compute_report(&dataset);

        assert!((report.subscription_share["yes"] - 0.5).abs() < TOLERANCE);
        assert!((report.subscription_share["no"] - 0.5).abs() < TOLERANCE);
        assert_eq!(report.avg_call_duration_subscribed, Some(200.0));
        assert_eq!(report.avg_age_unmarried_subscribed, Some(30.0));

        let admin = &report.avg_age_duration_by_job["admin."];
        assert!((admin.age - 35.0).abs() < TOLERANCE);
        assert!((admin.duration - 150.0).abs() < TOLERANCE);
    }

    #[test]
    fn mean_numeric_matches_an_independent_filtered_mean() {
        let dataset = Dataset::new(vec![
            record(30, "admin.", "single", 200, "yes"),
            record(36, "services", "married", 320, "yes"),
            record(40, "admin.", "married", 100, "no"),
        ]);

        let report = compute_report(&dataset);

        let ages: Vec<f64> = dataset
            .records()
            .iter()
            .filter(|r| r.is_subscribed())
            .map(|r| r.age as f64)
            .collect();
        let expected = ages.iter().sum::<f64>() / ages.len() as f64;

        let age_mean = report.mean_numeric_by_subscribed["age"].unwrap();
        assert!((age_mean - expected).abs() < TOLERANCE);
        let duration_mean = report.mean_numeric_by_subscribed["duration"].unwrap();
        assert!((duration_mean - 260.0).abs() < TOLERANCE);
    }

    #[test]
    fn no_subscribers_yields_sentinels_not_zero() {
        let dataset = Dataset::new(vec![
            record(40, "admin.", "married", 100, "no"),
            record(50, "services", "divorced", 90, "no"),
        ]);

        let report = compute_report(&dataset);

        assert_eq!(report.avg_call_duration_subscribed, None);
        assert_eq!(report.avg_age_unmarried_subscribed, None);
        assert_eq!(
            report.mean_numeric_by_subscribed.len(),
            NUMERIC_COLUMNS.len()
        );
        assert!(report
            .mean_numeric_by_subscribed
            .values()
            .all(|mean| mean.is_none()));
    }

    #[test]
    fn empty_dataset_is_a_valid_input() {
        let report = compute_report(&Dataset::new(Vec::new()));

        assert!(report.subscription_share.is_empty());
        assert!(report.mean_numeric_by_subscribed.is_empty());
        assert_eq!(report.avg_call_duration_subscribed, None);
        assert_eq!(report.avg_age_unmarried_subscribed, None);
        assert!(report.avg_age_duration_by_job.is_empty());
    }

    #[test]
    fn job_keys_are_exactly_the_observed_jobs() {
        let dataset = Dataset::new(vec![
            record(30, "admin.", "single", 200, "yes"),
            record(40, "technician", "married", 100, "no"),
            record(45, "admin.", "married", 120, "no"),
        ]);

        let report = compute_report(&dataset);
        let jobs: Vec<&str> = report
            .avg_age_duration_by_job
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(jobs, ["admin.", "technician"]);
    }

    #[test]
    fn recomputation_is_identical() {
        let dataset = Dataset::new(vec![
            record(30, "admin.", "single", 200, "yes"),
            record(40, "technician", "married", 100, "no"),
            record(58, "retired", "married", 340, "yes"),
        ]);

        assert_eq!(compute_report(&dataset), compute_report(&dataset));
    }

    #[test]
    fn grouped_means_single_pass_matches_per_group_means() {
        let records = vec![
            record(20, "a", "single", 10, "no"),
            record(40, "a", "single", 30, "no"),
            record(60, "b", "single", 50, "no"),
        ];

        let means = grouped_means(&records, job_of, &[age_of, duration_of]);

        assert_eq!(means["a"], vec![30.0, 20.0]);
        assert_eq!(means["b"], vec![60.0, 50.0]);
    }

    #[test]
    fn marital_duration_means_cover_every_status() {
        let records = vec![
            record(30, "admin.", "single", 100, "no"),
            record(40, "admin.", "married", 200, "no"),
            record(50, "admin.", "married", 400, "yes"),
        ];

        let means = mean_duration_by_marital(&records);
        assert_eq!(means.len(), 2);
        assert!((means["single"] - 100.0).abs() < TOLERANCE);
        assert!((means["married"] - 300.0).abs() < TOLERANCE);
    }
}
