//! Report module - summary aggregates over the dataset

mod computer;

pub use computer::{
    compute_report, grouped_means, mean_duration_by_marital, JobMeans, Report,
};
