//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use evc_datagen::generator::DayPart;
use evc_datagen::generator::time_sampler::HourSource;

/// Default seed used across integration tests.
pub const SEED: u64 = 42;

/// Hour source returning the same value for every arrival in every bucket.
pub struct FixedHours(pub f64);

impl HourSource for FixedHours {
    fn sample_hours(&mut self, _part: DayPart, count: usize) -> Vec<f64> {
        vec![self.0; count]
    }
}

/// Hour source returning the bucket's mean hour, so bucket order is visible.
pub struct MeanHours;

impl HourSource for MeanHours {
    fn sample_hours(&mut self, part: DayPart, count: usize) -> Vec<f64> {
        vec![part.mean_hour(); count]
    }
}

/// Output path inside a temporary directory.
pub fn csv_path(dir: &Path) -> PathBuf {
    dir.join("ev_data.csv")
}

/// Reads an exported CSV back as `(date_time, power)` pairs.
pub fn read_rows(path: &Path) -> Vec<(String, u32)> {
    let Ok(mut rdr) = csv::ReaderBuilder::new().from_path(path) else {
        return Vec::new();
    };
    rdr.records()
        .filter_map(Result::ok)
        .filter_map(|rec| Some((rec.get(0)?.to_string(), rec.get(1)?.parse().ok()?)))
        .collect()
}
