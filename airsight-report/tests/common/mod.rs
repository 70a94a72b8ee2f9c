//! Common fixtures for report integration tests

#![allow(dead_code)]

use airsight_core::{
    constants::time::{DEVICE_SAMPLE_INTERVAL_S, MS_PER_SECOND},
    Reading, Timestamp,
};

/// 2024-03-05 14:07:09 UTC
pub const NOW: Timestamp = 1_709_647_629_000;

/// Device series ending at `end`, one sample per device interval
pub fn series(end: Timestamp, values: &[(f64, f64, f64, f64)]) -> Vec<Reading> {
    let step = DEVICE_SAMPLE_INTERVAL_S * MS_PER_SECOND;
    let count = values.len() as u64;
    values
        .iter()
        .enumerate()
        .map(|(i, &(dust, temp, tvoc, eco2))| {
            Reading::device(end - (count - 1 - i as u64) * step, dust, temp, tvoc, eco2)
        })
        .collect()
}

/// Constant device series ending at `end`
pub fn steady(count: usize, end: Timestamp, values: (f64, f64, f64, f64)) -> Vec<Reading> {
    series(end, &vec![values; count])
}
