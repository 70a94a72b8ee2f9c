//! Common test utilities for integration tests
//!
//! This module provides:
//! - A deterministic telemetry generator
//! - Named scenarios for the edge cases the classifiers disagree on

#![allow(dead_code)]

use airsight_core::{
    constants::time::{DEVICE_SAMPLE_INTERVAL_S, MS_PER_SECOND},
    Metric, Reading, Timestamp,
};

/// 2024-03-05 14:07:09 UTC
pub const NOW: Timestamp = 1_709_647_629_000;

/// Deterministic telemetry generator
pub struct TelemetryGenerator {
    seed: u32,
    timestamp: Timestamp,
}

impl TelemetryGenerator {
    pub fn new(start: Timestamp) -> Self {
        Self { seed: 42, timestamp: start }
    }

    /// Linear congruential generator, [0, 1)
    fn random_float(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        f64::from((self.seed / 65_536) % 32_768) / 32_768.0
    }

    fn jitter(&mut self, base: f64, spread: f64) -> f64 {
        (base + (self.random_float() * 2.0 - 1.0) * spread).max(0.0)
    }

    /// One device sample every five seconds around the given centre values
    pub fn series(&mut self, count: usize, centre: [f64; 4], spread: f64) -> Vec<Reading> {
        (0..count)
            .map(|_| {
                let reading = Reading::device(
                    self.timestamp,
                    self.jitter(centre[0], centre[0] * spread),
                    self.jitter(centre[1], centre[1] * spread),
                    self.jitter(centre[2], centre[2] * spread),
                    self.jitter(centre[3], centre[3] * spread),
                );
                self.timestamp += DEVICE_SAMPLE_INTERVAL_S * MS_PER_SECOND;
                reading
            })
            .collect()
    }
}

/// Constant device series ending at `end`
pub fn steady(count: usize, end: Timestamp, dust: f64, temp: f64, tvoc: f64, eco2: f64) -> Vec<Reading> {
    let step = DEVICE_SAMPLE_INTERVAL_S * MS_PER_SECOND;
    (0..count as u64)
        .rev()
        .map(|i| Reading::device(end - i * step, dust, temp, tvoc, eco2))
        .collect()
}

/// Named scenarios
pub mod scenarios {
    use super::*;

    /// Clean office air
    pub fn clean_office() -> Reading {
        Reading::device(NOW, 120.0, 22.0, 60.0, 520.0)
    }

    /// Grinding shop with a dust spike
    pub fn dust_spike() -> Reading {
        Reading::device(NOW, 1600.0, 20.0, 50.0, 400.0)
    }

    /// Heat stress with otherwise clean air
    pub fn heat_only() -> Reading {
        Reading::device(NOW, 0.0, 35.0, 0.0, 0.0)
    }

    /// Temperature probe disconnected
    pub fn temperature_dropout() -> Reading {
        Reading::new(NOW)
            .with(Metric::Dust, 80.0)
            .with(Metric::Tvoc, 40.0)
            .with(Metric::Eco2, 450.0)
    }
}
