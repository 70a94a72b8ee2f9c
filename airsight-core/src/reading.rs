//! Telemetry readings
//!
//! A `Reading` is an immutable sample: a timestamp plus one optional value per
//! metric. A metric the device did not report is `None`, never a silent zero,
//! so sensor dropout stays visible to every consumer.

use serde::{Deserialize, Serialize};

use crate::metric::Metric;
use crate::time::Timestamp;

/// One optional value per metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvoc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
}

impl MetricSet {
    /// Value for a metric, if present
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Dust => self.dust,
            Metric::Temperature => self.temp,
            Metric::Tvoc => self.tvoc,
            Metric::Eco2 => self.eco2,
            Metric::Pm10 => self.pm10,
        }
    }

    /// Set (or clear) the value for a metric
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        let slot = match metric {
            Metric::Dust => &mut self.dust,
            Metric::Temperature => &mut self.temp,
            Metric::Tvoc => &mut self.tvoc,
            Metric::Eco2 => &mut self.eco2,
            Metric::Pm10 => &mut self.pm10,
        };
        *slot = value;
    }

    /// Builder-style setter
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, Some(value));
        self
    }

    /// Metrics from `expected` that have no value
    pub fn missing(&self, expected: &[Metric]) -> Vec<Metric> {
        expected
            .iter()
            .copied()
            .filter(|metric| self.get(*metric).is_none())
            .collect()
    }
}

/// Single telemetry sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: Timestamp,
    #[serde(flatten)]
    pub values: MetricSet,
}

impl Reading {
    /// Empty reading at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp, values: MetricSet::default() }
    }

    /// Reading with all four device metrics present
    pub fn device(timestamp: Timestamp, dust: f64, temp: f64, tvoc: f64, eco2: f64) -> Self {
        Self {
            timestamp,
            values: MetricSet {
                dust: Some(dust),
                temp: Some(temp),
                tvoc: Some(tvoc),
                eco2: Some(eco2),
                pm10: None,
            },
        }
    }

    /// Builder-style setter
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.values.set(metric, Some(value));
        self
    }

    /// Value for a metric, if present
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values.get(metric)
    }

    /// Value for a metric, with absence scored as zero
    ///
    /// Only the composite index uses this; it reports what was missing
    /// alongside its score.
    pub fn value_or_zero(&self, metric: Metric) -> f64 {
        self.value(metric).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::DEVICE_METRICS;

    #[test]
    fn absent_metric_is_none_not_zero() {
        let reading = Reading::new(1000).with(Metric::Dust, 12.0);
        assert_eq!(reading.value(Metric::Dust), Some(12.0));
        assert_eq!(reading.value(Metric::Tvoc), None);
        assert_eq!(reading.value_or_zero(Metric::Tvoc), 0.0);
    }

    #[test]
    fn missing_lists_absent_metrics_in_order() {
        let reading = Reading::new(0).with(Metric::Temperature, 21.0);
        assert_eq!(
            reading.values.missing(&DEVICE_METRICS),
            vec![Metric::Dust, Metric::Tvoc, Metric::Eco2]
        );
    }

    #[test]
    fn flattens_values_in_json() {
        let reading = Reading::device(5, 1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_value(reading).unwrap();
        assert_eq!(json["dust"], 1.0);
        assert_eq!(json["timestamp"], 5);
        assert!(json.get("pm10").is_none());
    }
}
