//! Batch statistics over a window of readings
//!
//! Raw average/max/min, no smoothing or outlier rejection. An empty window
//! (or one where the metric never reported) is `EmptyWindow`, never a
//! zero-valued summary.

use serde::Serialize;

use crate::{
    errors::{ClassifyError, ClassifyResult},
    metric::Metric,
    reading::{MetricSet, Reading},
};

/// Average, max and min of one metric over a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    /// Readings that carried this metric
    pub samples: usize,
}

/// Summarise `metric` over `readings`
pub fn summarize(readings: &[Reading], metric: Metric) -> ClassifyResult<MetricSummary> {
    if readings.is_empty() {
        return Err(ClassifyError::EmptyWindow);
    }

    let (sum, max, min, samples) = readings
        .iter()
        .filter_map(|reading| reading.value(metric))
        .fold((0.0, f64::NEG_INFINITY, f64::INFINITY, 0usize), |(sum, max, min, n), v| {
            (sum + v, max.max(v), min.min(v), n + 1)
        });

    if samples == 0 {
        return Err(ClassifyError::EmptyWindow);
    }

    Ok(MetricSummary { metric, average: sum / samples as f64, max, min, samples })
}

/// Per-metric window averages; a metric with no samples is `None`
pub fn window_averages(readings: &[Reading], metrics: &[Metric]) -> ClassifyResult<MetricSet> {
    if readings.is_empty() {
        return Err(ClassifyError::EmptyWindow);
    }

    let mut averages = MetricSet::default();
    for metric in metrics {
        let average = match summarize(readings, *metric) {
            Ok(summary) => Some(summary.average),
            Err(ClassifyError::EmptyWindow) => None,
            Err(other) => return Err(other),
        };
        averages.set(*metric, average);
    }
    Ok(averages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::DEVICE_METRICS;

    fn window() -> Vec<Reading> {
        vec![
            Reading::device(1, 100.0, 20.0, 50.0, 400.0),
            Reading::device(2, 300.0, 24.0, 150.0, 600.0),
            Reading::device(3, 200.0, 22.0, 100.0, 500.0),
        ]
    }

    #[test]
    fn computes_average_max_min() {
        let summary = summarize(&window(), Metric::Dust).unwrap();
        assert_eq!(summary.average, 200.0);
        assert_eq!(summary.max, 300.0);
        assert_eq!(summary.min, 100.0);
        assert_eq!(summary.samples, 3);
    }

    #[test]
    fn empty_window_is_signalled() {
        assert_eq!(summarize(&[], Metric::Dust), Err(ClassifyError::EmptyWindow));
        assert_eq!(window_averages(&[], &DEVICE_METRICS), Err(ClassifyError::EmptyWindow));
    }

    #[test]
    fn skips_readings_without_the_metric() {
        let readings = vec![
            Reading::new(1).with(Metric::Dust, 10.0),
            Reading::new(2).with(Metric::Tvoc, 99.0),
            Reading::new(3).with(Metric::Dust, 30.0),
        ];
        let summary = summarize(&readings, Metric::Dust).unwrap();
        assert_eq!(summary.average, 20.0);
        assert_eq!(summary.samples, 2);
        assert_eq!(summarize(&readings, Metric::Eco2), Err(ClassifyError::EmptyWindow));
    }

    #[test]
    fn averages_mark_silent_metrics_absent() {
        let readings = vec![Reading::new(1).with(Metric::Dust, 10.0)];
        let averages = window_averages(&readings, &DEVICE_METRICS).unwrap();
        assert_eq!(averages.dust, Some(10.0));
        assert_eq!(averages.temp, None);
    }
}
