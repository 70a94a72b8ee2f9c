//! Classification and Aggregation
//!
//! ## Overview
//!
//! Four related policies run over the same threshold table at different
//! granularities. They intentionally disagree on edge cases and must not be
//! merged:
//!
//! | Policy          | Input                 | Aggregation           | Module      |
//! |-----------------|-----------------------|-----------------------|-------------|
//! | KPI tier        | one value             | none                  | `thresholds`|
//! | Composite index | latest reading        | mean of capped scores | `composite` |
//! | Guidance        | window mean           | none, per metric      | `recommend` |
//! | Verdict         | window means          | worst metric wins     | `verdict`   |
//! | Live log        | latest reading        | per-metric alerts     | `diagnose`  |
//!
//! For example, dust at exactly its hazard boundary with everything else at
//! zero gives a CRITICAL verdict, a composite of 33.3 (WARNING) and a
//! WARNING KPI tier for dust.
//!
//! ## Usage
//!
//! ```rust
//! use airsight_core::{Classifier, Metric, Reading, Severity};
//!
//! let classifier = Classifier::default();
//! let latest = Reading::device(0, 1600.0, 20.0, 50.0, 400.0);
//!
//! assert_eq!(classifier.tier(1600.0, Metric::Dust)?.tier, Severity::Hazard);
//! let gauge = classifier.composite_index(&latest)?;
//! assert_eq!(gauge.tier.tier, Severity::Warning);
//! # Ok::<(), airsight_core::ClassifyError>(())
//! ```
//!
//! All functions are pure: same input, same output, no shared state.

pub mod composite;
pub mod diagnose;
pub mod recommend;
pub mod stats;
pub mod verdict;

pub use composite::{composite_for_latest, composite_index, composite_tier, CompositeIndex};
pub use diagnose::{diagnose, diagnose_latest, DiagnosticLine, LineKind};
pub use recommend::{recommend, recommend_window, Recommendation};
pub use stats::{summarize, window_averages, MetricSummary};
pub use verdict::{overall_status, SystemStatus, Verdict};

use crate::{
    errors::ClassifyResult,
    metric::{Metric, DEVICE_METRICS},
    reading::{MetricSet, Reading},
    thresholds::{ThresholdTable, TierScheme},
    tiering::{AlertLevel, Severity, Tier},
};

/// Bundles the dashboard schemes over one threshold table
#[derive(Debug, Clone)]
pub struct Classifier {
    fine: TierScheme<Severity>,
    guidance: TierScheme<AlertLevel>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ThresholdTable::default())
    }
}

impl Classifier {
    /// Classifier over a custom table
    pub fn new(table: ThresholdTable) -> Self {
        Self {
            fine: TierScheme::fine_with(table.clone()),
            guidance: TierScheme::guidance_with(table),
        }
    }

    pub fn table(&self) -> &ThresholdTable {
        self.fine.table()
    }

    pub fn fine_scheme(&self) -> &TierScheme<Severity> {
        &self.fine
    }

    pub fn guidance_scheme(&self) -> &TierScheme<AlertLevel> {
        &self.guidance
    }

    /// Boundaries for a metric given by name
    pub fn boundaries(&self, name: &str) -> ClassifyResult<(f64, f64, f64)> {
        Ok(self.table().boundaries_for(name)?.as_tuple())
    }

    /// Fine KPI tier for one value
    pub fn tier(&self, value: f64, metric: Metric) -> ClassifyResult<Tier<Severity>> {
        self.fine.tier(value, metric)
    }

    /// Fine KPI tier for one value, metric given by name
    pub fn tier_by_name(&self, value: f64, metric: &str) -> ClassifyResult<Tier<Severity>> {
        self.fine.tier(value, metric.parse()?)
    }

    pub fn composite_index(&self, latest: &Reading) -> ClassifyResult<CompositeIndex> {
        composite_index(latest, self.table())
    }

    pub fn summarize(&self, readings: &[Reading], metric: Metric) -> ClassifyResult<MetricSummary> {
        summarize(readings, metric)
    }

    /// Window averages for the device metrics
    pub fn window_averages(&self, readings: &[Reading]) -> ClassifyResult<MetricSet> {
        window_averages(readings, &DEVICE_METRICS)
    }

    pub fn recommend(&self, average: f64, metric: Metric) -> ClassifyResult<Recommendation> {
        recommend(average, metric, &self.guidance)
    }

    pub fn recommend_window(&self, readings: &[Reading], metric: Metric) -> ClassifyResult<Recommendation> {
        recommend_window(readings, metric, &self.guidance)
    }

    /// Status of a window summary, judged on its maximum
    pub fn window_status(&self, summary: &MetricSummary) -> ClassifyResult<Tier<AlertLevel>> {
        self.guidance.tier(summary.max, summary.metric)
    }

    pub fn overall_status(&self, averages: &MetricSet) -> ClassifyResult<Verdict> {
        overall_status(averages, &self.guidance)
    }

    pub fn diagnose(&self, latest: &Reading) -> ClassifyResult<Vec<DiagnosticLine>> {
        diagnose(latest, &self.fine)
    }
}
