//! Composite air-quality index
//!
//! ```text
//! score_i   = min(value_i / hazard_i * 100, 100)     for i in {dust, tvoc, eco2}
//! composite = mean(score_i)
//! tier      = SAFE (< 30) | WARNING (30..60) | HAZARD (>= 60)
//! ```
//!
//! Temperature does not contribute. The tier cut points are their own
//! constants, separate from the per-metric table.
//!
//! A metric missing from the reading is scored as 0. That masks sensor
//! dropout as "safe", so the result lists the missing metrics and a warning
//! is logged; callers should surface `missing` to operators.

use serde::Serialize;

use crate::{
    constants::scoring::{COMPOSITE_BOUNDARIES, COMPOSITE_MAX_SCORE},
    errors::ClassifyResult,
    metric::{Metric, COMPOSITE_METRICS},
    reading::Reading,
    thresholds::ThresholdTable,
    tiering::{BoundaryRule, Severity, Tier, TierScale, COMPOSITE_TIERS},
};

/// Composite tier scale
pub(crate) const COMPOSITE_SCALE: TierScale<'static, Severity> =
    TierScale::from_parts(&COMPOSITE_BOUNDARIES, &COMPOSITE_TIERS, BoundaryRule::LowerInclusive);

/// Composite score with its tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeIndex {
    /// Mean of the capped per-metric scores, in [0, 100]
    pub score: f64,
    /// Gauge tier for `score`
    pub tier: Tier<Severity>,
    /// Per-metric scores, in `COMPOSITE_METRICS` order
    pub components: Vec<(Metric, f64)>,
    /// Metrics absent from the reading and scored as 0
    pub missing: Vec<Metric>,
}

impl CompositeIndex {
    /// Index for "no data at all": score 0, SAFE
    pub fn no_data() -> Self {
        Self {
            score: 0.0,
            tier: COMPOSITE_SCALE.classify(0.0),
            components: Vec::new(),
            missing: COMPOSITE_METRICS.to_vec(),
        }
    }

    /// True when every contributing metric was present
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Score one metric against its hazard boundary, capped at 100
pub fn metric_score(value: f64, hazard: f64) -> f64 {
    (value / hazard * COMPOSITE_MAX_SCORE).min(COMPOSITE_MAX_SCORE)
}

/// Tier a composite score
pub fn composite_tier(score: f64) -> Tier<Severity> {
    COMPOSITE_SCALE.classify(score)
}

/// Composite index for a single (latest) reading
pub fn composite_index(reading: &Reading, table: &ThresholdTable) -> ClassifyResult<CompositeIndex> {
    let mut components = Vec::with_capacity(COMPOSITE_METRICS.len());
    for metric in COMPOSITE_METRICS {
        let hazard = table.boundaries(metric)?.hazard();
        components.push((metric, metric_score(reading.value_or_zero(metric), hazard)));
    }

    let score = components.iter().map(|(_, s)| s).sum::<f64>() / components.len() as f64;
    let missing = reading.values.missing(&COMPOSITE_METRICS);
    if !missing.is_empty() {
        log_warn!(
            "Composite index at {} scored missing metrics as 0: {:?}",
            reading.timestamp,
            missing
        );
    }

    Ok(CompositeIndex { score, tier: composite_tier(score), components, missing })
}

/// Composite index for the latest reading of a sequence; an empty sequence
/// yields `CompositeIndex::no_data()`
pub fn composite_for_latest(readings: &[Reading], table: &ThresholdTable) -> ClassifyResult<CompositeIndex> {
    match readings.last() {
        Some(latest) => composite_index(latest, table),
        None => Ok(CompositeIndex::no_data()),
    }
}
