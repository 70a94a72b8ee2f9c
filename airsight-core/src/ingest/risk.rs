//! Risk classification at ingestion
//!
//! Two schemes run here, both as configurations of the shared tier scale:
//!
//! - **Device risk score**: each metric earns one point per ingestion
//!   boundary it strictly exceeds (0..=3). Points are summed into a 0..=12
//!   score and the score is tiered at 2/5/8 (at-or-above).
//! - **Ambient particulate**: a single PM2.5 value tiered at 30/60/90
//!   (at-or-below stays in the lower tier).

use serde::Serialize;

use crate::{
    constants::scoring::INGEST_SCORE_BOUNDARIES,
    errors::{ClassifyError, ClassifyResult},
    metric::{Metric, DEVICE_METRICS},
    reading::Reading,
    thresholds::TierScheme,
    tiering::{BoundaryRule, RiskLevel, Tier, TierScale, INGEST_TIERS},
};

use super::validator::check_value;

/// Overall score scale
const SCORE_SCALE: TierScale<'static, RiskLevel> =
    TierScale::from_parts(&INGEST_SCORE_BOUNDARIES, &INGEST_TIERS, BoundaryRule::LowerInclusive);

/// Alert used when the overall risk is low
pub const AIR_QUALITY_GOOD: &str = "Air quality is good";

/// Alert separator
pub const ALERT_SEPARATOR: &str = " | ";

/// `(moderate, high, critical)` alert texts per metric
fn alert_text(metric: Metric, level: RiskLevel) -> Option<&'static str> {
    let texts = match metric {
        Metric::Dust => [
            "Moderate dust levels",
            "High dust levels detected",
            "CRITICAL: Very high dust concentration!",
        ],
        Metric::Temperature => [
            "Elevated temperature",
            "High temperature detected",
            "CRITICAL: Temperature too high!",
        ],
        Metric::Tvoc => [
            "Moderate TVOC levels",
            "High TVOC detected",
            "CRITICAL: Very high TVOC levels!",
        ],
        Metric::Eco2 => [
            "Moderate CO2 levels",
            "High CO2 detected",
            "CRITICAL: Very high CO2 levels!",
        ],
        Metric::Pm10 => return None,
    };
    match level {
        RiskLevel::Moderate => Some(texts[0]),
        RiskLevel::High => Some(texts[1]),
        RiskLevel::Critical | RiskLevel::VeryHigh => Some(texts[2]),
        RiskLevel::Low => None,
    }
}

/// One metric's contribution to the device risk score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricAlert {
    pub metric: Metric,
    pub level: Tier<RiskLevel>,
    /// Points contributed, 0..=3
    pub points: u32,
    pub text: &'static str,
}

/// Device risk assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestionRisk {
    pub level: Tier<RiskLevel>,
    /// Sum of per-metric points
    pub score: u32,
    /// Combined alert message
    pub alert: String,
    /// Per-metric alerts, in report order
    pub alerts: Vec<MetricAlert>,
}

/// Score a device reading; all four device metrics must be present
pub fn score_ingestion(reading: &Reading) -> ClassifyResult<IngestionRisk> {
    let scheme = TierScheme::ingestion();
    let mut score = 0u32;
    let mut alerts = Vec::new();

    for metric in DEVICE_METRICS {
        let value = reading
            .value(metric)
            .ok_or(ClassifyError::MissingField { field: metric.name() })?;
        check_value(metric, value)?;

        let level = scheme.tier(value, metric)?;
        let points = level.rank as u32;
        score += points;
        if let Some(text) = alert_text(metric, level.tier) {
            alerts.push(MetricAlert { metric, level, points, text });
        }
    }

    let level = SCORE_SCALE.classify(f64::from(score));
    let alert = match level.tier {
        RiskLevel::Low => AIR_QUALITY_GOOD.to_string(),
        _ => alerts.iter().map(|a| a.text).collect::<Vec<_>>().join(ALERT_SEPARATOR),
    };
    if level.tier >= RiskLevel::High {
        log_warn!("Ingestion risk {} (score {}) at {}", level.tier.name(), score, reading.timestamp);
    }

    Ok(IngestionRisk { level, score, alert, alerts })
}

/// Ambient particulate assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoarseRisk {
    pub level: Tier<RiskLevel>,
    pub alert: &'static str,
}

/// Tier an outdoor PM2.5 concentration
pub fn classify_pm25(value: f64) -> ClassifyResult<CoarseRisk> {
    check_value(Metric::Dust, value)?;
    let level = TierScheme::coarse().tier(value, Metric::Dust)?;
    let alert = match level.tier {
        RiskLevel::Low => "Air quality is good.",
        RiskLevel::Moderate => "Mild pollution. Sensitive groups should be cautious.",
        RiskLevel::High => "Unhealthy for sensitive groups.",
        RiskLevel::VeryHigh | RiskLevel::Critical => "Unhealthy. Avoid prolonged exposure.",
    };
    Ok(CoarseRisk { level, alert })
}
