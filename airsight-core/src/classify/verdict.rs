//! Overall system-health verdict
//!
//! Worst-metric-wins escalation over window averages:
//!
//! ```text
//! any average >= hazard   -> CRITICAL
//! any average >= warning  -> WARNING
//! any average >= safe     -> MODERATE
//! otherwise               -> OPTIMAL
//! ```
//!
//! This is a max, not a mean. Dust at its hazard boundary with the rest at
//! zero is CRITICAL here while the composite index reads 33.3 (WARNING).
//! Temperature is not part of the composite, so a hazardous temperature alone
//! is CRITICAL here and SAFE there.
//!
//! Missing averages never soften a verdict, but they do block OPTIMAL: with
//! sensors silent and nothing escalated, the status is UNKNOWN.

use serde::Serialize;

use crate::{
    errors::ClassifyResult,
    metric::{Metric, DEVICE_METRICS},
    reading::MetricSet,
    thresholds::TierScheme,
    tiering::{AlertLevel, Marker},
};

/// System-wide status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    Optimal,
    Moderate,
    Warning,
    Critical,
    /// Nothing escalated, but one or more sensors produced no data
    Unknown,
}

impl SystemStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            SystemStatus::Optimal => "OPTIMAL",
            SystemStatus::Moderate => "MODERATE",
            SystemStatus::Warning => "WARNING",
            SystemStatus::Critical => "CRITICAL",
            SystemStatus::Unknown => "UNKNOWN",
        }
    }

    pub const fn marker(&self) -> Marker {
        match self {
            SystemStatus::Optimal => Marker::Clear,
            SystemStatus::Moderate => Marker::Elevated,
            SystemStatus::Warning => Marker::Warning,
            SystemStatus::Critical => Marker::Critical,
            SystemStatus::Unknown => Marker::Unknown,
        }
    }

    /// Priority line shown under the status
    pub const fn priority(&self) -> &'static str {
        match self {
            SystemStatus::Optimal => "MAINTAIN CURRENT PROTOCOLS",
            SystemStatus::Moderate => "ROUTINE MAINTENANCE AND OBSERVATION",
            SystemStatus::Warning => "SCHEDULE CORRECTIVE ACTIONS WITHIN 24 HOURS",
            SystemStatus::Critical => "IMMEDIATE INTERVENTION REQUIRED",
            SystemStatus::Unknown => "VERIFY SENSOR CONNECTIVITY",
        }
    }

    fn from_level(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Normal => SystemStatus::Optimal,
            AlertLevel::Moderate => SystemStatus::Moderate,
            AlertLevel::Warning => SystemStatus::Warning,
            AlertLevel::Critical => SystemStatus::Critical,
        }
    }
}

/// Escalated verdict across metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub status: SystemStatus,
    /// Metrics whose average is at or above hazard
    pub critical_count: usize,
    /// Metrics with no average
    pub missing: Vec<Metric>,
}

impl Verdict {
    /// `SYSTEM STATUS: ...` line
    pub fn headline(&self) -> String {
        let detail = match self.status {
            SystemStatus::Critical => {
                format!("{} parameter(s) in danger zone", self.critical_count)
            }
            SystemStatus::Warning => "Proactive measures recommended".to_string(),
            SystemStatus::Moderate => "Monitoring advised".to_string(),
            SystemStatus::Optimal => "All parameters within safe limits".to_string(),
            SystemStatus::Unknown => {
                let names: Vec<&str> = self.missing.iter().map(Metric::name).collect();
                format!("Sensor data incomplete: {}", names.join(", "))
            }
        };
        format!("SYSTEM STATUS: {} ({})", self.status.label(), detail)
    }

    /// `PRIORITY: ...` line
    pub fn priority_text(&self) -> String {
        format!("PRIORITY: {}", self.status.priority())
    }
}

/// Escalate per-metric window averages into one verdict
pub fn overall_status(averages: &MetricSet, scheme: &TierScheme<AlertLevel>) -> ClassifyResult<Verdict> {
    let mut worst = AlertLevel::Normal;
    let mut critical_count = 0;
    let mut missing = Vec::new();

    for metric in DEVICE_METRICS {
        let Some(average) = averages.get(metric) else {
            missing.push(metric);
            continue;
        };
        let level = scheme.tier(average, metric)?.tier;
        if level == AlertLevel::Critical {
            critical_count += 1;
        }
        worst = worst.max(level);
    }

    let status = match SystemStatus::from_level(worst) {
        SystemStatus::Optimal if !missing.is_empty() => {
            log_warn!("Verdict withheld, no data for {:?}", missing);
            SystemStatus::Unknown
        }
        status => status,
    };
    log_debug!("Verdict {} ({} critical)", status.label(), critical_count);

    Ok(Verdict { status, critical_count, missing })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages(dust: f64, temp: f64, tvoc: f64, eco2: f64) -> MetricSet {
        MetricSet { dust: Some(dust), temp: Some(temp), tvoc: Some(tvoc), eco2: Some(eco2), pm10: None }
    }

    #[test]
    fn warning_when_no_metric_reaches_hazard() {
        let verdict = overall_status(&averages(1200.0, 22.0, 100.0, 500.0), &TierScheme::guidance()).unwrap();
        assert_eq!(verdict.status, SystemStatus::Warning);
        assert_eq!(verdict.critical_count, 0);
        assert_eq!(verdict.priority_text(), "PRIORITY: SCHEDULE CORRECTIVE ACTIONS WITHIN 24 HOURS");
    }

    #[test]
    fn counts_every_critical_metric() {
        let verdict = overall_status(&averages(1500.0, 40.0, 0.0, 0.0), &TierScheme::guidance()).unwrap();
        assert_eq!(verdict.status, SystemStatus::Critical);
        assert_eq!(verdict.critical_count, 2);
        assert_eq!(verdict.headline(), "SYSTEM STATUS: CRITICAL (2 parameter(s) in danger zone)");
    }

    #[test]
    fn moderate_and_optimal() {
        let scheme = TierScheme::guidance();
        assert_eq!(
            overall_status(&averages(0.0, 25.0, 0.0, 0.0), &scheme).unwrap().status,
            SystemStatus::Moderate
        );
        assert_eq!(
            overall_status(&averages(10.0, 20.0, 10.0, 400.0), &scheme).unwrap().status,
            SystemStatus::Optimal
        );
    }

    #[test]
    fn missing_metric_blocks_optimal_only() {
        let scheme = TierScheme::guidance();
        let quiet = MetricSet { dust: Some(10.0), ..MetricSet::default() };
        let verdict = overall_status(&quiet, &scheme).unwrap();
        assert_eq!(verdict.status, SystemStatus::Unknown);
        assert_eq!(verdict.missing, vec![Metric::Temperature, Metric::Tvoc, Metric::Eco2]);
        assert_eq!(
            verdict.headline(),
            "SYSTEM STATUS: UNKNOWN (Sensor data incomplete: temp, tvoc, eco2)"
        );

        let hot = MetricSet { temp: Some(36.0), ..MetricSet::default() };
        assert_eq!(overall_status(&hot, &scheme).unwrap().status, SystemStatus::Critical);
    }
}
