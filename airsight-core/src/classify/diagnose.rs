//! Live diagnostic log for the latest reading
//!
//! Applies the fine scheme to each metric of one reading. Each metric in
//! WARNING or HAZARD contributes a fixed finding line followed by its
//! recommended action. A metric absent from the reading contributes a NO
//! DATA line. When nothing triggers, the log is a single nominal message.

use serde::Serialize;

use crate::{
    errors::ClassifyResult,
    metric::Metric,
    reading::Reading,
    thresholds::TierScheme,
    tiering::{Marker, Severity},
};

/// Evaluation order of the live log
pub const DIAGNOSTIC_ORDER: [Metric; 4] = [Metric::Dust, Metric::Tvoc, Metric::Eco2, Metric::Temperature];

/// Message shown before any telemetry has arrived
pub const AWAITING_TELEMETRY: &str = "INITIALIZING SENSOR ARRAY... Awaiting telemetry link.";

/// Message shown when no metric triggers
pub const SYSTEM_NOMINAL: &str =
    "SYSTEM NOMINAL: All parameters within acceptable ranges. No corrective actions required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Finding,
    Action,
    Status,
}

/// One line of the live log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticLine {
    pub kind: LineKind,
    pub marker: Marker,
    pub text: String,
}

impl DiagnosticLine {
    fn status(marker: Marker, text: &str) -> Self {
        Self { kind: LineKind::Status, marker, text: text.to_string() }
    }

    /// The single nominal message
    pub fn nominal() -> Self {
        Self::status(Marker::Clear, SYSTEM_NOMINAL)
    }

    /// The pre-telemetry message
    pub fn awaiting() -> Self {
        Self::status(Marker::Unknown, AWAITING_TELEMETRY)
    }
}

struct Alert {
    metric: Metric,
    severity: Severity,
    finding: &'static str,
    action: &'static str,
}

const ALERTS: &[Alert] = &[
    Alert {
        metric: Metric::Dust,
        severity: Severity::Hazard,
        finding: "CRITICAL: Particulate Matter (PM2.5) exceeds regulatory limits",
        action: "RECOMMENDED ACTION: Activate emergency filtration systems and notify environmental authorities",
    },
    Alert {
        metric: Metric::Dust,
        severity: Severity::Warning,
        finding: "WARNING: Elevated dust levels detected",
        action: "RECOMMENDED ACTION: Inspect filtration unit B",
    },
    Alert {
        metric: Metric::Tvoc,
        severity: Severity::Hazard,
        finding: "CRITICAL: Total Volatile Organic Compounds at hazardous levels",
        action: "RECOMMENDED ACTION: Evacuate Zone 3, engage ventilation protocol",
    },
    Alert {
        metric: Metric::Tvoc,
        severity: Severity::Warning,
        finding: "WARNING: TVOC approaching safety limits",
        action: "RECOMMENDED ACTION: Increase outdoor air ventilation",
    },
    Alert {
        metric: Metric::Eco2,
        severity: Severity::Hazard,
        finding: "CRITICAL: CO₂ concentration critical",
        action: "RECOMMENDED ACTION: Increase air circulation immediately",
    },
    Alert {
        metric: Metric::Eco2,
        severity: Severity::Warning,
        finding: "WARNING: CO₂ concentration elevated",
        action: "RECOMMENDED ACTION: Optimize HVAC for better air turnover",
    },
    Alert {
        metric: Metric::Temperature,
        severity: Severity::Hazard,
        finding: "CRITICAL: Thermal conditions exceed operational limits",
        action: "RECOMMENDED ACTION: Reduce heat-generating processes",
    },
    Alert {
        metric: Metric::Temperature,
        severity: Severity::Warning,
        finding: "WARNING: Temperature above comfort range",
        action: "RECOMMENDED ACTION: Optimize HVAC settings for better cooling",
    },
];

/// Alert lines for the latest reading
pub fn diagnose(reading: &Reading, scheme: &TierScheme<Severity>) -> ClassifyResult<Vec<DiagnosticLine>> {
    let mut lines = Vec::new();

    for metric in DIAGNOSTIC_ORDER {
        let Some(value) = reading.value(metric) else {
            lines.push(DiagnosticLine {
                kind: LineKind::Finding,
                marker: Marker::Unknown,
                text: format!("NO DATA: {} sensor not reporting", metric.display_name()),
            });
            continue;
        };

        let tier = scheme.tier(value, metric)?;
        if let Some(alert) = ALERTS.iter().find(|a| a.metric == metric && a.severity == tier.tier) {
            lines.push(DiagnosticLine {
                kind: LineKind::Finding,
                marker: tier.marker,
                text: alert.finding.to_string(),
            });
            lines.push(DiagnosticLine {
                kind: LineKind::Action,
                marker: tier.marker,
                text: alert.action.to_string(),
            });
        }
    }

    if lines.is_empty() {
        lines.push(DiagnosticLine::nominal());
    }
    Ok(lines)
}

/// Alert lines for the latest reading of a sequence; an empty sequence
/// yields the awaiting-telemetry message
pub fn diagnose_latest(readings: &[Reading], scheme: &TierScheme<Severity>) -> ClassifyResult<Vec<DiagnosticLine>> {
    match readings.last() {
        Some(latest) => diagnose(latest, scheme),
        None => Ok(vec![DiagnosticLine::awaiting()]),
    }
}
