//! Dashboard snapshot
//!
//! Everything the live dashboard draws for one refresh, as serializable data:
//! one KPI card per device metric, the composite gauge and the live log. All
//! three come from the latest reading only.

use airsight_core::{
    classify::{diagnose_latest, DiagnosticLine},
    Classifier, CompositeIndex, Marker, Metric, Reading, Severity, Tier, Timestamp,
    DEVICE_METRICS,
};
use serde::Serialize;

use crate::errors::ReportResult;

/// One KPI card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub metric: Metric,
    pub label: &'static str,
    pub unit: &'static str,
    /// `None` when the sensor did not report
    pub value: Option<f64>,
    pub tier: Option<Tier<Severity>>,
    pub marker: Marker,
}

/// Composite gauge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub score: f64,
    pub tier: Tier<Severity>,
    /// Metrics scored as 0 because they were absent
    pub missing: Vec<Metric>,
}

impl From<CompositeIndex> for Gauge {
    fn from(index: CompositeIndex) -> Self {
        Self { score: index.score, tier: index.tier, missing: index.missing }
    }
}

/// One dashboard refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Timestamp of the latest reading, if any
    pub latest_at: Option<Timestamp>,
    pub kpis: Vec<KpiCard>,
    pub gauge: Option<Gauge>,
    pub diagnostics: Vec<DiagnosticLine>,
}

impl DashboardSnapshot {
    /// Snapshot of the latest reading in `readings`
    pub fn build(classifier: &Classifier, readings: &[Reading]) -> ReportResult<Self> {
        let diagnostics = diagnose_latest(readings, classifier.fine_scheme())?;

        let Some(latest) = readings.last() else {
            return Ok(Self { latest_at: None, kpis: Vec::new(), gauge: None, diagnostics });
        };

        let kpis = DEVICE_METRICS
            .iter()
            .map(|&metric| -> ReportResult<KpiCard> {
                let value = latest.value(metric);
                let tier = value.map(|v| classifier.tier(v, metric)).transpose()?;
                Ok(KpiCard {
                    metric,
                    label: metric.display_name(),
                    unit: metric.unit(),
                    value,
                    tier,
                    marker: tier.map_or(Marker::Unknown, |t| t.marker),
                })
            })
            .collect::<ReportResult<Vec<_>>>()?;

        let gauge: Gauge = classifier.composite_index(latest)?.into();

        Ok(Self { latest_at: Some(latest.timestamp), kpis, gauge: Some(gauge), diagnostics })
    }

    pub fn is_empty(&self) -> bool {
        self.latest_at.is_none()
    }

    /// JSON for the dashboard front end
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
