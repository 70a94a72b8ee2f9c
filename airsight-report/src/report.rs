//! Diagnostic report assembly
//!
//! ## Section Order
//!
//! ```text
//! EXECUTIVE SUMMARY                 period, sample count, current index
//! STATISTICAL OVERVIEW              avg/max/min per metric, status from max
//! RECOMMENDATIONS                   guidance from the window mean per metric
//! OVERALL SYSTEM HEALTH ASSESSMENT  worst-metric verdict and priority
//! GENERAL RECOMMENDATIONS ...       fixed list
//! footer                            generation time and platform line
//! ```
//!
//! The report is built once as data (`DiagnosticReport`) and rendered to
//! plain text for an external PDF renderer. Metric order is fixed:
//! particulate, temperature, volatile compounds, CO2.
//!
//! A window with no readings is an error, not an all-zero report. A metric
//! that never reported inside the window gets a "no data" row instead of
//! statistics or guidance.

use airsight_core::{
    constants::time::DEVICE_SAMPLE_INTERVAL_S, format_timestamp, AlertLevel, Classifier,
    ClassifyError, CompositeIndex, Marker, Metric, MetricSet, MetricSummary, Reading,
    Recommendation, Tier, TimeSource, TimeWindow, Timestamp, Verdict, DEVICE_METRICS,
};
use serde::Serialize;

use crate::{errors::ReportResult, render::MarkerStyle};

/// Width of section rules
pub const RULE_WIDTH: usize = 80;

/// Platform line in the footer
pub const PLATFORM_LINE: &str = "AirSight Systems - Industrial Emissions Monitoring Platform";

/// Line shown for a metric with no samples in the window
pub const NO_DATA_LINE: &str = "No data for this period";

/// Fixed closing guidance
pub const GENERAL_GUIDANCE: [&str; 8] = [
    "Regular HVAC Maintenance: Clean filters monthly, service systems quarterly",
    "Source Control: Minimize pollutant generation at the source",
    "Ventilation Strategy: Ensure adequate fresh air intake (ASHRAE standards)",
    "Air Purification: Consider HEPA + activated carbon filtration",
    "Monitoring: Continue real-time tracking and trend analysis",
    "Occupant Education: Train staff on air quality impact and best practices",
    "Green Solutions: Introduce air-purifying plants, eco-friendly materials",
    "Building Envelope: Seal leaks, improve insulation to prevent infiltration",
];

/// What to report on and when
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    pub window: TimeWindow,
    /// End of the window and the footer time
    pub generated_at: Timestamp,
}

impl ReportRequest {
    pub fn new(window: TimeWindow, generated_at: Timestamp) -> Self {
        Self { window, generated_at }
    }

    /// Request ending at the current time of `clock`
    pub fn now(window: TimeWindow, clock: &impl TimeSource) -> Self {
        Self::new(window, clock.now())
    }

    /// Readings from `history` that fall inside the window
    pub fn select(&self, history: &[Reading]) -> Vec<Reading> {
        self.window.filter(history, self.generated_at)
    }
}

/// One statistical overview row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewRow {
    pub metric: Metric,
    /// `None` when the metric never reported in the window
    pub summary: Option<MetricSummary>,
    /// Tier of the window maximum
    pub status: Option<Tier<AlertLevel>>,
}

/// Guidance for one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricGuidance {
    pub metric: Metric,
    pub recommendation: Option<Recommendation>,
}

/// Fully assembled report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub request: ReportRequest,
    pub total_readings: usize,
    /// Composite index of the latest reading in the window
    pub current_index: CompositeIndex,
    pub overview: Vec<OverviewRow>,
    pub guidance: Vec<MetricGuidance>,
    pub verdict: Verdict,
}

fn optional<T>(result: Result<T, ClassifyError>) -> Result<Option<T>, ClassifyError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ClassifyError::EmptyWindow) => Ok(None),
        Err(other) => Err(other),
    }
}

impl DiagnosticReport {
    /// Assemble a report over `readings`, already restricted to the window
    pub fn build(
        classifier: &Classifier,
        request: ReportRequest,
        readings: &[Reading],
    ) -> ReportResult<Self> {
        let latest = readings.last().ok_or(ClassifyError::EmptyWindow)?;
        let current_index = classifier.composite_index(latest)?;

        let mut overview = Vec::with_capacity(DEVICE_METRICS.len());
        let mut guidance = Vec::with_capacity(DEVICE_METRICS.len());
        let mut averages = MetricSet::default();

        for metric in DEVICE_METRICS {
            let summary = optional(classifier.summarize(readings, metric))?;
            let status = summary
                .as_ref()
                .map(|s| classifier.window_status(s))
                .transpose()?;
            let recommendation = summary
                .as_ref()
                .map(|s| classifier.recommend(s.average, metric))
                .transpose()?;

            if summary.is_none() {
                log_warn!("No {} samples in {}", metric, request.window);
            }
            averages.set(metric, summary.as_ref().map(|s| s.average));
            overview.push(OverviewRow { metric, summary, status });
            guidance.push(MetricGuidance { metric, recommendation });
        }

        let verdict = classifier.overall_status(&averages)?;
        log_info!(
            "Report over {} ({} readings): {}",
            request.window,
            readings.len(),
            verdict.status.label()
        );

        Ok(Self {
            request,
            total_readings: readings.len(),
            current_index,
            overview,
            guidance,
            verdict,
        })
    }

    /// Filter `history` to the request window, then assemble
    pub fn from_history(
        classifier: &Classifier,
        request: ReportRequest,
        history: &[Reading],
    ) -> ReportResult<Self> {
        let readings = request.select(history);
        log_debug!("{} of {} readings fall in {}", readings.len(), history.len(), request.window);
        Self::build(classifier, request, &readings)
    }

    /// JSON export
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text report
    pub fn render_text(&self, style: &dyn MarkerStyle) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out: Vec<String> = Vec::new();

        out.push("EXECUTIVE SUMMARY".into());
        out.push(rule.clone());
        out.push(format!("Monitoring Period: {}", self.request.window.label()));
        out.push(format!("Total Readings Analyzed: {}", self.total_readings));
        out.push(format!(
            "Data Collection Interval: Continuous ({DEVICE_SAMPLE_INTERVAL_S}-second intervals)"
        ));
        out.push(format!(
            "Current Air Quality Index: {:.2} ({})",
            self.current_index.score,
            self.current_index.tier.label()
        ));
        if !self.current_index.missing.is_empty() {
            let names: Vec<&str> = self.current_index.missing.iter().map(Metric::name).collect();
            out.push(format!("Index computed without: {}", names.join(", ")));
        }
        out.push(String::new());

        out.push("STATISTICAL OVERVIEW".into());
        out.push(rule.clone());
        for row in &self.overview {
            let metric = row.metric;
            match (&row.summary, &row.status) {
                (Some(summary), Some(status)) => {
                    out.push(format!("{} {}:", style.marker(status.marker), metric.display_name()));
                    out.push(format!("   Average: {:.2} {}", summary.average, metric.unit()));
                    out.push(format!("   Maximum: {:.2} {}", summary.max, metric.unit()));
                    out.push(format!("   Minimum: {:.2} {}", summary.min, metric.unit()));
                    out.push(format!("   Status: {}", status.label()));
                }
                _ => {
                    out.push(format!("{} {}:", style.marker(Marker::Unknown), metric.display_name()));
                    out.push(format!("   {NO_DATA_LINE}"));
                }
            }
            out.push(String::new());
        }

        out.push("RECOMMENDATIONS".into());
        out.push(rule.clone());
        for entry in &self.guidance {
            match &entry.recommendation {
                Some(rec) => {
                    out.push(format!("{} {}", style.marker(rec.level.marker), rec.headline()));
                    for action in rec.actions {
                        out.push(format!("   {} {}", style.bullet(), action));
                    }
                }
                None => {
                    out.push(format!(
                        "{} NO DATA - {}",
                        style.marker(Marker::Unknown),
                        entry.metric.guidance_heading()
                    ));
                    out.push(format!("   {} {}", style.bullet(), NO_DATA_LINE));
                }
            }
            out.push(String::new());
        }

        out.push("OVERALL SYSTEM HEALTH ASSESSMENT".into());
        out.push(rule.clone());
        out.push(format!("{} {}", style.status(self.verdict.status), self.verdict.headline()));
        out.push(self.verdict.priority_text());
        out.push(String::new());

        out.push("GENERAL RECOMMENDATIONS FOR AIR QUALITY IMPROVEMENT".into());
        out.push(rule.clone());
        for (i, line) in GENERAL_GUIDANCE.iter().enumerate() {
            out.push(format!("{}. {}", i + 1, line));
        }
        out.push(String::new());

        out.push(rule.clone());
        out.push(format!("Report Generated: {}", format_timestamp(self.request.generated_at)));
        out.push(PLATFORM_LINE.into());
        out.push(rule);

        out.join("\n")
    }
}
