//! Report assembly for AirSight
//!
//! Composes the classification core into the two outputs operators see:
//!
//! - `DiagnosticReport`: the multi-section window report, rendered as plain
//!   text for the PDF exporter or as JSON
//! - `DashboardSnapshot`: KPI cards, composite gauge and live log for one
//!   dashboard refresh
//!
//! Glyphs are chosen here through a `MarkerStyle`; the core only deals in
//! semantic markers.
//!
//! ```no_run
//! use airsight_core::{Classifier, Reading, SystemClock, TimeWindow};
//! use airsight_report::{DiagnosticReport, EmojiStyle, ReportRequest};
//!
//! let history: Vec<Reading> = Vec::new(); // from the telemetry store
//! let request = ReportRequest::now(TimeWindow::OneHour, &SystemClock);
//!
//! match DiagnosticReport::from_history(&Classifier::default(), request, &history) {
//!     Ok(report) => println!("{}", report.render_text(&EmojiStyle)),
//!     Err(e) if e.is_empty_window() => println!("No data available for the selected time range."),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod errors;
pub mod render;
pub mod report;
pub mod snapshot;

// Public API
pub use errors::{ReportError, ReportResult};
pub use render::{render_diagnostics, render_line, EmojiStyle, MarkerStyle, PlainStyle};
pub use report::{DiagnosticReport, MetricGuidance, OverviewRow, ReportRequest, GENERAL_GUIDANCE};
pub use snapshot::{DashboardSnapshot, Gauge, KpiCard};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_core() {
        assert_eq!(VERSION, airsight_core::VERSION);
    }
}
