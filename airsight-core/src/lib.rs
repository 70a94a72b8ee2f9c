//! Classification core for AirSight
//!
//! Turns air-quality telemetry into tiers, a composite index, window
//! statistics, guidance and an overall verdict. Every boundary lives in one
//! `ThresholdTable`; the classifiers are configurations of one tiering
//! function over it.
//!
//! Key constraints:
//! - Pure functions, no shared state, safe to call from any thread
//! - A missing metric is never a silent zero
//! - Bad input is rejected at the ingestion boundary, not in the classifiers
//!
//! ```no_run
//! use airsight_core::{Classifier, Reading, TimeWindow, TimeSource, SystemClock};
//!
//! let classifier = Classifier::default();
//! let history: Vec<Reading> = Vec::new(); // from the telemetry store
//!
//! let window = TimeWindow::OneHour.filter(&history, SystemClock.now());
//! match classifier.window_averages(&window) {
//!     Ok(averages) => {
//!         let verdict = classifier.overall_status(&averages).unwrap();
//!         println!("{}", verdict.headline());
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod classify;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod metric;
pub mod reading;
pub mod thresholds;
pub mod tiering;
pub mod time;
pub mod traits;
pub mod window;

// Public API
pub use classify::{
    Classifier, CompositeIndex, DiagnosticLine, LineKind, MetricSummary, Recommendation,
    SystemStatus, Verdict,
};
pub use errors::{ClassifyError, ClassifyResult};
pub use metric::{Metric, COMPOSITE_METRICS, DEVICE_METRICS};
pub use reading::{MetricSet, Reading};
pub use thresholds::{Boundaries, ThresholdTable, TierScheme};
pub use tiering::{AlertLevel, BoundaryRule, Marker, RiskLevel, Severity, Tier, TierLabel, TierScale};
pub use time::{format_timestamp, FixedTime, SystemClock, TimeSource, Timestamp};
pub use traits::{Validatable, Validator};
pub use window::{TimeWindow, DASHBOARD_WINDOWS, REPORT_WINDOWS};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
