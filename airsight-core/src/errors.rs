//! Error Types for Classification Failures
//!
//! ## Error Categories
//!
//! ### Lookup Failures
//! - `UnknownMetric`: a metric name or metric that the threshold table does
//!   not configure. Never defaulted; the caller must surface it.
//! - `UnknownWindow`: a time-window label outside the known set.
//!
//! ### Data Failures
//! - `EmptyWindow`: statistics or recommendations requested over a window with
//!   no samples. Distinct from a zero-valued result so callers can show
//!   "no data for this period" instead of fabricated zeros.
//! - `InvalidValue` / `NegativeValue`: rejected at the ingestion boundary,
//!   before a reading reaches any classifier.
//! - `MissingField` / `Payload`: malformed device payloads.
//!
//! ### Configuration Failures
//! - `InvalidBoundaries`: a threshold table or tier scale whose boundaries
//!   are not strictly ascending or do not match the tier count.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use airsight_core::{ClassifyError, Classifier, Metric};
//!
//! let classifier = Classifier::default();
//! match classifier.summarize(&[], Metric::Dust) {
//!     Ok(summary) => println!("avg {:.2}", summary.average),
//!     Err(ClassifyError::EmptyWindow) => println!("No data for this period"),
//!     Err(other) => eprintln!("classification failed: {other}"),
//! }
//! ```

use thiserror::Error;

use crate::metric::Metric;

/// Result type for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Errors raised by the classification core and its ingestion boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// Metric is not configured in the threshold table
    #[error("Unknown metric: {name}")]
    UnknownMetric {
        /// Name that failed to resolve
        name: String,
    },

    /// No samples in the requested window
    #[error("Empty window: no readings for the selected period")]
    EmptyWindow,

    /// Value is NaN or infinite
    #[error("Invalid value for {metric}: not a finite number")]
    InvalidValue {
        /// Metric carrying the bad value
        metric: Metric,
    },

    /// Value below zero for a metric that is non-negative by definition
    #[error("Negative value {value} for {metric}")]
    NegativeValue {
        /// Metric carrying the bad value
        metric: Metric,
        /// The rejected value
        value: f64,
    },

    /// Boundaries not strictly ascending, or tier count mismatch
    #[error("Invalid boundaries: {reason}")]
    InvalidBoundaries {
        /// What was wrong with the boundaries
        reason: &'static str,
    },

    /// Time-window label not recognised
    #[error("Unknown time window: {label}")]
    UnknownWindow {
        /// Label that failed to resolve
        label: String,
    },

    /// Required payload field absent
    #[error("Missing required field: {field}")]
    MissingField {
        /// Field name as it appears on the wire
        field: &'static str,
    },

    /// Payload could not be decoded
    #[error("Malformed payload: {0}")]
    Payload(String),
}

impl ClassifyError {
    /// Shorthand for an unknown metric error
    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Self::UnknownMetric { name: name.into() }
    }
}

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}
