//! Error types for report assembly

use airsight_core::ClassifyError;
use thiserror::Error;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while assembling or exporting reports
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A classifier rejected its input
    #[error("Classification failed: {0}")]
    Classify(#[from] ClassifyError),

    /// JSON export failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl ReportError {
    /// True when the report had no readings to work with
    pub fn is_empty_window(&self) -> bool {
        matches!(self, ReportError::Classify(ClassifyError::EmptyWindow))
    }
}
