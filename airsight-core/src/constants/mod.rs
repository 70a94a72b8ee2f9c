//! Constants for AirSight Core
//!
//! All numeric boundaries used by the classifiers are defined here, so that
//! every consumer reads the same values through a `ThresholdTable` or
//! `TierScale` instead of inlining them into conditionals.
//!
//! ## Organization
//!
//! - **Thresholds**: per-metric tier boundaries (dashboard, ingestion, ambient)
//! - **Scoring**: composite index and ingestion risk-score cut points
//! - **Time**: unit conversions and sampling cadence

/// Per-metric tier boundaries with units.
pub mod thresholds;

/// Composite index and aggregate score cut points.
pub mod scoring;

/// Time conversions and the device sampling cadence.
pub mod time;

pub use thresholds::{DUST_BOUNDARIES, ECO2_BOUNDARIES, TEMP_BOUNDARIES, TVOC_BOUNDARIES};

pub use scoring::{COMPOSITE_HAZARD_MIN, COMPOSITE_MAX_SCORE, COMPOSITE_WARNING_MIN};

pub use time::{MS_PER_MINUTE, MS_PER_SECOND};
