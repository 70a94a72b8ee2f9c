//! Composite Index and Aggregate Score Cut Points

/// Per-metric score cap and the top of the composite scale.
pub const COMPOSITE_MAX_SCORE: f64 = 100.0;

/// Composite scores at or above this are WARNING.
pub const COMPOSITE_WARNING_MIN: f64 = 30.0;

/// Composite scores at or above this are HAZARD.
pub const COMPOSITE_HAZARD_MIN: f64 = 60.0;

/// Composite tier cut points, ascending.
pub const COMPOSITE_BOUNDARIES: [f64; 2] = [COMPOSITE_WARNING_MIN, COMPOSITE_HAZARD_MIN];

/// Ingestion risk-score cut points: Moderate, High, Critical.
///
/// Each metric contributes 0..=3 points, so the score ranges 0..=12.
pub const INGEST_SCORE_BOUNDARIES: [f64; 3] = [2.0, 5.0, 8.0];
