//! Per-Metric Tier Boundaries
//!
//! Each array holds three strictly ascending boundaries. How a value equal to
//! a boundary is treated is decided by the scale that consumes the array, not
//! here.

// ===== DASHBOARD (FINE) TABLE =====

/// PM2.5 dust boundaries (µg/m³): safe, warning, hazard.
///
/// Tuned for an industrial floor with an optical dust sensor, not the
/// ambient outdoor scale.
pub const DUST_BOUNDARIES: [f64; 3] = [500.0, 1000.0, 1500.0];

/// Temperature boundaries (°C): safe, warning, hazard.
///
/// 25°C is the upper comfort limit; 35°C is where heat stress protocols apply.
pub const TEMP_BOUNDARIES: [f64; 3] = [25.0, 30.0, 35.0];

/// Total volatile organic compound boundaries (ppb): safe, warning, hazard.
///
/// Source: MOx sensor guidance (SGP30 class); 1000 ppb is sensor saturation
/// territory for low-cost parts.
pub const TVOC_BOUNDARIES: [f64; 3] = [200.0, 500.0, 1000.0];

/// Equivalent CO2 boundaries (ppm): safe, warning, hazard.
///
/// Source: ASHRAE 62.1 ventilation practice; drowsiness is reported above
/// ~2000 ppm.
pub const ECO2_BOUNDARIES: [f64; 3] = [800.0, 1200.0, 2000.0];

// ===== INGESTION SCORING TABLE =====

/// Dust point boundaries at ingestion (µg/m³). Above each adds one point.
pub const INGEST_DUST_BOUNDARIES: [f64; 3] = [200.0, 500.0, 1000.0];

/// Temperature point boundaries at ingestion (°C).
pub const INGEST_TEMP_BOUNDARIES: [f64; 3] = [30.0, 35.0, 40.0];

/// TVOC point boundaries at ingestion (ppb).
pub const INGEST_TVOC_BOUNDARIES: [f64; 3] = [100.0, 250.0, 500.0];

/// eCO2 point boundaries at ingestion (ppm).
pub const INGEST_ECO2_BOUNDARIES: [f64; 3] = [600.0, 800.0, 1000.0];

// ===== AMBIENT (COARSE) TABLE =====

/// Outdoor PM2.5 boundaries (µg/m³): low, moderate, high.
///
/// Above the last boundary is "Very High".
pub const AMBIENT_PM25_BOUNDARIES: [f64; 3] = [30.0, 60.0, 90.0];
