//! Ingestion Boundary
//!
//! Everything that turns external input into a `Reading`, plus the risk
//! assessments attached to a sample as it arrives:
//!
//! - `payload`: device JSON decoding and field requirements
//! - `validator`: finite, non-negative checks with the offending metric named
//! - `risk`: device risk score and ambient PM2.5 tiering
//! - `ambient`: hourly outdoor feed selection
//!
//! ```rust
//! use airsight_core::ingest::{score_ingestion, SensorPayload};
//! use airsight_core::{Reading, RiskLevel};
//!
//! let payload = SensorPayload::from_json(r#"{"dust": 650, "temp": 36.5, "tvoc": 120, "eco2": 700}"#)?;
//! let reading = Reading::from_payload(&payload, 1_709_647_629_000)?;
//! let risk = score_ingestion(&reading)?;
//! assert_eq!(risk.score, 6);
//! assert_eq!(risk.level.tier, RiskLevel::High);
//! # Ok::<(), airsight_core::ClassifyError>(())
//! ```

pub mod ambient;
pub mod payload;
pub mod risk;
pub mod validator;

pub use ambient::{classify_ambient, HourlySeries};
pub use payload::SensorPayload;
pub use risk::{classify_pm25, score_ingestion, CoarseRisk, IngestionRisk, MetricAlert};
pub use validator::{check_value, ReadingValidator};
