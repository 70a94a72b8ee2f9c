//! Tracked metrics and their fixed units

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClassifyError;

/// A tracked telemetry metric
///
/// Maps to a row in a `ThresholdTable` and a fixed unit of measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Particulate matter (PM2.5)
    Dust,
    /// Air temperature
    #[serde(rename = "temp")]
    Temperature,
    /// Total volatile organic compounds
    Tvoc,
    /// Equivalent CO2
    Eco2,
    /// Coarse particulate matter, secondary ingestion path only
    Pm10,
}

/// Metrics carried by the device, in report order
pub const DEVICE_METRICS: [Metric; 4] = [Metric::Dust, Metric::Temperature, Metric::Tvoc, Metric::Eco2];

/// Metrics that feed the composite index. Temperature is excluded.
pub const COMPOSITE_METRICS: [Metric; 3] = [Metric::Dust, Metric::Tvoc, Metric::Eco2];

impl Metric {
    /// Short machine name, as used on the wire and in the log
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::Dust => "dust",
            Metric::Temperature => "temp",
            Metric::Tvoc => "tvoc",
            Metric::Eco2 => "eco2",
            Metric::Pm10 => "pm10",
        }
    }

    /// Unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Metric::Dust | Metric::Pm10 => "µg/m³",
            Metric::Temperature => "°C",
            Metric::Tvoc => "ppb",
            Metric::Eco2 => "ppm",
        }
    }

    /// Human-readable label for cards and report rows
    pub const fn display_name(&self) -> &'static str {
        match self {
            Metric::Dust => "PM2.5 Dust",
            Metric::Temperature => "Temperature",
            Metric::Tvoc => "TVOC",
            Metric::Eco2 => "eCO2",
            Metric::Pm10 => "PM10",
        }
    }

    /// Heading used for per-metric guidance in reports
    pub const fn guidance_heading(&self) -> &'static str {
        match self {
            Metric::Dust => "PARTICULATE MATTER (PM2.5)",
            Metric::Temperature => "THERMAL CONDITIONS",
            Metric::Tvoc => "TOTAL VOLATILE ORGANIC COMPOUNDS (TVOC)",
            Metric::Eco2 => "EQUIVALENT CO2 (eCO2)",
            Metric::Pm10 => "PARTICULATE MATTER (PM10)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dust" | "pm2_5" | "pm25" => Ok(Metric::Dust),
            "temp" | "temperature" => Ok(Metric::Temperature),
            "tvoc" => Ok(Metric::Tvoc),
            "eco2" => Ok(Metric::Eco2),
            "pm10" => Ok(Metric::Pm10),
            _ => Err(ClassifyError::unknown_metric(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for metric in DEVICE_METRICS {
            assert_eq!(metric.name().parse::<Metric>(), Ok(metric));
        }
        assert_eq!("pm2_5".parse::<Metric>(), Ok(Metric::Dust));
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "humidity".parse::<Metric>(),
            Err(ClassifyError::unknown_metric("humidity"))
        );
    }

    #[test]
    fn composite_excludes_temperature() {
        assert!(!COMPOSITE_METRICS.contains(&Metric::Temperature));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Metric::Temperature).unwrap();
        assert_eq!(json, "\"temp\"");
    }
}
