//! Device payload decoding
//!
//! The field unit posts `{"dust": .., "temp": .., "tvoc": .., "eco2": ..}`.
//! All four fields are required. Each may arrive as a JSON number or as a
//! numeric string (`"612"`), since some firmware builds quote their values.
//! TVOC and eCO2 are integer counts on the device; fractional values are
//! accepted and truncated toward zero.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{
    errors::{ClassifyError, ClassifyResult},
    metric::Metric,
    reading::{MetricSet, Reading},
    time::Timestamp,
    traits::Validator,
};

use super::validator::ReadingValidator;

/// Raw device JSON body
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorPayload {
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub dust: Option<f64>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub tvoc: Option<f64>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub eco2: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WireNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WireNumber::Number(value)) => Ok(Some(value)),
        Some(WireNumber::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("not a number: {text:?}"))),
    }
}

impl SensorPayload {
    /// Decode a payload from JSON
    pub fn from_json(json: &str) -> ClassifyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn require(value: Option<f64>, metric: Metric) -> ClassifyResult<f64> {
        value.ok_or(ClassifyError::MissingField { field: metric.name() })
    }

    /// Metric values with wire conventions applied
    pub fn values(&self) -> ClassifyResult<MetricSet> {
        Ok(MetricSet {
            dust: Some(Self::require(self.dust, Metric::Dust)?),
            temp: Some(Self::require(self.temp, Metric::Temperature)?),
            tvoc: Some(Self::require(self.tvoc, Metric::Tvoc)?.trunc()),
            eco2: Some(Self::require(self.eco2, Metric::Eco2)?.trunc()),
            pm10: None,
        })
    }
}

impl Reading {
    /// Validate a device payload and stamp it
    pub fn from_payload(payload: &SensorPayload, timestamp: Timestamp) -> ClassifyResult<Self> {
        let reading = Self { timestamp, values: payload.values()? };
        ReadingValidator::new().validate(&reading)?;
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_truncates_counts() {
        let payload = SensorPayload::from_json(r#"{"dust": 120.5, "temp": 24.1, "tvoc": 87.9, "eco2": 640}"#).unwrap();
        let reading = Reading::from_payload(&payload, 42).unwrap();
        assert_eq!(reading.timestamp, 42);
        assert_eq!(reading.value(Metric::Dust), Some(120.5));
        assert_eq!(reading.value(Metric::Tvoc), Some(87.0));
        assert_eq!(reading.value(Metric::Eco2), Some(640.0));
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let payload =
            SensorPayload::from_json(r#"{"dust": "612", "temp": " 36.5 ", "tvoc": "120", "eco2": 700}"#).unwrap();
        assert_eq!(payload.dust, Some(612.0));
        assert_eq!(payload.temp, Some(36.5));

        let reading = Reading::from_payload(&payload, 0).unwrap();
        assert_eq!(reading.value(Metric::Tvoc), Some(120.0));
        assert_eq!(reading.value(Metric::Eco2), Some(700.0));
    }

    #[test]
    fn null_field_counts_as_missing() {
        let payload = SensorPayload::from_json(r#"{"dust": null, "temp": 2.0, "tvoc": 1, "eco2": 3}"#).unwrap();
        assert_eq!(
            Reading::from_payload(&payload, 0),
            Err(ClassifyError::MissingField { field: "dust" })
        );
    }

    #[test]
    fn missing_field_is_named() {
        let payload = SensorPayload::from_json(r#"{"dust": 1.0, "temp": 2.0, "eco2": 3.0}"#).unwrap();
        assert_eq!(
            Reading::from_payload(&payload, 0),
            Err(ClassifyError::MissingField { field: "tvoc" })
        );
    }

    #[test]
    fn negative_value_is_rejected() {
        let payload = SensorPayload { dust: Some(-1.0), temp: Some(20.0), tvoc: Some(0.0), eco2: Some(400.0) };
        assert_eq!(
            Reading::from_payload(&payload, 0),
            Err(ClassifyError::NegativeValue { metric: Metric::Dust, value: -1.0 })
        );
    }

    #[test]
    fn malformed_json_is_payload_error() {
        assert!(matches!(SensorPayload::from_json("{dust"), Err(ClassifyError::Payload(_))));
        assert!(matches!(
            SensorPayload::from_json(r#"{"dust": "high"}"#),
            Err(ClassifyError::Payload(_))
        ));
    }
}
