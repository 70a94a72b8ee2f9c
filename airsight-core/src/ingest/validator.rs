//! Reading validation at the ingestion boundary
//!
//! Every tracked metric is non-negative by definition (concentrations and a
//! Celsius reading that the device floors at zero). NaN, infinities and
//! negative values are rejected with the offending metric named, before a
//! `Reading` is built.

use crate::{
    errors::{ClassifyError, ClassifyResult},
    metric::Metric,
    reading::{MetricSet, Reading},
    traits::{Validatable, Validator},
};

/// Check a single metric value
pub fn check_value(metric: Metric, value: f64) -> ClassifyResult<()> {
    if !value.is_valid() {
        return Err(ClassifyError::InvalidValue { metric });
    }
    if value < 0.0 {
        return Err(ClassifyError::NegativeValue { metric, value });
    }
    Ok(())
}

/// Validator for the values of a reading
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingValidator {
    /// Metrics that must be present
    required: &'static [Metric],
}

impl ReadingValidator {
    /// Validator that only checks present values
    pub const fn new() -> Self {
        Self { required: &[] }
    }

    /// Validator that also requires `metrics` to be present
    pub const fn requiring(metrics: &'static [Metric]) -> Self {
        Self { required: metrics }
    }

    /// Check every present value of a metric set
    pub fn validate_values(&self, values: &MetricSet) -> ClassifyResult<()> {
        for metric in self.required {
            if values.get(*metric).is_none() {
                return Err(ClassifyError::MissingField { field: metric.name() });
            }
        }

        [Metric::Dust, Metric::Temperature, Metric::Tvoc, Metric::Eco2, Metric::Pm10]
            .into_iter()
            .filter_map(|metric| values.get(metric).map(|value| (metric, value)))
            .try_for_each(|(metric, value)| check_value(metric, value))
    }
}

impl Validator for ReadingValidator {
    type Input = Reading;

    fn validate(&self, reading: &Reading) -> ClassifyResult<()> {
        let result = self.validate_values(&reading.values);
        if let Err(err) = &result {
            log_warn!("Rejected reading at {}: {}", reading.timestamp, err);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::DEVICE_METRICS;

    #[test]
    fn accepts_zero_and_positive() {
        let validator = ReadingValidator::new();
        assert!(validator.validate(&Reading::device(0, 0.0, 21.5, 0.0, 400.0)).is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        let validator = ReadingValidator::new();
        let reading = Reading::new(0).with(Metric::Eco2, f64::NAN);
        assert_eq!(
            validator.validate(&reading),
            Err(ClassifyError::InvalidValue { metric: Metric::Eco2 })
        );

        let reading = Reading::new(0).with(Metric::Dust, f64::INFINITY);
        assert!(matches!(validator.validate(&reading), Err(ClassifyError::InvalidValue { .. })));
    }

    #[test]
    fn rejects_negative_with_metric_named() {
        let validator = ReadingValidator::new();
        let reading = Reading::device(0, 10.0, 20.0, -4.0, 400.0);
        assert_eq!(
            validator.validate(&reading),
            Err(ClassifyError::NegativeValue { metric: Metric::Tvoc, value: -4.0 })
        );
    }

    #[test]
    fn required_metrics_must_be_present() {
        let validator = ReadingValidator::requiring(&DEVICE_METRICS);
        let reading = Reading::new(0).with(Metric::Dust, 1.0);
        assert_eq!(
            validator.validate(&reading),
            Err(ClassifyError::MissingField { field: "temp" })
        );
    }
}
