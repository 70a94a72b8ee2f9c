//! Hourly ambient air-quality feed
//!
//! The outdoor feed returns column arrays keyed by hour:
//!
//! ```text
//! {"time": ["2024-03-05T13:00", ...], "pm2_5": [41.2, ...], "pm10": [77.0, ...]}
//! ```
//!
//! The current hour's entry is picked by its `YYYY-MM-DDTHH:00` key; when the
//! feed does not contain that hour the last entry is used instead. Fetching
//! the feed is left to the caller.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    constants::time::FEED_TIME_FORMAT,
    errors::{ClassifyError, ClassifyResult},
    metric::Metric,
    reading::Reading,
    time::{hour_key, Timestamp},
};

use super::risk::{classify_pm25, CoarseRisk};

/// Column-oriented hourly series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(default)]
    pub pm2_5: Vec<Option<f64>>,
    #[serde(default)]
    pub pm10: Vec<Option<f64>>,
}

impl HourlySeries {
    /// Decode the hourly block of a feed response
    pub fn from_json(json: &str) -> ClassifyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Index of the entry for the hour containing `now`, or the last entry
    pub fn index_for(&self, now: Timestamp) -> ClassifyResult<usize> {
        let last = self.time.len().checked_sub(1).ok_or(ClassifyError::EmptyWindow)?;
        let index = hour_key(now)
            .and_then(|key| self.time.iter().position(|t| *t == key))
            .unwrap_or_else(|| {
                log_debug!("Hour of {} not in feed, using latest entry", now);
                last
            });
        Ok(index)
    }

    /// Entry at `index` as an ambient reading (`dust` = PM2.5, plus `pm10`)
    pub fn reading(&self, index: usize) -> ClassifyResult<Reading> {
        let time = self.time.get(index).ok_or(ClassifyError::EmptyWindow)?;
        let parsed = NaiveDateTime::parse_from_str(time, FEED_TIME_FORMAT)
            .map_err(|err| ClassifyError::Payload(format!("bad feed time {time:?}: {err}")))?;
        let timestamp = u64::try_from(parsed.and_utc().timestamp_millis())
            .map_err(|_| ClassifyError::Payload(format!("feed time {time:?} before epoch")))?;

        let mut reading = Reading::new(timestamp);
        reading.values.set(Metric::Dust, self.pm2_5.get(index).copied().flatten());
        reading.values.set(Metric::Pm10, self.pm10.get(index).copied().flatten());
        Ok(reading)
    }

    /// Ambient reading for the hour containing `now`
    pub fn reading_at(&self, now: Timestamp) -> ClassifyResult<Reading> {
        self.reading(self.index_for(now)?)
    }
}

/// Tier an ambient reading on its PM2.5 value
pub fn classify_ambient(reading: &Reading) -> ClassifyResult<CoarseRisk> {
    let pm25 = reading
        .value(Metric::Dust)
        .ok_or(ClassifyError::MissingField { field: "pm2_5" })?;
    classify_pm25(pm25)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiering::RiskLevel;

    // 2024-03-05 14:07:09 UTC
    const NOW: Timestamp = 1_709_647_629_000;

    fn series() -> HourlySeries {
        HourlySeries::from_json(
            r#"{
                "time": ["2024-03-05T13:00", "2024-03-05T14:00", "2024-03-05T15:00"],
                "pm2_5": [20.0, 64.5, null],
                "pm10": [40.0, 88.0, 90.0]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn picks_current_hour() {
        let reading = series().reading_at(NOW).unwrap();
        assert_eq!(reading.value(Metric::Dust), Some(64.5));
        assert_eq!(reading.value(Metric::Pm10), Some(88.0));
        assert_eq!(reading.timestamp, 1_709_647_200_000);
        assert_eq!(classify_ambient(&reading).unwrap().level.tier, RiskLevel::High);
    }

    #[test]
    fn falls_back_to_last_entry() {
        let series = series();
        assert_eq!(series.index_for(0).unwrap(), 2);

        let reading = series.reading_at(0).unwrap();
        assert_eq!(reading.value(Metric::Dust), None);
        assert_eq!(
            classify_ambient(&reading),
            Err(ClassifyError::MissingField { field: "pm2_5" })
        );
    }

    #[test]
    fn empty_series_is_empty_window() {
        assert_eq!(HourlySeries::default().reading_at(NOW), Err(ClassifyError::EmptyWindow));
    }

    #[test]
    fn bad_time_is_payload_error() {
        let series = HourlySeries { time: vec!["yesterday".into()], pm2_5: vec![Some(1.0)], pm10: vec![] };
        assert!(matches!(series.reading_at(NOW), Err(ClassifyError::Payload(_))));
    }
}
