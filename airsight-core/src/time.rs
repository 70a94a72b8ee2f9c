//! Time sources and timestamp formatting
//!
//! Readings carry wall-clock milliseconds. The classifiers never read the
//! clock themselves; anything that needs "now" (window filtering, report
//! footers) takes a `TimeSource` so tests can pin it.

use chrono::{DateTime, Utc};

use crate::constants::time::{HOUR_KEY_FORMAT, TIMESTAMP_FORMAT};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time
    fn is_wall_clock(&self) -> bool;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

fn to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS` (UTC)
///
/// Out-of-range values fall back to the raw millisecond count.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    match to_datetime(timestamp) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

/// Hour bucket key (`YYYY-MM-DDTHH:00`) used by hourly feeds
pub fn hour_key(timestamp: Timestamp) -> Option<String> {
    to_datetime(timestamp).map(|dt| dt.format(HOUR_KEY_FORMAT).to_string())
}
