//! Time Conversions and Sampling Cadence

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Interval between device uploads (seconds).
///
/// The field unit posts one sample every five seconds.
pub const DEVICE_SAMPLE_INTERVAL_S: u64 = 5;

/// Timestamp format used in reports and logs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour key format used by hourly air-quality feeds.
pub const HOUR_KEY_FORMAT: &str = "%Y-%m-%dT%H:00";

/// Entry time format of hourly air-quality feeds.
pub const FEED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
