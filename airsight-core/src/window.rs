//! Time windows for dashboard views and reports

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    constants::time::MS_PER_MINUTE,
    errors::ClassifyError,
    reading::Reading,
    time::Timestamp,
};

/// A trailing window ending at "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    SixHours,
    TwelveHours,
    TwentyFourHours,
}

/// Windows offered by the live dashboard
pub const DASHBOARD_WINDOWS: [TimeWindow; 5] = [
    TimeWindow::FiveMinutes,
    TimeWindow::FifteenMinutes,
    TimeWindow::OneHour,
    TimeWindow::SixHours,
    TimeWindow::TwentyFourHours,
];

/// Windows offered for reports
pub const REPORT_WINDOWS: [TimeWindow; 5] = [
    TimeWindow::ThirtyMinutes,
    TimeWindow::OneHour,
    TimeWindow::SixHours,
    TimeWindow::TwelveHours,
    TimeWindow::TwentyFourHours,
];

impl TimeWindow {
    pub const fn minutes(&self) -> u64 {
        match self {
            TimeWindow::FiveMinutes => 5,
            TimeWindow::FifteenMinutes => 15,
            TimeWindow::ThirtyMinutes => 30,
            TimeWindow::OneHour => 60,
            TimeWindow::SixHours => 360,
            TimeWindow::TwelveHours => 720,
            TimeWindow::TwentyFourHours => 1440,
        }
    }

    pub const fn duration_ms(&self) -> u64 {
        self.minutes() * MS_PER_MINUTE
    }

    /// Report label (`Last 1 Hour` for the hour window)
    pub const fn label(&self) -> &'static str {
        match self {
            TimeWindow::FiveMinutes => "Last 5 Minutes",
            TimeWindow::FifteenMinutes => "Last 15 Minutes",
            TimeWindow::ThirtyMinutes => "Last 30 Minutes",
            TimeWindow::OneHour => "Last 1 Hour",
            TimeWindow::SixHours => "Last 6 Hours",
            TimeWindow::TwelveHours => "Last 12 Hours",
            TimeWindow::TwentyFourHours => "Last 24 Hours",
        }
    }

    /// Dashboard label (`Last Hour` for the hour window)
    pub const fn dashboard_label(&self) -> &'static str {
        match self {
            TimeWindow::OneHour => "Last Hour",
            other => other.label(),
        }
    }

    /// First timestamp inside the window ending at `now`
    pub fn cutoff(&self, now: Timestamp) -> Timestamp {
        now.saturating_sub(self.duration_ms())
    }

    /// Readings with `timestamp >= now - window`, in their original order
    pub fn filter(&self, readings: &[Reading], now: Timestamp) -> Vec<Reading> {
        let cutoff = self.cutoff(now);
        readings.iter().filter(|r| r.timestamp >= cutoff).copied().collect()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Last 5 Minutes" => Ok(TimeWindow::FiveMinutes),
            "Last 15 Minutes" => Ok(TimeWindow::FifteenMinutes),
            "Last 30 Minutes" => Ok(TimeWindow::ThirtyMinutes),
            "Last Hour" | "Last 1 Hour" => Ok(TimeWindow::OneHour),
            "Last 6 Hours" => Ok(TimeWindow::SixHours),
            "Last 12 Hours" => Ok(TimeWindow::TwelveHours),
            "Last 24 Hours" => Ok(TimeWindow::TwentyFourHours),
            _ => {
                log_warn!("unknown time window label {:?}", s);
                Err(ClassifyError::UnknownWindow { label: s.to_string() })
            }
        }
    }
}
