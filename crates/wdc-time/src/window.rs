//! `WorkdayWindow` — the time-of-day interval during which work is counted.

use chrono::{NaiveDateTime, NaiveTime};
use wdc_core::errors::{Error, Result};
use wdc_core::{ensure, Minutes};

/// The configured workday window, e.g. 08:00–16:00.
///
/// Invariant: `start < stop`, both on whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWindow", into = "RawWindow"))]
pub struct WorkdayWindow {
    start: NaiveTime,
    stop: NaiveTime,
}

impl WorkdayWindow {
    /// Build a window from start and stop hour/minute pairs.
    ///
    /// The start minute must be below 59 while the stop minute may be 59;
    /// the start must fall strictly before the stop.
    ///
    /// # Errors
    /// [`Error::InvalidStartTime`], [`Error::InvalidStopTime`] or
    /// [`Error::StartNotBeforeStop`].
    pub fn new(start_hour: u32, start_minute: u32, stop_hour: u32, stop_minute: u32) -> Result<Self> {
        ensure!(
            start_hour < 24 && start_minute < 59,
            Error::InvalidStartTime {
                hour: start_hour,
                minute: start_minute,
            }
        );
        ensure!(
            stop_hour < 24 && stop_minute <= 59,
            Error::InvalidStopTime {
                hour: stop_hour,
                minute: stop_minute,
            }
        );
        let start_min = start_hour * 60 + start_minute;
        let stop_min = stop_hour * 60 + stop_minute;
        ensure!(
            start_min < stop_min,
            Error::StartNotBeforeStop {
                start: start_min,
                stop: stop_min,
            }
        );
        Ok(Self {
            start: hm(start_hour, start_minute)?,
            stop: hm(stop_hour, stop_minute)?,
        })
    }

    /// Start boundary.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Stop boundary.
    pub fn stop(&self) -> NaiveTime {
        self.stop
    }

    /// Length of the workday in minutes.
    pub fn length_minutes(&self) -> Minutes {
        (self.stop - self.start).num_minutes()
    }

    /// Return `true` if `time` lies inside the window, boundaries included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.stop
    }

    /// Snap `at` onto the window boundaries of its own calendar date.
    pub fn clamp(&self, at: NaiveDateTime) -> NaiveDateTime {
        let time = at.time();
        if time < self.start {
            at.date().and_time(self.start)
        } else if time > self.stop {
            at.date().and_time(self.stop)
        } else {
            at
        }
    }

    /// Whole minutes elapsed between the start boundary and `at`, on the
    /// same calendar date.  Negative before the window opens.
    pub fn minutes_since_start(&self, at: NaiveDateTime) -> Minutes {
        (at.time() - self.start).num_minutes()
    }
}

impl Default for WorkdayWindow {
    /// The conventional 08:00–16:00 workday.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            stop: NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for WorkdayWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.start.format("%H:%M"), self.stop.format("%H:%M"))
    }
}

fn hm(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| Error::InvalidArgument(format!("time {hour:02}:{minute:02}")))
}

/// Serialised form: `{ "start": [8, 0], "stop": [16, 0] }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawWindow {
    start: (u32, u32),
    stop: (u32, u32),
}

#[cfg(feature = "serde")]
impl TryFrom<RawWindow> for WorkdayWindow {
    type Error = Error;

    fn try_from(raw: RawWindow) -> Result<Self> {
        WorkdayWindow::new(raw.start.0, raw.start.1, raw.stop.0, raw.stop.1)
    }
}

#[cfg(feature = "serde")]
impl From<WorkdayWindow> for RawWindow {
    fn from(w: WorkdayWindow) -> Self {
        use chrono::Timelike;
        RawWindow {
            start: (w.start.hour(), w.start.minute()),
            stop: (w.stop.hour(), w.stop.minute()),
        }
    }
}
