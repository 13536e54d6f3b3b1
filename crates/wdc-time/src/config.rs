//! `WorkdayCalendarConfig` — a plain description of a [`WorkdayCalendar`].
//!
//! With the `serde` feature the config can be read from any serde format:
//!
//! ```json
//! {
//!   "window": { "start": [8, 0], "stop": [16, 0] },
//!   "holidays": ["2021-12-07"],
//!   "recurring_holidays": [[12, 25], [12, 26]]
//! }
//! ```
//!
//! Deserialization validates the window and every recurring holiday, so a
//! deserialized config always builds.

use chrono::NaiveDate;
use wdc_core::errors::Result;

use crate::holidays::MonthDay;
use crate::window::WorkdayWindow;
use crate::workday_calendar::WorkdayCalendar;

/// Everything needed to build a [`WorkdayCalendar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkdayCalendarConfig {
    /// Workday window; 08:00–16:00 when omitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub window: WorkdayWindow,
    /// Exact holidays.
    #[cfg_attr(feature = "serde", serde(default))]
    pub holidays: Vec<NaiveDate>,
    /// Holidays recurring every year.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recurring_holidays: Vec<MonthDay>,
}

impl WorkdayCalendarConfig {
    /// Config with the given window and no holidays.
    pub fn new(start_hour: u32, start_minute: u32, stop_hour: u32, stop_minute: u32) -> Result<Self> {
        Ok(Self {
            window: WorkdayWindow::new(start_hour, start_minute, stop_hour, stop_minute)?,
            ..Self::default()
        })
    }

    /// Add an exact holiday.
    pub fn holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.push(date);
        self
    }

    /// Add a recurring holiday.
    pub fn recurring_holiday(mut self, month: u32, day: u32) -> Result<Self> {
        self.recurring_holidays.push(MonthDay::new(month, day)?);
        Ok(self)
    }

    /// Build the calendar.
    pub fn build(&self) -> WorkdayCalendar {
        WorkdayCalendar::from_config(self)
    }
}

impl WorkdayCalendar {
    /// Build a calendar from `config`.
    pub fn from_config(config: &WorkdayCalendarConfig) -> Self {
        let mut cal = WorkdayCalendar::with_window(config.window);
        for &date in &config.holidays {
            cal.set_holiday(date);
        }
        for md in &config.recurring_holidays {
            cal.add_recurring(*md);
        }
        cal
    }

    /// Describe this calendar as a config; holidays come out sorted.
    pub fn to_config(&self) -> WorkdayCalendarConfig {
        WorkdayCalendarConfig {
            window: self.window(),
            holidays: self.holidays().iter().collect(),
            recurring_holidays: self.recurring_holidays().iter().collect(),
        }
    }
}
