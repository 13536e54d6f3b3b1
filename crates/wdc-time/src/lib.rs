//! # wdc-time
//!
//! Workday window, holiday, and workday-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and lazy walking over calendar days.
pub mod calendar;

/// `WorkdayCalendarConfig` — building a calendar from plain data.
pub mod config;

/// Exact and recurring holiday sets.
pub mod holidays;

/// Splitting a fractional increment into workdays and minutes.
pub mod increment;

/// `WorkdayWindow` — the counted part of each day.
pub mod window;

/// `WorkdayCalendar` — the workday increment calculator.
pub mod workday_calendar;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{calendar_days, Calendar, Direction};
pub use config::WorkdayCalendarConfig;
pub use holidays::{HolidaySet, MonthDay, RecurringHolidaySet};
pub use increment::WorkdayOffset;
pub use window::WorkdayWindow;
pub use workday_calendar::WorkdayCalendar;
