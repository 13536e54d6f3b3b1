//! # workday-calendar
//!
//! Step a timestamp forward or backward by a fractional number of workdays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wdc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! workday-calendar = "0.1"
//! ```
//!
//! ```rust
//! use workday_calendar::prelude::*;
//!
//! let mut cal = WorkdayCalendar::new();
//! cal.set_workday_start_and_stop(8, 0, 16, 0)?;
//! cal.set_recurring_holiday(12, 25)?;
//!
//! // Wednesday noon plus one and three-quarter workdays
//! let wednesday = NaiveDate::from_ymd_opt(2021, 12, 8)
//!     .and_then(|d| d.and_hms_opt(12, 0, 0))
//!     .ok_or(Error::InvalidArgument("date".into()))?;
//! let result = cal.workday_increment(wednesday, Decimal::new(175, 2))?;
//! assert_eq!(result.to_string(), "2021-12-10 10:00:00");
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use wdc_core as core;

/// Workday window, holidays, and the workday calendar.
pub use wdc_time as time;

/// Date and time types used in the public API.
pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Exact decimal type used for workday increments.
pub use rust_decimal::Decimal;

/// The most commonly used items.
pub mod prelude {
    pub use crate::{Decimal, NaiveDate, NaiveDateTime, NaiveTime};
    pub use wdc_core::{Error, Result};
    pub use wdc_time::{Calendar, MonthDay, WorkdayCalendar, WorkdayCalendarConfig, WorkdayWindow};
}
