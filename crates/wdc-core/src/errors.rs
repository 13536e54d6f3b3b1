//! Error types for the workday calendar.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros are the
//! early-return shorthands used by the validating setters.

use thiserror::Error;

/// The top-level error type used throughout the workday calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The workday start boundary is not a valid time of day.
    #[error("invalid workday start time {hour:02}:{minute:02}")]
    InvalidStartTime {
        /// Requested start hour.
        hour: u32,
        /// Requested start minute.
        minute: u32,
    },

    /// The workday stop boundary is not a valid time of day.
    #[error("invalid workday stop time {hour:02}:{minute:02}")]
    InvalidStopTime {
        /// Requested stop hour.
        hour: u32,
        /// Requested stop minute.
        minute: u32,
    },

    /// The workday start boundary is not strictly before the stop boundary.
    #[error("workday start ({start} min) must precede workday stop ({stop} min)")]
    StartNotBeforeStop {
        /// Start boundary in minutes from midnight.
        start: u32,
        /// Stop boundary in minutes from midnight.
        stop: u32,
    },

    /// A recurring holiday does not name a valid day of a leap year.
    #[error("invalid recurring holiday: month {month}, day {day}")]
    InvalidRecurringHolidayDate {
        /// Requested month.
        month: u32,
        /// Requested day of month.
        day: u32,
    },

    /// Every day of the year is a recurring holiday, so no workday can ever
    /// be reached.
    #[error("every day of the year is a recurring holiday; no workdays remain")]
    AllDaysAreHolidays,

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the workday calendar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` unless `$cond` holds.
///
/// # Example
/// ```
/// use wdc_core::{ensure, errors::{Error, Result}};
/// fn month(m: u32) -> Result<u32> {
///     ensure!(m <= 12, Error::InvalidArgument(format!("month {m}")));
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

/// Return `Err($err)` immediately.
///
/// # Example
/// ```
/// use wdc_core::{fail, errors::{Error, Result}};
/// fn saturated() -> Result<()> {
///     fail!(Error::AllDaysAreHolidays);
/// }
/// assert_eq!(saturated(), Err(Error::AllDaysAreHolidays));
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err.into())
    };
}
