//! Holiday sets — exact dates and month/day pairs recurring every year.
//!
//! The two kinds live in separate, explicitly-typed collections so that an
//! exact holiday can never be mistaken for a recurring one.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use wdc_core::errors::{Error, Result};

/// Year used to validate [`MonthDay`] pairs; being a leap year it accepts
/// February 29.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// Number of distinct month/day pairs in a leap year.
pub const DAYS_IN_LEAP_YEAR: usize = 366;

/// A month/day pair, independent of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u32, u32)", into = "(u32, u32)"))]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a month/day pair that exists in a leap year.
    ///
    /// # Errors
    /// [`Error::InvalidRecurringHolidayDate`] for pairs such as 13/1, 4/31 or
    /// 1/0.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day)
            .map(|_| Self { month, day })
            .ok_or(Error::InvalidRecurringHolidayDate { month, day })
    }

    /// The month/day of `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Month (1–12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl TryFrom<(u32, u32)> for MonthDay {
    type Error = Error;

    fn try_from((month, day): (u32, u32)) -> Result<Self> {
        MonthDay::new(month, day)
    }
}

impl From<MonthDay> for (u32, u32) {
    fn from(md: MonthDay) -> Self {
        (md.month, md.day)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

/// Exact-date holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday.  Returns `false` if it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Remove a previously added holiday.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if no holiday has been added.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Holidays recurring on the same month/day every year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurringHolidaySet {
    days: BTreeSet<MonthDay>,
}

impl RecurringHolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recurring holiday.  Returns `false` if it was already present.
    pub fn insert(&mut self, day: MonthDay) -> bool {
        self.days.insert(day)
    }

    /// Remove a recurring holiday.
    pub fn remove(&mut self, day: MonthDay) -> bool {
        self.days.remove(&day)
    }

    /// Return `true` if `date` falls on a recurring holiday, whatever its year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&MonthDay::of(date))
    }

    /// Number of recurring holidays.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Return `true` if no recurring holiday has been added.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Return `true` once every day of a leap year is a holiday.
    pub fn is_saturated(&self) -> bool {
        self.days.len() >= DAYS_IN_LEAP_YEAR
    }

    /// Recurring holidays ordered by month, then day.
    pub fn iter(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.days.iter().copied()
    }
}

impl FromIterator<MonthDay> for RecurringHolidaySet {
    fn from_iter<I: IntoIterator<Item = MonthDay>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
