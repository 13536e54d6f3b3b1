//! `WorkdayCalendar` — fractional workday arithmetic over a workday window.
//!
//! A workday is a date that is neither a weekend day, nor an exact holiday,
//! nor a recurring holiday.  Only the time between the window's start and
//! stop boundaries counts, so `0.5` workdays in an 08:00–16:00 calendar are
//! four hours of work.
//!
//! Increments are resolved in three steps:
//! 1. the start timestamp is clamped into the window of its own date;
//! 2. the increment is split into whole workdays and a minute offset that
//!    keeps the landing time inside the window (see [`WorkdayOffset`]);
//! 3. the whole workdays are walked over [`calendar_days`], skipping every
//!    non-workday, and the minute offset is applied on the landing date.
//!
//! [`calendar_days`]: crate::calendar::calendar_days

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use wdc_core::errors::{Error, Result};
use wdc_core::{fail, Decimal, Minutes};

use crate::calendar::Calendar;
use crate::holidays::{HolidaySet, MonthDay, RecurringHolidaySet};
use crate::increment::WorkdayOffset;
use crate::window::WorkdayWindow;

/// A calendar with a configurable workday window, exact holidays, and
/// holidays recurring every year.
///
/// A new calendar works 08:00–16:00 and has no holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkdayCalendar {
    window: WorkdayWindow,
    holidays: HolidaySet,
    recurring: RecurringHolidaySet,
}

impl WorkdayCalendar {
    /// Name reported by [`Calendar::name`].
    pub const NAME: &'static str = "Workday Calendar";

    /// Create a calendar with the default 08:00–16:00 window and no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calendar working inside `window`.
    pub fn with_window(window: WorkdayWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    /// Set the workday start and stop boundaries.
    ///
    /// On error the current window is kept.
    ///
    /// # Errors
    /// See [`WorkdayWindow::new`].
    pub fn set_workday_start_and_stop(
        &mut self,
        start_hour: u32,
        start_minute: u32,
        stop_hour: u32,
        stop_minute: u32,
    ) -> Result<()> {
        self.window = WorkdayWindow::new(start_hour, start_minute, stop_hour, stop_minute)?;
        log::debug!(
            "workday window set to {} ({} minutes)",
            self.window,
            self.window.length_minutes()
        );
        Ok(())
    }

    /// Mark `date` as a holiday.  Adding the same date twice is a no-op.
    pub fn set_holiday(&mut self, date: NaiveDate) {
        if self.holidays.insert(date) {
            log::debug!("holiday added: {date}");
        }
    }

    /// Mark `month`/`day` as a holiday in every year.
    ///
    /// # Errors
    /// [`Error::InvalidRecurringHolidayDate`] unless the pair exists in a
    /// leap year.
    pub fn set_recurring_holiday(&mut self, month: u32, day: u32) -> Result<()> {
        self.add_recurring(MonthDay::new(month, day)?);
        Ok(())
    }

    pub(crate) fn add_recurring(&mut self, md: MonthDay) {
        if self.recurring.insert(md) {
            log::debug!("recurring holiday added: {md}");
        }
    }

    /// Remove an exact holiday.  Returns `false` if it was not set.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(date)
    }

    /// Remove a recurring holiday.  Returns `false` if it was not set.
    ///
    /// # Errors
    /// [`Error::InvalidRecurringHolidayDate`] for an impossible pair.
    pub fn remove_recurring_holiday(&mut self, month: u32, day: u32) -> Result<bool> {
        Ok(self.recurring.remove(MonthDay::new(month, day)?))
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// The workday window.
    pub fn window(&self) -> WorkdayWindow {
        self.window
    }

    /// Length of one workday in minutes.
    pub fn workday_length_minutes(&self) -> Minutes {
        self.window.length_minutes()
    }

    /// Exact holidays.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Recurring holidays.
    pub fn recurring_holidays(&self) -> &RecurringHolidaySet {
        &self.recurring
    }

    /// Number of exact holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Number of recurring holidays.
    pub fn recurring_holiday_count(&self) -> usize {
        self.recurring.len()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Step `start` by `increment` workdays, which may be negative and
    /// fractional.
    ///
    /// A start outside the window is first moved to the nearest boundary of
    /// the same date.  A zero increment returns that clamped start.
    ///
    /// # Errors
    /// * [`Error::AllDaysAreHolidays`] once every day of the year is a
    ///   recurring holiday.
    /// * [`Error::InvalidArgument`] if the increment is too large to count.
    /// * [`Error::Date`] if the result is outside the representable range.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use wdc_time::WorkdayCalendar;
    ///
    /// let cal = WorkdayCalendar::new(); // 08:00-16:00
    /// let tuesday_noon = NaiveDate::from_ymd_opt(2021, 12, 7)
    ///     .unwrap()
    ///     .and_hms_opt(12, 0, 0)
    ///     .unwrap();
    /// let result = cal.workday_increment(tuesday_noon, Decimal::new(125, 2)).unwrap();
    /// assert_eq!(
    ///     result,
    ///     NaiveDate::from_ymd_opt(2021, 12, 8).unwrap().and_hms_opt(14, 0, 0).unwrap()
    /// );
    /// ```
    pub fn workday_increment(&self, start: NaiveDateTime, increment: Decimal) -> Result<NaiveDateTime> {
        if self.recurring.is_saturated() {
            fail!(Error::AllDaysAreHolidays);
        }

        let clamped = self.window.clamp(start);
        if increment.is_zero() {
            return Ok(clamped);
        }

        let length = self.window.length_minutes();
        let offset = WorkdayOffset::split(increment, length, self.window.minutes_since_start(clamped))?;
        log::debug!(
            "{start} + {increment} workdays: clamped to {clamped}, {} workdays {:+} minutes",
            offset.workdays,
            offset.minutes
        );

        let landing = self.advance_workdays(clamped.date(), offset.workdays)?;
        log::trace!("landed on {landing}");
        landing
            .and_time(clamped.time())
            .checked_add_signed(TimeDelta::minutes(offset.minutes))
            .ok_or_else(|| Error::Date(format!("{landing} {:+} minutes is out of range", offset.minutes)))
    }
}

impl Calendar for WorkdayCalendar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_workday(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(date) && !self.recurring.contains(date)
    }
}
