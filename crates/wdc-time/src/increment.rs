//! Splitting a fractional workday increment into whole workdays and minutes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use wdc_core::errors::{Error, Result};
use wdc_core::{Minutes, Workdays};

/// A workday increment resolved against a workday length and a position
/// inside the window.
///
/// Adding `minutes` to a time that is `since_start` minutes into the window
/// lands inside the window again, boundaries included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayOffset {
    /// Whole workdays to walk; the sign gives the direction.
    pub workdays: Workdays,
    /// Minutes to add on the landing date; may be negative.
    pub minutes: Minutes,
}

impl WorkdayOffset {
    /// Split `increment` for a workday of `length` minutes, starting
    /// `since_start` minutes after the window opens.
    ///
    /// The whole part is truncated toward zero and the fractional part is
    /// rounded to the nearest minute (ties to even).  When the minutes would
    /// fall before the window opens a workday is borrowed; when they would
    /// fall after it closes a workday is carried.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the increment does not fit the day
    /// counter.
    pub fn split(increment: Decimal, length: Minutes, since_start: Minutes) -> Result<Self> {
        let whole = increment.trunc();
        let too_large = || Error::InvalidArgument(format!("increment {increment} is too large"));
        let mut workdays = whole.to_i64().ok_or_else(too_large)?;
        let mut minutes = (increment - whole)
            .checked_mul(Decimal::from(length))
            .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
            .and_then(|m| m.to_i64())
            .ok_or_else(too_large)?;

        if minutes + since_start < 0 {
            workdays = workdays.checked_sub(1).ok_or_else(too_large)?;
            minutes += length;
        }
        if minutes + since_start > length {
            workdays = workdays.checked_add(1).ok_or_else(too_large)?;
            minutes -= length;
        }
        Ok(Self { workdays, minutes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn split(increment: &str, length: Minutes, since_start: Minutes) -> (Workdays, Minutes) {
        let o = WorkdayOffset::split(dec(increment), length, since_start).unwrap();
        (o.workdays, o.minutes)
    }

    #[test]
    fn whole_part_truncates_toward_zero() {
        assert_eq!(split("1.25", 480, 240), (1, 120));
        assert_eq!(split("-1.25", 480, 240), (-1, -120));
        assert_eq!(split("3", 480, 0), (3, 0));
        assert_eq!(split("-0", 480, 0), (0, 0));
    }

    #[test]
    fn borrows_a_workday_before_the_window_opens() {
        // Wednesday noon minus 1.75 workdays
        assert_eq!(split("-1.75", 480, 240), (-2, 120));
        // 08:18 in an 08:12-08:52 window minus 1.25 workdays
        assert_eq!(split("-1.25", 40, 6), (-2, 30));
    }

    #[test]
    fn carries_a_workday_after_the_window_closes() {
        // Wednesday noon plus 1.75 workdays
        assert_eq!(split("1.75", 480, 240), (2, -120));
        // landing exactly on the stop boundary does not carry
        assert_eq!(split("0.5", 480, 240), (0, 240));
    }

    #[test]
    fn fraction_rounds_half_to_even() {
        // 0.5 * 5 = 2.5 -> 2, 0.7 * 5 = 3.5 -> 4
        assert_eq!(split("0.5", 5, 0), (0, 2));
        assert_eq!(split("0.7", 5, 0), (0, 4));
        assert_eq!(split("-0.5", 5, 5), (0, -2));
    }

    #[test]
    fn oversized_increment_is_rejected() {
        let huge = Decimal::MAX;
        assert!(matches!(
            WorkdayOffset::split(huge, 480, 0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
