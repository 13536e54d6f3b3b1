//! `Calendar` trait — which dates are workdays, and walking across them.
//!
//! A calendar only has to answer [`Calendar::is_workday`]; stepping a date by
//! a number of workdays and counting workdays between two dates come for
//! free.  Walking is expressed over [`calendar_days`], a lazy and finite
//! sequence of consecutive dates, so every walk terminates at the edge of the
//! representable date range at the latest.

use chrono::{Datelike, NaiveDate, Weekday};
use wdc_core::errors::{Error, Result};
use wdc_core::Workdays;

/// Direction of a walk over calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    /// Direction matching the sign of `n` (`Forward` for zero).
    pub fn of(n: Workdays) -> Self {
        if n < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Neighbouring date in this direction, or `None` at the end of the
    /// representable range.
    pub fn step(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Direction::Forward => date.succ_opt(),
            Direction::Backward => date.pred_opt(),
        }
    }
}

/// Consecutive calendar days strictly after (or before) `from`.
pub fn calendar_days(from: NaiveDate, direction: Direction) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(direction.step(from), move |d| direction.step(*d))
}

/// A workday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a workday.
    fn is_workday(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is not a workday.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.is_workday(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Step `date` by `n` workdays; `n == 0` returns `date` itself, even if
    /// it is not a workday.
    ///
    /// # Errors
    /// [`Error::Date`] if the walk leaves the representable date range.
    fn advance_workdays(&self, date: NaiveDate, n: Workdays) -> Result<NaiveDate> {
        if n == 0 {
            return Ok(date);
        }
        let skip = usize::try_from(n.unsigned_abs() - 1)
            .map_err(|_| Error::InvalidArgument(format!("{n} workdays")))?;
        calendar_days(date, Direction::of(n))
            .filter(|d| self.is_workday(*d))
            .nth(skip)
            .ok_or_else(|| Error::Date(format!("{n} workdays from {date} is out of range")))
    }

    /// Number of workdays in `(from, to]`, negative when `to < from`.
    fn workdays_between(&self, from: NaiveDate, to: NaiveDate) -> Workdays {
        if to < from {
            return -self.workdays_between(to, from);
        }
        calendar_days(from, Direction::Forward)
            .take_while(|d| *d <= to)
            .filter(|d| self.is_workday(*d))
            .count() as Workdays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct WeekdaysOnly;

    impl Calendar for WeekdaysOnly {
        fn name(&self) -> &str {
            "Weekdays Only"
        }

        fn is_workday(&self, date: NaiveDate) -> bool {
            !self.is_weekend(date)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calendar_days_excludes_origin() {
        let d = date(2021, 12, 31);
        let fwd: Vec<_> = calendar_days(d, Direction::Forward).take(2).collect();
        assert_eq!(fwd, vec![date(2022, 1, 1), date(2022, 1, 2)]);
        let bwd: Vec<_> = calendar_days(d, Direction::Backward).take(1).collect();
        assert_eq!(bwd, vec![date(2021, 12, 30)]);
    }

    #[test]
    fn calendar_days_ends_at_range_limit() {
        assert_eq!(calendar_days(NaiveDate::MAX, Direction::Forward).count(), 0);
        assert_eq!(
            calendar_days(NaiveDate::MIN + chrono::Days::new(2), Direction::Backward).count(),
            2
        );
    }

    #[test]
    fn advance_skips_weekends() {
        let cal = WeekdaysOnly;
        // 2021-12-10 is a Friday
        assert_eq!(cal.advance_workdays(date(2021, 12, 10), 1).unwrap(), date(2021, 12, 13));
        assert_eq!(cal.advance_workdays(date(2021, 12, 13), -1).unwrap(), date(2021, 12, 10));
        assert_eq!(cal.advance_workdays(date(2021, 12, 6), 10).unwrap(), date(2021, 12, 20));
        // zero stays put, even on a weekend
        assert_eq!(cal.advance_workdays(date(2021, 12, 11), 0).unwrap(), date(2021, 12, 11));
    }

    #[test]
    fn advance_past_range_limit_fails() {
        let cal = WeekdaysOnly;
        assert!(matches!(
            cal.advance_workdays(NaiveDate::MAX, 1),
            Err(Error::Date(_))
        ));
    }

    #[test]
    fn workdays_between_counts_half_open_interval() {
        let cal = WeekdaysOnly;
        let mon = date(2021, 12, 6);
        let fri = date(2021, 12, 10);
        // Tue, Wed, Thu, Fri
        assert_eq!(cal.workdays_between(mon, fri), 4);
        assert_eq!(cal.workdays_between(fri, mon), -4);
        assert_eq!(cal.workdays_between(mon, mon), 0);
        // Fri -> next Mon skips the weekend
        assert_eq!(cal.workdays_between(fri, date(2021, 12, 13)), 1);
    }

    #[test]
    fn workdays_between_inverts_advance() {
        let cal = WeekdaysOnly;
        let start = date(2021, 12, 8);
        for n in [-12, -3, -1, 1, 2, 7, 30] {
            let end = cal.advance_workdays(start, n).unwrap();
            assert_eq!(cal.workdays_between(start, end), n, "n = {n}");
        }
    }
}
