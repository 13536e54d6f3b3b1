//! Property tests for workday arithmetic.

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;
use rust_decimal::Decimal;
use wdc_time::{Calendar, WorkdayCalendar};

fn base() -> NaiveDate {
    // a Monday
    NaiveDate::from_ymd_opt(2021, 1, 4).unwrap()
}

/// Calendar with a 09:00–17:30 window and a sprinkling of holidays.
fn calendar() -> WorkdayCalendar {
    let mut cal = WorkdayCalendar::new();
    cal.set_workday_start_and_stop(9, 0, 17, 30).unwrap();
    cal.set_recurring_holiday(1, 1).unwrap();
    cal.set_recurring_holiday(5, 17).unwrap();
    cal.set_recurring_holiday(12, 25).unwrap();
    cal.set_holiday(NaiveDate::from_ymd_opt(2021, 4, 2).unwrap());
    cal.set_holiday(NaiveDate::from_ymd_opt(2022, 4, 15).unwrap());
    cal
}

fn timestamp(day: u64, minute_of_day: i64) -> NaiveDateTime {
    (base() + Days::new(day)).and_hms_opt(0, 0, 0).unwrap() + TimeDelta::minutes(minute_of_day)
}

proptest! {
    #[test]
    fn increment_then_decrement_returns_to_start(
        day in 0u64..730,
        since_open in 1i64..509,
        hundredths in -2_000i64..2_000,
    ) {
        let cal = calendar();
        let start = timestamp(day, 9 * 60 + since_open);
        prop_assume!(cal.is_workday(start.date()));

        let inc = Decimal::new(hundredths, 2);
        let there = cal.workday_increment(start, inc).unwrap();
        let back = cal.workday_increment(there, -inc).unwrap();
        prop_assert_eq!(back, start);
    }

    #[test]
    fn results_land_on_a_workday_inside_the_window(
        day in 0u64..730,
        minute_of_day in 0i64..1_440,
        hundredths in -2_000i64..2_000,
    ) {
        let cal = calendar();
        let start = timestamp(day, minute_of_day);
        prop_assume!(cal.is_workday(start.date()));

        let result = cal.workday_increment(start, Decimal::new(hundredths, 2)).unwrap();
        prop_assert!(cal.is_workday(result.date()));
        prop_assert!(cal.window().contains(result.time()));
    }

    #[test]
    fn whole_increments_keep_the_time_of_day(
        day in 0u64..730,
        since_open in 0i64..=510,
        n in -40i64..40,
    ) {
        let cal = calendar();
        let start = timestamp(day, 9 * 60 + since_open);
        prop_assume!(cal.is_workday(start.date()));

        let result = cal.workday_increment(start, Decimal::from(n)).unwrap();
        prop_assert_eq!(result.time(), start.time());
        prop_assert_eq!(cal.workdays_between(start.date(), result.date()), n);
    }
}
