//! Age in whole years.

use chrono::{DateTime, NaiveDate, Utc};

use crate::calendar::Calendar;

/// Returns the number of whole years from `birth_date` to `at`.
///
/// A year is complete once the anniversary month and day have been reached
/// in the calendar's local time. Instants before the birth date yield 0.
pub fn age(birth_date: NaiveDate, at: DateTime<Utc>, calendar: &Calendar) -> u32 {
    calendar
        .local_date(at)
        .years_since(birth_date)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        // Swedish local time is UTC+01:00.
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap() - chrono::Duration::hours(1)
    }

    #[test]
    fn test_birthday_boundaries() {
        let cal = Calendar::swedish();
        let born = ymd(2000, 1, 1);
        assert_eq!(age(born, local(2022, 1, 1, 0, 0, 0), &cal), 22);
        assert_eq!(age(born, local(2022, 1, 1, 23, 59, 59), &cal), 22);
        assert_eq!(age(born, local(2021, 12, 31, 0, 0, 0), &cal), 21);
        assert_eq!(age(born, local(2021, 12, 31, 23, 59, 59), &cal), 21);
    }

    #[test]
    fn test_never_negative() {
        let cal = Calendar::swedish();
        let born = ymd(2000, 1, 1);
        assert_eq!(age(born, local(2000, 1, 1, 0, 0, 0), &cal), 0);
        assert_eq!(age(born, local(1999, 12, 31, 23, 59, 59), &cal), 0);
        assert_eq!(age(born, local(1975, 4, 23, 12, 12, 12), &cal), 0);
    }

    #[test]
    fn test_local_day_decides() {
        // 23:30 UTC on New Year's Eve is already New Year's Day in Sweden.
        let at = Utc.with_ymd_and_hms(2021, 12, 31, 23, 30, 0).unwrap();
        let born = ymd(2000, 1, 1);
        assert_eq!(age(born, at, &Calendar::swedish()), 22);
        assert_eq!(age(born, at, &Calendar::utc()), 21);
    }

    #[test]
    fn test_long_spans() {
        let cal = Calendar::swedish();
        let at = local(2022, 1, 1, 0, 0, 0);
        assert_eq!(age(ymd(1066, 1, 1), at, &cal), 956);
        assert_eq!(age(ymd(1000, 1, 1), local(2122, 1, 1, 0, 0, 0), &cal), 1122);
    }
}
