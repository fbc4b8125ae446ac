//! Proleptic Gregorian calendar bound to a fixed UTC offset.
//!
//! Every calendar decision in this crate (which day an instant falls on,
//! whether a date exists, when a birth date starts) goes through a
//! [`Calendar`] value that is passed explicitly. There is no process-wide
//! timezone state.

use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Offset of Central European standard time, in seconds east of UTC.
const CENTRAL_EUROPEAN_OFFSET_SECS: i32 = 3600;

/// A Gregorian calendar whose wall clock sits at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
}

impl Calendar {
    /// Creates a calendar for the given offset.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// The Swedish calendar, at Central European standard time (UTC+01:00).
    #[must_use]
    pub fn swedish() -> Self {
        Self::new(
            FixedOffset::east_opt(CENTRAL_EUROPEAN_OFFSET_SECS)
                .expect("UTC+01:00 is a valid offset"),
        )
    }

    /// A calendar whose wall clock is UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(FixedOffset::east_opt(0).expect("UTC+00:00 is a valid offset"))
    }

    /// Returns the UTC offset of this calendar.
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the date if `year-month-day` exists in this calendar.
    pub fn date(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Returns the local wall-clock time of `instant`.
    pub fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }

    /// Returns the local calendar date `instant` falls on.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date()
    }

    /// Returns the local calendar year `instant` falls in.
    pub fn year_of(&self, instant: DateTime<Utc>) -> i32 {
        self.local(instant).year()
    }

    /// Returns the instant at which `date` starts in this calendar.
    pub fn midnight(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        date.and_time(NaiveTime::MIN)
            .and_local_timezone(self.offset)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Shifts a wall-clock time back by whole years, keeping month, day and
    /// time of day. A leap day maps onto the last day of February.
    pub fn years_before(&self, local: NaiveDateTime, years: u32) -> Option<NaiveDateTime> {
        local.checked_sub_months(Months::new(years.checked_mul(12)?))
    }

    /// Returns the current instant.
    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Returns the instant at which the current local day started.
    pub fn today(&self) -> Option<DateTime<Utc>> {
        self.midnight(self.local_date(self.now()))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::swedish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_leap_rule() {
        let cal = Calendar::swedish();
        assert!(cal.date(2000, 2, 29).is_some());
        assert!(cal.date(2400, 2, 29).is_some());
        assert!(cal.date(1900, 2, 29).is_none());
        assert!(cal.date(2500, 2, 29).is_none());
        assert!(cal.date(2016, 2, 29).is_some());
        assert!(cal.date(2017, 2, 29).is_none());
    }

    #[test]
    fn test_invalid_components() {
        let cal = Calendar::swedish();
        assert!(cal.date(2017, 0, 1).is_none());
        assert!(cal.date(2017, 13, 1).is_none());
        assert!(cal.date(2017, 4, 31).is_none());
        assert!(cal.date(2017, 1, 0).is_none());
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        let instant = utc(1999, 12, 31, 23, 55);
        assert_eq!(
            Calendar::swedish().local_date(instant),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(
            Calendar::utc().local_date(instant),
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
        );
        assert_eq!(Calendar::swedish().year_of(instant), 2000);
    }

    #[test]
    fn test_midnight() {
        let date = NaiveDate::from_ymd_opt(2017, 12, 12).unwrap();
        assert_eq!(
            Calendar::swedish().midnight(date),
            Some(utc(2017, 12, 11, 23, 0))
        );
        assert_eq!(Calendar::utc().midnight(date), Some(utc(2017, 12, 12, 0, 0)));
    }

    #[test]
    fn test_years_before_clamps_leap_day() {
        let cal = Calendar::swedish();
        let local = NaiveDate::from_ymd_opt(2000, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let shifted = cal.years_before(local, 100).unwrap();
        assert_eq!(
            shifted,
            NaiveDate::from_ymd_opt(1900, 2, 28)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }
}
