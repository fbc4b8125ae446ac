//! The parse entry point and its result.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::age::age;
use crate::calendar::Calendar;
use crate::checksum;
use crate::error::ParseError;
use crate::fields::extract;
use crate::normalize::normalize;
use crate::resolve::resolve;

/// Personnummer were introduced in 1947. Reference dates before that cannot
/// meaningfully resolve a century.
pub const EARLIEST_REFERENCE_DATE: (i32, u32, u32) = (1947, 1, 1);

/// A validated personal identity number or coordination number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Personnummer {
    input: String,
    normalized: String,
    birth_date: NaiveDate,
    born_at: DateTime<Utc>,
    coordination_number: bool,
    serial: String,
    age: u32,
    #[serde(skip)]
    calendar: Calendar,
}

impl Personnummer {
    /// Parses `input` relative to `reference` in the Swedish calendar.
    pub fn parse(input: &str, reference: DateTime<Utc>) -> Result<Self, ParseError> {
        Parser::default().parse(input, reference)
    }

    /// The text as given, untrimmed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The canonical form, `YYYYMMDD-NNNN`.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The true birth date, with any coordination offset removed.
    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    #[must_use]
    pub fn birth_month(&self) -> u32 {
        self.birth_date.month()
    }

    #[must_use]
    pub fn birth_day(&self) -> u32 {
        self.birth_date.day()
    }

    /// The instant of local midnight on the birth date.
    #[must_use]
    pub fn born_at(&self) -> DateTime<Utc> {
        self.born_at
    }

    /// Whether this is a coordination number (samordningsnummer).
    #[must_use]
    pub fn is_coordination_number(&self) -> bool {
        self.coordination_number
    }

    /// The four serial digits as written, check digit included.
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Age in whole years at the reference instant used when parsing.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Age in whole years at `at`.
    #[must_use]
    pub fn age_at(&self, at: DateTime<Utc>) -> u32 {
        age(self.birth_date, at, &self.calendar)
    }
}

impl std::fmt::Display for Personnummer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl std::str::FromStr for Personnummer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::default().parse_now(s)
    }
}

/// Parses identity numbers in a given calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    calendar: Calendar,
}

impl Parser {
    #[must_use]
    pub const fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    #[must_use]
    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Parses `input` relative to the current instant.
    pub fn parse_now(&self, input: &str) -> Result<Personnummer, ParseError> {
        self.parse(input, self.calendar.now())
    }

    /// Parses `input`, resolving two-digit years and the age relative to
    /// `reference`.
    pub fn parse(
        &self,
        input: &str,
        reference: DateTime<Utc>,
    ) -> Result<Personnummer, ParseError> {
        self.try_parse(input, reference).inspect_err(|err| {
            debug!(input, error = %err, "identity number rejected");
        })
    }

    fn try_parse(
        &self,
        input: &str,
        reference: DateTime<Utc>,
    ) -> Result<Personnummer, ParseError> {
        let (y, m, d) = EARLIEST_REFERENCE_DATE;
        let floor = self.calendar.date(y, m, d).ok_or(ParseError::ReferenceDate)?;
        if self.calendar.local_date(reference) < floor {
            return Err(ParseError::ReferenceDate);
        }

        let trimmed = input.trim();
        let fields = extract(trimmed)?;
        checksum::validate(trimmed)?;
        let birth_date = resolve(&fields, reference, &self.calendar)?;
        let born_at = self.calendar.midnight(birth_date).ok_or(ParseError::Date)?;

        Ok(Personnummer {
            input: input.to_string(),
            normalized: normalize(trimmed, &fields, birth_date),
            birth_date,
            born_at,
            coordination_number: fields.is_coordination(),
            serial: fields.serial,
            age: age(birth_date, reference, &self.calendar),
            calendar: self.calendar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Calendar::swedish()
            .midnight(NaiveDate::from_ymd_opt(y, m, d).unwrap())
            .unwrap()
    }

    #[test]
    fn test_parse_fields() {
        let pnr = Personnummer::parse(" 171270-0002 ", reference(2017, 12, 12)).unwrap();
        assert_eq!(pnr.input(), " 171270-0002 ");
        assert_eq!(pnr.normalized(), "20171210-0002");
        assert_eq!(
            (pnr.birth_year(), pnr.birth_month(), pnr.birth_day()),
            (2017, 12, 10)
        );
        assert!(pnr.is_coordination_number());
        assert_eq!(pnr.serial(), "0002");
        assert_eq!(pnr.born_at(), reference(2017, 12, 10));
        assert_eq!(pnr.age(), 0);
    }

    #[test]
    fn test_display_is_normalized() {
        let pnr = Personnummer::parse("1712100005", reference(2017, 12, 12)).unwrap();
        assert_eq!(pnr.to_string(), "20171210-0005");
    }

    #[test]
    fn test_reference_floor_checked_first() {
        // Would otherwise be a length error.
        assert_eq!(
            Personnummer::parse("123", reference(1946, 12, 31)),
            Err(ParseError::ReferenceDate)
        );
    }

    #[test]
    fn test_checksum_before_date() {
        assert_eq!(
            Personnummer::parse("20170229-1235", reference(2017, 12, 12)),
            Err(ParseError::Checksum {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_from_str_uses_now() {
        let pnr: Personnummer = "20000101-0008".parse().unwrap();
        assert!(pnr.age() >= 26);
    }

    #[test]
    fn test_parser_calendar_decides_century() {
        use chrono::TimeZone;
        let at = Utc.with_ymd_and_hms(1999, 12, 31, 23, 55, 0).unwrap();

        let swedish = Parser::new(Calendar::swedish());
        assert_eq!(
            swedish.parse("000101-0008", at).unwrap().normalized(),
            "20000101-0008"
        );

        let utc = Parser::new(Calendar::utc());
        assert_eq!(
            utc.parse("000101-0008", at).unwrap().normalized(),
            "19000101-0008"
        );
    }

    #[test]
    fn test_serialize() {
        let pnr = Personnummer::parse("171210-0005", reference(2017, 12, 12)).unwrap();
        let json = serde_json::to_value(&pnr).unwrap();
        assert_eq!(json["normalized"], "20171210-0005");
        assert_eq!(json["birth_date"], "2017-12-10");
        assert_eq!(json["coordination_number"], false);
        assert_eq!(json["age"], 0);
        assert!(json.get("calendar").is_none());
    }
}
