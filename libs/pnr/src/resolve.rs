//! Birth date resolution.
//!
//! Removes the coordination number day offset and, for two-digit years,
//! deduces the century relative to a reference instant.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{debug, trace};

use crate::calendar::Calendar;
use crate::error::ParseError;
use crate::fields::RawFields;

/// Added to the day of birth in coordination numbers.
pub const COORDINATION_OFFSET: u32 = 60;

/// Resolves the true birth date of `fields`.
///
/// Four-digit years are taken as written. Two-digit years are tried in the
/// reference century first and in the one before it second; there is no
/// third attempt.
pub fn resolve(
    fields: &RawFields,
    reference: DateTime<Utc>,
    calendar: &Calendar,
) -> Result<NaiveDate, ParseError> {
    let day = true_day(fields.day);

    if !fields.layout.is_short() {
        return calendar
            .date(year_i32(fields.year)?, fields.month, day)
            .ok_or(ParseError::Date);
    }

    deduce_century(
        fields.year,
        fields.month,
        day,
        fields.separator.is_centennial(),
        reference,
        calendar,
    )
}

/// Removes the coordination offset from a day as written.
pub fn true_day(day: u32) -> u32 {
    if day > COORDINATION_OFFSET {
        day - COORDINATION_OFFSET
    } else {
        day
    }
}

fn deduce_century(
    two_digit_year: u32,
    month: u32,
    day: u32,
    centennial: bool,
    reference: DateTime<Utc>,
    calendar: &Calendar,
) -> Result<NaiveDate, ParseError> {
    let yy = year_i32(two_digit_year)?;
    let mut present = calendar.local(reference);
    let mut century = present.year() / 100;

    if centennial {
        century -= 1;
        present = calendar
            .years_before(present, 100)
            .ok_or(ParseError::Date)?;
    }

    let first = calendar.date(century * 100 + yy, month, day);
    let accepted = match first {
        Some(candidate) if centennial => candidate.year() <= present.year(),
        Some(candidate) => candidate <= present.date(),
        None => false,
    };

    if let Some(candidate) = first.filter(|_| accepted) {
        trace!(%candidate, "birth date in reference century");
        return Ok(candidate);
    }

    debug!(
        century = century * 100,
        exists = first.is_some(),
        "candidate rejected, trying previous century"
    );

    calendar
        .date((century - 1) * 100 + yy, month, day)
        .ok_or(ParseError::Date)
}

fn year_i32(year: u32) -> Result<i32, ParseError> {
    i32::try_from(year).map_err(|_| ParseError::Date)
}
