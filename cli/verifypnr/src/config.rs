//! Run configuration.
//!
//! Resolves the reference instant and calendar from flags and environment
//! variables (`VERIFYPNR_*`, wired through clap).

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use sepnr::Calendar;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Accepted reference date format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which kind of number the arguments are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Personal,
    Organisation,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Calendar all dates are interpreted in.
    pub calendar: Calendar,

    /// Reference date as shown to the user.
    pub reference_date: NaiveDate,

    /// Local midnight of the reference date.
    pub reference: DateTime<Utc>,

    pub format: OutputFormat,

    pub kind: NumberKind,
}

impl Settings {
    /// Builds settings from raw flag values.
    ///
    /// Without an explicit reference date, the reference is the start of
    /// the current day in the configured calendar.
    pub fn resolve(
        reference_date: Option<&str>,
        utc_offset: &str,
        format: OutputFormat,
        organisation: bool,
    ) -> Result<Self, CliError> {
        let calendar = Calendar::new(parse_utc_offset(utc_offset)?);

        let reference = match reference_date {
            Some(s) => {
                let date = parse_reference_date(s)?;
                calendar
                    .midnight(date)
                    .ok_or(CliError::UnrepresentableDate(date))?
            }
            None => calendar.today().ok_or_else(|| {
                CliError::UnrepresentableDate(calendar.local_date(calendar.now()))
            })?,
        };
        let reference_date = calendar.local_date(reference);

        Ok(Self {
            calendar,
            reference_date,
            reference,
            format,
            kind: if organisation {
                NumberKind::Organisation
            } else {
                NumberKind::Personal
            },
        })
    }
}

/// Parses a `YYYY-MM-DD` reference date.
pub fn parse_reference_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| CliError::InvalidReferenceDate(s.to_string()))
}

/// Parses a `+HH:MM` / `-HH:MM` UTC offset.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, CliError> {
    s.trim()
        .parse::<FixedOffset>()
        .map_err(|_| CliError::InvalidUtcOffset(s.to_string()))
}
