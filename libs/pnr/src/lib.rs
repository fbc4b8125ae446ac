//! # sepnr
//!
//! Parsing and validation of Swedish personal identity numbers
//! (personnummer) and coordination numbers (samordningsnummer).
//!
//! ## Accepted Forms
//!
//! After trimming surrounding whitespace:
//!
//! - `YYMMDDNNNN` and `YYMMDD-NNNN`, century deduced from a reference instant
//! - `YYMMDD+NNNN`, the bearer is 100 or older at the reference instant
//! - `YYYYMMDDNNNN` and `YYYYMMDD-NNNN`
//!
//! Coordination numbers add 60 to the day of birth.
//!
//! ## Pipeline
//!
//! 1. Reject reference instants before 1947-01-01
//! 2. Extract raw fields by length
//! 3. Validate the check digit
//! 4. Resolve the birth date (coordination offset, century)
//! 5. Normalize and compute the age
//!
//! Any failure yields exactly one [`ParseError`].
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let reference = Utc.with_ymd_and_hms(2017, 12, 12, 0, 0, 0).unwrap();
//! let pnr = sepnr::parse("171210+0005", reference).unwrap();
//!
//! assert_eq!(pnr.normalized(), "19171210-0005");
//! assert_eq!(pnr.age(), 100);
//! ```

mod age;
mod calendar;
mod checksum;
mod error;
mod fields;
mod normalize;
mod onr;
mod personnummer;
mod resolve;

pub use calendar::Calendar;
pub use checksum::check_digit;
pub use error::ParseError;
pub use fields::{Layout, Separator, MAX_LENGTH, MIN_LENGTH};
pub use onr::OrganisationNumber;
pub use personnummer::{Parser, Personnummer, EARLIEST_REFERENCE_DATE};
pub use resolve::COORDINATION_OFFSET;

use chrono::{DateTime, Utc};

/// Parses `input` relative to `reference` in the Swedish calendar.
pub fn parse(input: &str, reference: DateTime<Utc>) -> Result<Personnummer, ParseError> {
    Parser::default().parse(input, reference)
}

/// Parses `input` relative to the current instant in the Swedish calendar.
pub fn parse_now(input: &str) -> Result<Personnummer, ParseError> {
    Parser::default().parse_now(input)
}
