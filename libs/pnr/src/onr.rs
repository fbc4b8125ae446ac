//! Organisation numbers (organisationsnummer).
//!
//! Same digit grouping and check digit as personal identity numbers, but the
//! first six digits are not a date. The long forms carry a `16` prefix, and
//! there is no centennial marker.

use serde::Serialize;

use crate::checksum;
use crate::error::ParseError;
use crate::fields::{Layout, Scanner};

/// Prefix of the 12 and 13 character forms.
const LONG_PREFIX: &str = "16";

/// A validated organisation number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganisationNumber {
    input: String,
    normalized: String,
}

impl OrganisationNumber {
    /// Parses and validates an organisation number.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let layout = Layout::from_len(trimmed.chars().count())?;

        if !trimmed.is_ascii() {
            return Err(ParseError::Format);
        }

        let body = if layout.is_short() {
            trimmed
        } else {
            trimmed.strip_prefix(LONG_PREFIX).ok_or(ParseError::Format)?
        };

        let mut scanner = Scanner::new(body.as_bytes());
        scanner.digits(6)?;
        if layout.has_separator() && scanner.bump() != Some(b'-') {
            return Err(ParseError::Format);
        }
        scanner.digits(4)?;

        checksum::validate(trimmed)?;

        let digits: String = body.chars().filter(char::is_ascii_digit).collect();
        let (group, serial) = digits.split_at(6);

        Ok(Self {
            input: input.to_string(),
            normalized: format!("{group}-{serial}"),
        })
    }

    /// The text as given, untrimmed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The canonical form, `NNNNNN-NNNN`.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl std::fmt::Display for OrganisationNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl std::str::FromStr for OrganisationNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
