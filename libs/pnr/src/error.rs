//! Error types for identity number parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating an identity number.
///
/// Exactly one variant is produced per failed attempt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The trimmed input is not 10 to 13 characters long.
    #[error("wrong length {0}")]
    Length(usize),

    /// A character other than a digit or the permitted separator was found.
    #[error("invalid format")]
    Format,

    /// The check digit does not match the one computed from the other digits.
    #[error("checksum mismatch, was {actual} but expected {expected}")]
    Checksum { expected: u8, actual: u8 },

    /// The encoded birth date does not exist in the calendar.
    #[error("birth date doesn't exist")]
    Date,

    /// The reference instant precedes the earliest supported reference date.
    #[error("invalid reference date")]
    ReferenceDate,
}

impl ParseError {
    /// Returns true if this error indicates a length violation.
    pub fn is_length_error(&self) -> bool {
        matches!(self, ParseError::Length(_))
    }

    /// Returns true if this error indicates a lexical violation.
    pub fn is_format_error(&self) -> bool {
        matches!(self, ParseError::Format)
    }

    /// Returns true if this error indicates a check digit mismatch.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, ParseError::Checksum { .. })
    }

    /// Returns true if this error indicates a non-existent birth date.
    pub fn is_date_error(&self) -> bool {
        matches!(self, ParseError::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ParseError::Length(9).to_string(), "wrong length 9");
        assert_eq!(ParseError::Format.to_string(), "invalid format");
        assert_eq!(
            ParseError::Checksum {
                expected: 5,
                actual: 3
            }
            .to_string(),
            "checksum mismatch, was 3 but expected 5"
        );
        assert_eq!(ParseError::Date.to_string(), "birth date doesn't exist");
        assert_eq!(
            ParseError::ReferenceDate.to_string(),
            "invalid reference date"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(ParseError::Length(14).is_length_error());
        assert!(ParseError::Format.is_format_error());
        assert!(ParseError::Checksum {
            expected: 0,
            actual: 1
        }
        .is_checksum_error());
        assert!(ParseError::Date.is_date_error());
        assert!(!ParseError::ReferenceDate.is_date_error());
    }
}
