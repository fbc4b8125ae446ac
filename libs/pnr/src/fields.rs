//! Field extraction.
//!
//! The accepted textual forms are, after trimming:
//!
//! ```text
//! YYMMDDNNNN      10 characters
//! YYMMDD-NNNN     11 characters, separator '-' or '+'
//! YYYYMMDDNNNN    12 characters
//! YYYYMMDD-NNNN   13 characters, separator '-' only
//! ```

use crate::error::ParseError;

/// Shortest accepted trimmed length.
pub const MIN_LENGTH: usize = 10;

/// Longest accepted trimmed length.
pub const MAX_LENGTH: usize = 13;

/// The four accepted textual layouts, keyed by trimmed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `YYMMDDNNNN`
    Short,
    /// `YYMMDD-NNNN` or `YYMMDD+NNNN`
    ShortSeparated,
    /// `YYYYMMDDNNNN`
    Long,
    /// `YYYYMMDD-NNNN`
    LongSeparated,
}

impl Layout {
    /// Returns the layout for a trimmed length, or a length error.
    pub fn from_len(len: usize) -> Result<Self, ParseError> {
        match len {
            10 => Ok(Layout::Short),
            11 => Ok(Layout::ShortSeparated),
            12 => Ok(Layout::Long),
            13 => Ok(Layout::LongSeparated),
            other => Err(ParseError::Length(other)),
        }
    }

    /// Number of characters in this layout.
    pub const fn width(self) -> usize {
        match self {
            Layout::Short => 10,
            Layout::ShortSeparated => 11,
            Layout::Long => 12,
            Layout::LongSeparated => 13,
        }
    }

    /// Number of year digits (2 or 4).
    pub const fn year_width(self) -> usize {
        match self {
            Layout::Short | Layout::ShortSeparated => 2,
            Layout::Long | Layout::LongSeparated => 4,
        }
    }

    /// Whether a separator character sits between the date and the serial.
    pub const fn has_separator(self) -> bool {
        matches!(self, Layout::ShortSeparated | Layout::LongSeparated)
    }

    /// Whether the century must be deduced.
    pub const fn is_short(self) -> bool {
        matches!(self, Layout::Short | Layout::ShortSeparated)
    }
}

/// The separator between date and serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// No separator (10 and 12 character forms).
    None,
    /// `-`
    Dash,
    /// `+`, the centennial marker. Only legal in the 11 character form.
    Plus,
}

impl Separator {
    /// Reads the separator for `layout` from the byte at the separator
    /// position, if the layout has one.
    pub fn for_layout(layout: Layout, byte: Option<u8>) -> Result<Self, ParseError> {
        match (layout, byte) {
            (Layout::Short | Layout::Long, _) => Ok(Separator::None),
            (Layout::ShortSeparated, Some(b'-')) => Ok(Separator::Dash),
            (Layout::ShortSeparated, Some(b'+')) => Ok(Separator::Plus),
            (Layout::LongSeparated, Some(b'-')) => Ok(Separator::Dash),
            _ => Err(ParseError::Format),
        }
    }

    /// Whether this is the centennial marker.
    pub const fn is_centennial(self) -> bool {
        matches!(self, Separator::Plus)
    }
}

/// Raw, unvalidated fields of an identity number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub layout: Layout,
    /// Two or four digit year, as written.
    pub year: u32,
    pub month: u32,
    /// Day as written; above 60 for coordination numbers.
    pub day: u32,
    /// The four serial digits including the check digit.
    pub serial: String,
    pub separator: Separator,
}

impl RawFields {
    /// Whether the day carries the coordination number offset.
    pub fn is_coordination(&self) -> bool {
        self.day > crate::resolve::COORDINATION_OFFSET
    }
}

/// Splits a trimmed candidate into its raw fields.
pub fn extract(trimmed: &str) -> Result<RawFields, ParseError> {
    let layout = Layout::from_len(trimmed.chars().count())?;

    // Every position is a digit or an ASCII separator, so anything wider
    // cannot be well formed.
    if !trimmed.is_ascii() {
        return Err(ParseError::Format);
    }

    let mut scanner = Scanner::new(trimmed.as_bytes());
    let year = scanner.digits(layout.year_width())?;
    let month = scanner.digits(2)?;
    let day = scanner.digits(2)?;

    let separator = if layout.has_separator() {
        Separator::for_layout(layout, scanner.bump())?
    } else {
        Separator::None
    };

    let serial_start = scanner.pos;
    scanner.digits(4)?;
    let serial = trimmed[serial_start..scanner.pos].to_string();

    Ok(RawFields {
        layout,
        year,
        month,
        day,
        serial,
        separator,
    })
}

/// Cursor over ASCII bytes reading fixed-width unsigned numbers.
pub(crate) struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.bytes.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Reads exactly `count` decimal digits.
    pub(crate) fn digits(&mut self, count: usize) -> Result<u32, ParseError> {
        let mut value = 0u32;
        for _ in 0..count {
            match self.bump() {
                Some(b @ b'0'..=b'9') => value = value * 10 + u32::from(b - b'0'),
                _ => return Err(ParseError::Format),
            }
        }
        Ok(value)
    }
}
