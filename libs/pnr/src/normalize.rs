//! Canonical textual form.

use chrono::{Datelike, NaiveDate};

use crate::fields::{Layout, RawFields};

/// Renders the canonical form of a resolved number.
///
/// The 13 character form is already unambiguous and is echoed verbatim, so
/// a coordination number keeps its day offset there. Every other form is
/// rebuilt as `YYYYMMDD-NNNN` from the true birth date.
pub fn normalize(trimmed: &str, fields: &RawFields, birth_date: NaiveDate) -> String {
    match fields.layout {
        Layout::LongSeparated => trimmed.to_string(),
        Layout::Short | Layout::ShortSeparated | Layout::Long => format!(
            "{:04}{:02}{:02}-{}",
            birth_date.year(),
            birth_date.month(),
            birth_date.day(),
            fields.serial
        ),
    }
}
