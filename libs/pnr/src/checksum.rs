//! Check digit validation.
//!
//! The nine significant digits preceding the check digit (two year digits,
//! month, day and the first three serial digits) are weighted 2,1,2,1,...
//! Two-digit products are folded into their digit sum, and the check digit
//! is what brings the total up to the next multiple of ten.

use crate::error::ParseError;

const WEIGHTS: [u8; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Computes the check digit for nine significant digits.
pub fn check_digit(digits: &[u8; 9]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| {
            let product = d * w;
            u32::from(if product > 9 { product - 9 } else { product })
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Validates the check digit of a trimmed, structurally valid number.
///
/// Accepts all four layouts: the century digits of the long forms and the
/// separator of the separated forms do not take part in the sum.
pub fn validate(trimmed: &str) -> Result<(), ParseError> {
    let bytes = trimmed.as_bytes();
    let len = bytes.len();

    let date_start = if len > 11 { 2 } else { 0 };
    let serial_start = date_start + 6 + usize::from(len == 11 || len == 13);

    let mut digits = [0u8; 9];
    for (slot, pos) in digits
        .iter_mut()
        .zip((date_start..date_start + 6).chain(serial_start..serial_start + 3))
    {
        *slot = digit_at(bytes, pos)?;
    }

    let expected = check_digit(&digits);
    let actual = digit_at(bytes, len.wrapping_sub(1))?;

    if expected != actual {
        return Err(ParseError::Checksum { expected, actual });
    }

    Ok(())
}

fn digit_at(bytes: &[u8], pos: usize) -> Result<u8, ParseError> {
    match bytes.get(pos) {
        Some(b @ b'0'..=b'9') => Ok(b - b'0'),
        _ => Err(ParseError::Format),
    }
}
