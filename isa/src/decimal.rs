//! Decimal digit runs, as found in extension version numbers.

use thiserror::Error;

/// Decimal scanning error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    #[error("expected a decimal digit")]
    NotADigit,
    #[error("decimal number does not fit in 32 bits")]
    Overflow,
}

/// Parses the maximal run of decimal digits at the start of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub fn parse(bytes: &[u8]) -> Result<(u32, usize), DecimalError> {
    let len = digit_run(bytes);
    if len == 0 {
        return Err(DecimalError::NotADigit);
    }

    let mut value: u32 = 0;
    for &b in &bytes[..len] {
        let d = u32::from(b - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or(DecimalError::Overflow)?;
    }
    Ok((value, len))
}

/// Returns the length of the run of digits at the start of `bytes`.
pub fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Returns the length of the run of digits at the end of `bytes`.
pub fn trailing_digit_run(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|b| b.is_ascii_digit()).count()
}
