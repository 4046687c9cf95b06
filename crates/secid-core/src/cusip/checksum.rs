use crate::luhn::{digit_sum, tens_complement};
use crate::scheme::trim_padding;
use crate::{IdentifierScheme, ValidationError};

use super::{CUSIP_LEN, CUSIP_PAYLOAD_LEN};

/// S&P value of `*`.
pub const STAR_VALUE: u8 = 36;
/// S&P value of `@`.
pub const AT_VALUE: u8 = 37;
/// S&P value of `#`.
pub const HASH_VALUE: u8 = 38;

/// Numeric value of a CUSIP character per the S&P encoding.
///
/// Digits map to themselves, letters (either case) to `10..=35` and
/// `*`, `@`, `#` to 36, 37 and 38. Anything else is `None` and must be
/// treated as a validation failure by the caller.
pub const fn cusip_char_value(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'A'..='Z' => Some(ch as u8 - b'A' + 10),
        'a'..='z' => Some(ch as u8 - b'a' + 10),
        '*' => Some(STAR_VALUE),
        '@' => Some(AT_VALUE),
        '#' => Some(HASH_VALUE),
        _ => None,
    }
}

/// Computes the CUSIP check digit from the first eight characters.
///
/// Surrounding ASCII whitespace and NUL are ignored. Both 8-character
/// payloads and full 9-character CUSIPs are accepted; only the first eight
/// characters are read.
///
/// Every second character (odd zero-based index) has its value doubled, then
/// each value contributes its base-10 digit sum. The check digit is the tens
/// complement of the total.
pub fn compute_cusip_check_digit(input: &str) -> Result<u8, ValidationError> {
    let trimmed = trim_padding(input);
    let len = trimmed.chars().count();
    if !(CUSIP_PAYLOAD_LEN..=CUSIP_LEN).contains(&len) {
        return Err(ValidationError::InvalidLength {
            scheme: IdentifierScheme::Cusip,
            len,
            expected: "8 or 9 characters",
        });
    }

    let mut total = 0_u32;
    for (index, ch) in trimmed.chars().take(CUSIP_PAYLOAD_LEN).enumerate() {
        let mut value = match cusip_char_value(ch) {
            Some(value) => u32::from(value),
            None => {
                return Err(ValidationError::InvalidCharacter {
                    scheme: IdentifierScheme::Cusip,
                    ch,
                    index,
                })
            }
        };
        if index % 2 == 1 {
            value *= 2;
        }
        total += digit_sum(value);
    }

    Ok(tens_complement(total))
}
