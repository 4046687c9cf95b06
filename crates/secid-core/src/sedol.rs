//! SEDOL validation: vowel-free, 7 characters, weighted checksum.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::luhn::tens_complement;
use crate::scheme::trim_padding;
use crate::{IdentifierScheme, ValidationError};

/// Length of a full SEDOL including its check digit.
pub const SEDOL_LEN: usize = 7;
/// Position weights applied to each SEDOL character value.
pub const SEDOL_WEIGHTS: [u32; SEDOL_LEN] = [1, 3, 1, 7, 3, 9, 1];

const SEDOL_PAYLOAD_LEN: usize = SEDOL_LEN - 1;
const VOWELS: &str = "AEIOU";

/// Returns `true` when `input` is a vowel-free 7-character SEDOL whose
/// weighted character sum is a multiple of ten. Letters may be either case.
pub fn is_valid_sedol(input: &str) -> bool {
    check_sedol(input).is_ok()
}

/// Computes the SEDOL check digit from the first six characters.
///
/// Surrounding whitespace is ignored and a full 7-character SEDOL is
/// accepted; only the first six characters are read.
pub fn compute_sedol_check_digit(input: &str) -> Result<u8, ValidationError> {
    let upper = trim_padding(input).to_ascii_uppercase();
    reject_vowels(&upper)?;

    let len = upper.chars().count();
    if !(SEDOL_PAYLOAD_LEN..=SEDOL_LEN).contains(&len) {
        return Err(ValidationError::InvalidLength {
            scheme: IdentifierScheme::Sedol,
            len,
            expected: "6 or 7 characters",
        });
    }

    let payload: String = upper.chars().take(SEDOL_PAYLOAD_LEN).collect();
    Ok(tens_complement(weighted_sum(&payload)?))
}

fn check_sedol(input: &str) -> Result<(), ValidationError> {
    let upper = input.to_ascii_uppercase();
    reject_vowels(&upper)?;

    if upper.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = upper.chars().count();
    if len != SEDOL_LEN {
        return Err(ValidationError::InvalidLength {
            scheme: IdentifierScheme::Sedol,
            len,
            expected: "7 characters",
        });
    }

    let total = weighted_sum(&upper)?;
    if total % 10 != 0 {
        let payload = &upper[..SEDOL_PAYLOAD_LEN];
        return Err(ValidationError::CheckDigitMismatch {
            scheme: IdentifierScheme::Sedol,
            expected: tens_complement(weighted_sum(payload)?),
            found: upper.chars().last().unwrap_or_default(),
        });
    }

    Ok(())
}

fn reject_vowels(upper: &str) -> Result<(), ValidationError> {
    match upper.chars().enumerate().find(|(_, ch)| VOWELS.contains(*ch)) {
        Some((index, ch)) => Err(ValidationError::SedolVowel { ch, index }),
        None => Ok(()),
    }
}

/// Digits count as 0-9 and letters as 10-35, each multiplied by its weight.
fn weighted_sum(upper: &str) -> Result<u32, ValidationError> {
    upper
        .chars()
        .zip(SEDOL_WEIGHTS)
        .enumerate()
        .try_fold(0_u32, |total, (index, (ch, weight))| {
            let value = sedol_char_value(ch).ok_or(ValidationError::InvalidCharacter {
                scheme: IdentifierScheme::Sedol,
                ch,
                index,
            })?;
            Ok(total + value * weight)
        })
}

fn sedol_char_value(ch: char) -> Option<u32> {
    if ch.is_ascii_alphanumeric() {
        ch.to_digit(36)
    } else {
        None
    }
}

/// Validated, upper-cased 7-character SEDOL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sedol(String);

impl Sedol {
    /// Trim, upper-case and validate a SEDOL.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = trim_padding(input).to_ascii_uppercase();
        check_sedol(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final character. Issued SEDOLs end in a digit, but the weighted sum
    /// alone also admits a letter here.
    pub fn check_char(&self) -> char {
        char::from(self.0.as_bytes()[SEDOL_PAYLOAD_LEN])
    }
}

impl Display for Sedol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sedol {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Sedol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Sedol> for String {
    fn from(value: Sedol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_known_sedols() {
        for sedol in ["B000009", "0263494", "B0YBKJ7", "2936921", "b0yblh2"] {
            assert!(is_valid_sedol(sedol), "{sedol} should validate");
        }
    }

    #[test]
    fn rejects_bad_checksum_without_vowels() {
        assert!(!is_valid_sedol("CCCBDD4"));
        let err = Sedol::parse("CCCBDD4").expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::CheckDigitMismatch {
                scheme: IdentifierScheme::Sedol,
                expected: 7,
                found: '4',
            }
        );
    }

    #[test]
    fn rejects_vowels_anywhere() {
        for sedol in [
            "A000009", "BE00009", "B0I0009", "B000O09", "B0000U9", "b0000a9",
        ] {
            assert!(!is_valid_sedol(sedol), "{sedol} should be rejected");
        }
        let err = Sedol::parse("CCCBDE4").expect_err("must fail");
        assert_eq!(err, ValidationError::SedolVowel { ch: 'E', index: 5 });
    }

    #[test]
    fn digits_never_match_vowels() {
        assert!(reject_vowels("0123456789").is_ok());
    }

    #[test]
    fn rejects_wrong_length_and_symbols() {
        assert!(!is_valid_sedol(""));
        assert!(!is_valid_sedol("B00000"));
        assert!(!is_valid_sedol("B0000090"));
        assert!(!is_valid_sedol("B00-009"));
        assert!(!is_valid_sedol(" B000009"));
    }

    #[test]
    fn computes_check_digit() {
        assert_eq!(compute_sedol_check_digit("B00000"), Ok(9));
        assert_eq!(compute_sedol_check_digit("026349"), Ok(4));
        assert_eq!(compute_sedol_check_digit("CCCBDD4"), Ok(7));
        assert!(matches!(
            compute_sedol_check_digit("A00000"),
            Err(ValidationError::SedolVowel { .. })
        ));
        assert!(matches!(
            compute_sedol_check_digit("B0000"),
            Err(ValidationError::InvalidLength { .. })
        ));
    }

    #[test]
    fn parses_and_normalizes_sedol() {
        let sedol = Sedol::parse(" b0ybkj7 ").expect("sedol should parse");
        assert_eq!(sedol.as_str(), "B0YBKJ7");
        assert_eq!(sedol.check_char(), '7');
    }
}
