//! CUSIP check-digit validation, bulk extraction and look-alike repair.

mod checksum;
mod extract;
mod repair;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scheme::trim_padding;
use crate::{IdentifierScheme, ValidationError};

pub use checksum::{
    compute_cusip_check_digit, cusip_char_value, AT_VALUE, HASH_VALUE, STAR_VALUE,
};
pub use extract::{
    extract_unique_valid_cusips_from_bytes, extract_unique_valid_cusips_from_reader,
    extract_unique_valid_cusips_from_text, extract_valid_cusips_from_bytes,
    extract_valid_cusips_from_reader, extract_valid_cusips_from_text, retain_valid_cusips,
};
pub use repair::{repair_cusip, repair_cusip_detailed, RepairOutcome};

/// Length of a full CUSIP including its check digit.
pub const CUSIP_LEN: usize = 9;
/// Characters that feed the check digit.
pub const CUSIP_PAYLOAD_LEN: usize = 8;

const ISSUER_LEN: usize = 6;

/// Returns `true` when `input` is a 9-character CUSIP with a matching check digit.
///
/// Leading and trailing ASCII whitespace and NUL are ignored; embedded
/// whitespace and other Unicode spaces are not.
/// Letters are accepted in either case.
pub fn is_valid_cusip(input: &str) -> bool {
    check_cusip(trim_padding(input)).is_ok()
}

/// Returns `true` when any character of `input` is outside `[0-9A-Za-z*@#]`.
pub fn contains_invalid_cusip_characters(input: &str) -> bool {
    input.chars().any(|ch| cusip_char_value(ch).is_none())
}

fn check_cusip(trimmed: &str) -> Result<(), ValidationError> {
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len != CUSIP_LEN {
        return Err(ValidationError::InvalidLength {
            scheme: IdentifierScheme::Cusip,
            len,
            expected: "9 characters",
        });
    }

    if let Some((index, ch)) = trimmed
        .chars()
        .enumerate()
        .find(|(_, ch)| cusip_char_value(*ch).is_none())
    {
        return Err(ValidationError::InvalidCharacter {
            scheme: IdentifierScheme::Cusip,
            ch,
            index,
        });
    }

    let expected = compute_cusip_check_digit(trimmed)?;
    let found = trimmed.chars().last().unwrap_or_default();
    if found.to_digit(10) != Some(u32::from(expected)) {
        return Err(ValidationError::CheckDigitMismatch {
            scheme: IdentifierScheme::Cusip,
            expected,
            found,
        });
    }

    Ok(())
}

/// Validated, upper-cased 9-character CUSIP.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cusip(String);

impl Cusip {
    /// Trim, upper-case and validate a CUSIP.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = trim_padding(input).to_ascii_uppercase();
        check_cusip(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Six-character issuer code.
    pub fn issuer(&self) -> &str {
        &self.0[..ISSUER_LEN]
    }

    /// Two-character issue number.
    pub fn issue(&self) -> &str {
        &self.0[ISSUER_LEN..CUSIP_PAYLOAD_LEN]
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[CUSIP_PAYLOAD_LEN] - b'0'
    }
}

impl Display for Cusip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cusip {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Cusip {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Cusip {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Cusip> for String {
    fn from(value: Cusip) -> Self {
        value.0
    }
}

impl AsRef<str> for Cusip {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_known_cusips() {
        for cusip in [
            "222386AA2",
            "31397JYY4",
            "3137A96Y7",
            "00800*AA0",
            "00800@AA8",
            "00800#AA6",
        ] {
            assert!(is_valid_cusip(cusip), "{cusip} should validate");
        }
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!is_valid_cusip("31397JYY5"));
    }

    #[test]
    fn trims_edge_whitespace_only() {
        assert!(is_valid_cusip(" 222386AA2 "));
        assert!(is_valid_cusip("\t222386AA2\n"));
        assert!(!is_valid_cusip("222386 AA2"));
    }

    #[test]
    fn trims_nul_padding() {
        assert!(is_valid_cusip("222386AA2\0"));
        assert!(is_valid_cusip("\0\u{0B}222386AA2"));
    }

    #[test]
    fn rejects_unicode_space_padding() {
        assert!(!is_valid_cusip("222386AA2\u{A0}"));
        assert!(!is_valid_cusip("\u{3000}222386AA2"));
        assert!(!is_valid_cusip("222386AA2\u{2003}"));
        assert!(matches!(
            Cusip::parse("222386AA2\u{A0}"),
            Err(ValidationError::InvalidLength { len: 10, .. })
        ));
    }

    #[test]
    fn rejects_bad_length_and_characters() {
        assert!(!is_valid_cusip(""));
        assert!(!is_valid_cusip("notValidCusip"));
        assert!(!is_valid_cusip("12345678-"));
        assert!(!is_valid_cusip("222386AA"));
    }

    #[test]
    fn rejects_letter_in_check_position() {
        assert!(!is_valid_cusip("222386AAB"));
    }

    #[test]
    fn flags_characters_outside_alphabet() {
        assert!(contains_invalid_cusip_characters("12345678-"));
        assert!(!contains_invalid_cusip_characters("00800#aa6"));
    }

    #[test]
    fn parses_and_normalizes_cusip() {
        let cusip = Cusip::parse(" 222386aa2 ").expect("cusip should parse");
        assert_eq!(cusip.as_str(), "222386AA2");
        assert_eq!(cusip.issuer(), "222386");
        assert_eq!(cusip.issue(), "AA");
        assert_eq!(cusip.check_digit(), 2);
    }

    #[test]
    fn parse_reports_the_failing_rule() {
        let err = Cusip::parse("31397JYY5").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::CheckDigitMismatch {
                expected: 4,
                found: '5',
                ..
            }
        ));

        let err = Cusip::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::Empty);
    }
}
