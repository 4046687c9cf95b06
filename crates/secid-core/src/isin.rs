//! ISIN validation and construction.
//!
//! An ISIN is a two-letter country code, a nine-character national security
//! identifier (NSIN) and a check digit. The check digit is a Luhn sum over
//! the decimal expansion of the base-36 character values, so `A` becomes the
//! two digits `1 0` and `Z` becomes `3 5`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::luhn::{double_add_double, tens_complement};
use crate::scheme::trim_padding;
use crate::{Cusip, IdentifierScheme, Sedol, ValidationError};

/// Length of a full ISIN including its check digit.
pub const ISIN_LEN: usize = 12;

const COUNTRY_LEN: usize = 2;
const ISIN_PAYLOAD_LEN: usize = ISIN_LEN - 1;

/// Returns `true` when `input` has the ISIN shape (two letters, nine
/// alphanumerics, one digit; either case) and its Luhn sum is a multiple of ten.
pub fn is_valid_isin(input: &str) -> bool {
    check_isin(input).is_ok()
}

/// Computes the ISIN check digit from the country code and NSIN.
///
/// Surrounding whitespace is ignored and a full 12-character ISIN is
/// accepted; only the first eleven characters are read.
pub fn compute_isin_check_digit(input: &str) -> Result<u8, ValidationError> {
    let trimmed = trim_padding(input);
    let len = trimmed.chars().count();
    if !(ISIN_PAYLOAD_LEN..=ISIN_LEN).contains(&len) {
        return Err(ValidationError::InvalidLength {
            scheme: IdentifierScheme::Isin,
            len,
            expected: "11 or 12 characters",
        });
    }

    let payload: Vec<char> = trimmed.chars().take(ISIN_PAYLOAD_LEN).collect();
    check_shape(&payload)?;
    Ok(tens_complement(double_add_double(&expand(&payload), true)))
}

fn check_isin(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let chars: Vec<char> = input.chars().collect();
    if chars.len() != ISIN_LEN {
        return Err(ValidationError::InvalidLength {
            scheme: IdentifierScheme::Isin,
            len: chars.len(),
            expected: "12 characters",
        });
    }

    check_shape(&chars)?;
    let found = chars[ISIN_PAYLOAD_LEN];
    if !found.is_ascii_digit() {
        return Err(ValidationError::InvalidCharacter {
            scheme: IdentifierScheme::Isin,
            ch: found,
            index: ISIN_PAYLOAD_LEN,
        });
    }

    if double_add_double(&expand(&chars), false) % 10 != 0 {
        return Err(ValidationError::CheckDigitMismatch {
            scheme: IdentifierScheme::Isin,
            expected: tens_complement(double_add_double(
                &expand(&chars[..ISIN_PAYLOAD_LEN]),
                true,
            )),
            found,
        });
    }

    Ok(())
}

/// Checks the country code and NSIN part of `chars`; a check digit, if
/// present, is left to the caller.
fn check_shape(chars: &[char]) -> Result<(), ValidationError> {
    for (index, &ch) in chars.iter().enumerate().take(ISIN_PAYLOAD_LEN) {
        if !ch.is_ascii_alphanumeric() {
            return Err(ValidationError::InvalidCharacter {
                scheme: IdentifierScheme::Isin,
                ch,
                index,
            });
        }
        if index < COUNTRY_LEN && !ch.is_ascii_alphabetic() {
            return Err(ValidationError::InvalidCountryCode {
                value: chars.iter().take(COUNTRY_LEN).collect(),
            });
        }
    }
    Ok(())
}

/// Decimal digits of each character's base-36 value, concatenated.
/// Callers pass ASCII alphanumerics only.
fn expand(chars: &[char]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(chars.len() * 2);
    for value in chars.iter().filter_map(|ch| ch.to_digit(36)) {
        let value = value as u8;
        if value >= 10 {
            digits.push(value / 10);
        }
        digits.push(value % 10);
    }
    digits
}

fn normalize_country(country: &str) -> Result<String, ValidationError> {
    let country = trim_padding(country).to_ascii_uppercase();
    if country.len() != COUNTRY_LEN || !country.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidCountryCode { value: country });
    }
    Ok(country)
}

/// Validated, upper-cased 12-character ISIN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isin(String);

impl Isin {
    /// Trim, upper-case and validate an ISIN.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = trim_padding(input).to_ascii_uppercase();
        check_isin(&normalized)?;
        Ok(Self(normalized))
    }

    /// Builds the ISIN for a CUSIP-numbered security, e.g. `US` + `931142103`.
    pub fn from_cusip(country: &str, cusip: &Cusip) -> Result<Self, ValidationError> {
        Self::from_nsin(normalize_country(country)?, cusip.as_str())
    }

    /// Builds the ISIN for a SEDOL-numbered security; the SEDOL is
    /// left-padded with zeros to nine characters.
    pub fn from_sedol(country: &str, sedol: &Sedol) -> Result<Self, ValidationError> {
        Self::from_nsin(normalize_country(country)?, &format!("00{sedol}"))
    }

    fn from_nsin(country: String, nsin: &str) -> Result<Self, ValidationError> {
        let mut isin = country;
        isin.push_str(nsin);
        let check = compute_isin_check_digit(&isin)?;
        isin.push(char::from(b'0' + check));
        Ok(Self(isin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..COUNTRY_LEN]
    }

    /// Nine-character national security identifier.
    pub fn nsin(&self) -> &str {
        &self.0[COUNTRY_LEN..ISIN_PAYLOAD_LEN]
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[ISIN_PAYLOAD_LEN] - b'0'
    }

    /// The embedded CUSIP of a `US` or `CA` ISIN, when the NSIN validates as one.
    pub fn cusip(&self) -> Option<Cusip> {
        if !matches!(self.country_code(), "US" | "CA") {
            return None;
        }
        Cusip::parse(self.nsin()).ok()
    }
}

impl Display for Isin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Isin {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Isin {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Isin> for String {
    fn from(value: Isin) -> Self {
        value.0
    }
}
