use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{is_valid_cusip, is_valid_isin, is_valid_sedol, ValidationError};

/// Security identifier schemes with a check-digit algorithm in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierScheme {
    Cusip,
    Sedol,
    Isin,
}

impl IdentifierScheme {
    pub const ALL: [Self; 3] = [Self::Cusip, Self::Sedol, Self::Isin];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cusip => "cusip",
            Self::Sedol => "sedol",
            Self::Isin => "isin",
        }
    }

    /// Conventional upper-case name used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cusip => "CUSIP",
            Self::Sedol => "SEDOL",
            Self::Isin => "ISIN",
        }
    }

    /// Full identifier length including the check digit.
    pub const fn expected_len(self) -> usize {
        match self {
            Self::Cusip => crate::cusip::CUSIP_LEN,
            Self::Sedol => crate::sedol::SEDOL_LEN,
            Self::Isin => crate::isin::ISIN_LEN,
        }
    }

    /// Runs this scheme's validator over `input`.
    pub fn validates(self, input: &str) -> bool {
        match self {
            Self::Cusip => is_valid_cusip(input),
            Self::Sedol => is_valid_sedol(input),
            Self::Isin => is_valid_isin(input),
        }
    }

    /// Returns the scheme whose checksum accepts `input`, if any.
    ///
    /// Edge padding is trimmed first. Scheme lengths are disjoint, so at most one
    /// scheme can match.
    pub fn detect(input: &str) -> Option<Self> {
        let trimmed = trim_padding(input);
        Self::ALL
            .into_iter()
            .find(|scheme| trimmed.len() == scheme.expected_len() && scheme.validates(trimmed))
    }
}

/// Strips the padding around pasted identifiers: ASCII whitespace, vertical
/// tab and NUL. Other Unicode spaces are kept and fail validation.
pub(crate) fn trim_padding(input: &str) -> &str {
    input.trim_matches(|ch: char| ch.is_ascii_whitespace() || ch == '\u{0B}' || ch == '\0')
}

impl Display for IdentifierScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierScheme {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cusip" => Ok(Self::Cusip),
            "sedol" => Ok(Self::Sedol),
            "isin" => Ok(Self::Isin),
            other => Err(ValidationError::InvalidScheme {
                value: other.to_owned(),
            }),
        }
    }
}
