use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scheme::trim_padding;
use crate::{Cusip, IdentifierScheme, Isin, Sedol, ValidationError};

/// A validated identifier of whichever scheme its checksum satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SecurityId {
    Cusip(Cusip),
    Sedol(Sedol),
    Isin(Isin),
}

impl SecurityId {
    /// Classifies free-form input by running each scheme's validator.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = trim_padding(input);
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        match IdentifierScheme::detect(trimmed) {
            Some(IdentifierScheme::Cusip) => Cusip::parse(trimmed).map(Self::Cusip),
            Some(IdentifierScheme::Sedol) => Sedol::parse(trimmed).map(Self::Sedol),
            Some(IdentifierScheme::Isin) => Isin::parse(trimmed).map(Self::Isin),
            None => Err(ValidationError::UnknownSymbol {
                value: trimmed.to_owned(),
            }),
        }
    }

    pub fn scheme(&self) -> IdentifierScheme {
        match self {
            Self::Cusip(_) => IdentifierScheme::Cusip,
            Self::Sedol(_) => IdentifierScheme::Sedol,
            Self::Isin(_) => IdentifierScheme::Isin,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Cusip(cusip) => cusip.as_str(),
            Self::Sedol(sedol) => sedol.as_str(),
            Self::Isin(isin) => isin.as_str(),
        }
    }
}

impl Display for SecurityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for SecurityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SecurityId> for String {
    fn from(value: SecurityId) -> Self {
        match value {
            SecurityId::Cusip(cusip) => cusip.into(),
            SecurityId::Sedol(sedol) => sedol.into(),
            SecurityId::Isin(isin) => isin.into(),
        }
    }
}
