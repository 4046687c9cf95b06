use thiserror::Error;

use crate::IdentifierScheme;

/// Validation and check-digit errors exposed by `secid-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identifier cannot be empty")]
    Empty,
    #[error("{} length {len} outside expected {expected}", .scheme.label())]
    InvalidLength {
        scheme: IdentifierScheme,
        len: usize,
        expected: &'static str,
    },
    #[error("{} contains invalid character '{ch}' at index {index}", .scheme.label())]
    InvalidCharacter {
        scheme: IdentifierScheme,
        ch: char,
        index: usize,
    },
    #[error("{} check digit mismatch: computed {expected}, found '{found}'", .scheme.label())]
    CheckDigitMismatch {
        scheme: IdentifierScheme,
        expected: u8,
        found: char,
    },

    #[error("SEDOL cannot contain vowel '{ch}' (index {index})")]
    SedolVowel { ch: char, index: usize },
    #[error("ISIN country code must be two ASCII letters: '{value}'")]
    InvalidCountryCode { value: String },

    #[error("invalid scheme '{value}', expected one of cusip, sedol, isin")]
    InvalidScheme { value: String },
    #[error("'{value}' is not a recognized CUSIP, SEDOL or ISIN")]
    UnknownSymbol { value: String },
}

/// Raised when neither the input nor its I/O-substituted form is a valid CUSIP.
///
/// Carries the caller's input exactly as it was passed in, before trimming or
/// uppercasing, so it can be surfaced for operator review.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unable to repair '{original}' into a valid CUSIP")]
pub struct UnfixableCusipError {
    original: String,
}

impl UnfixableCusipError {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn into_original(self) -> String {
        self.original
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Unfixable(#[from] UnfixableCusipError),
}
