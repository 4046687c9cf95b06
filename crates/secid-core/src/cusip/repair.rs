use tracing::debug;

use crate::scheme::trim_padding;
use crate::UnfixableCusipError;

use super::is_valid_cusip;

/// Successful result of [`repair_cusip_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// The trimmed, upper-cased input was already valid.
    AlreadyValid(String),
    /// Substituting `O -> 0` and `I -> 1` produced a valid CUSIP.
    Fixed { original: String, repaired: String },
}

impl RepairOutcome {
    pub fn cusip(&self) -> &str {
        match self {
            Self::AlreadyValid(cusip) => cusip,
            Self::Fixed { repaired, .. } => repaired,
        }
    }

    pub fn into_cusip(self) -> String {
        match self {
            Self::AlreadyValid(cusip) => cusip,
            Self::Fixed { repaired, .. } => repaired,
        }
    }

    pub fn was_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }
}

/// Repairs a CUSIP whose digits `0`/`1` were keyed as letters `O`/`I`.
///
/// Returns the normalized (trimmed, upper-cased) CUSIP, or an error carrying
/// the input exactly as given when no single substitution pass makes it valid.
pub fn repair_cusip(input: &str) -> Result<String, UnfixableCusipError> {
    repair_cusip_detailed(input).map(RepairOutcome::into_cusip)
}

/// Same as [`repair_cusip`], reporting whether a substitution was needed.
pub fn repair_cusip_detailed(input: &str) -> Result<RepairOutcome, UnfixableCusipError> {
    let normalized = trim_padding(input).to_ascii_uppercase();
    if is_valid_cusip(&normalized) {
        return Ok(RepairOutcome::AlreadyValid(normalized));
    }

    // I and O are never issued in CUSIPs, so every occurrence is a misread digit.
    let repaired: String = normalized
        .chars()
        .map(|ch| match ch {
            'O' => '0',
            'I' => '1',
            other => other,
        })
        .collect();

    if is_valid_cusip(&repaired) {
        debug!(input, repaired = %repaired, "repaired CUSIP by substituting I/O");
        return Ok(RepairOutcome::Fixed {
            original: input.to_owned(),
            repaired,
        });
    }

    debug!(input, "CUSIP could not be repaired");
    Err(UnfixableCusipError::new(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixes_letter_o_in_check_position() {
        let fixed = repair_cusip("61765XAYO").expect("should be fixable");
        assert_eq!(fixed, "61765XAY0");
        assert!(is_valid_cusip(&fixed));
    }

    #[test]
    fn fixes_both_look_alikes() {
        let outcome = repair_cusip_detailed(" 93ii42io3 ").expect("should be fixable");
        assert_eq!(
            outcome,
            RepairOutcome::Fixed {
                original: " 93ii42io3 ".to_owned(),
                repaired: "931142103".to_owned(),
            }
        );
        assert!(outcome.was_fixed());
    }

    #[test]
    fn valid_input_is_only_normalized() {
        let outcome = repair_cusip_detailed(" 222386aa2\n").expect("already valid");
        assert_eq!(outcome, RepairOutcome::AlreadyValid("222386AA2".to_owned()));
        assert!(!outcome.was_fixed());
    }

    #[test]
    fn reports_original_input_when_unfixable() {
        let err = repair_cusip("notCUSIP").expect_err("must fail");
        assert_eq!(err.original(), "notCUSIP");

        let err = repair_cusip(" 31397JYY5 ").expect_err("must fail");
        assert_eq!(err.original(), " 31397JYY5 ");

        let err = repair_cusip("61765XAYO\u{A0}").expect_err("must fail");
        assert_eq!(err.original(), "61765XAYO\u{A0}");
    }
}
