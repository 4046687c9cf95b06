//! # secid-core
//!
//! Check-digit validation and repair for financial security identifiers.
//!
//! ## Overview
//!
//! Every operation is a pure function over its input: no I/O, no shared
//! state, no configuration. Functions are safe to call from any thread.
//!
//! | Scheme | Length | Checksum |
//! |--------|--------|----------|
//! | CUSIP | 9 | mod-10, doubled odd positions, S&P values (`*`=36, `@`=37, `#`=38) |
//! | SEDOL | 7 | weights `1 3 1 7 3 9 1`, vowels never allowed |
//! | ISIN | 12 | Luhn over the base-36 expansion |
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cusip`] | CUSIP validation, bulk extraction from pasted text, I/O repair |
//! | [`sedol`] | SEDOL validation and check digit |
//! | [`isin`] | ISIN validation, check digit, construction from CUSIP/SEDOL |
//! | [`scheme`] | Scheme identifiers and detection |
//! | [`security_id`] | Scheme-tagged validated identifier |
//! | [`error`] | Error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use secid_core::{extract_unique_valid_cusips_from_text, is_valid_cusip, repair_cusip};
//!
//! assert!(is_valid_cusip(" 222386AA2 "));
//! assert!(!is_valid_cusip("31397JYY5"));
//!
//! let pasted = "3137A96Y7,\n31397NCJ2\n\n31397NCJ2, garbage";
//! assert_eq!(
//!     extract_unique_valid_cusips_from_text(pasted),
//!     vec!["3137A96Y7", "31397NCJ2"]
//! );
//!
//! assert_eq!(repair_cusip("61765XAYO").as_deref(), Ok("61765XAY0"));
//! let err = repair_cusip("notCUSIP").unwrap_err();
//! assert_eq!(err.original(), "notCUSIP");
//! ```
//!
//! ## Error Handling
//!
//! `is_valid_*` predicates never fail; they answer `false`. Bulk extraction
//! never fails; unreadable input yields an empty list. Check-digit
//! computation and typed parsing return [`ValidationError`], and repair
//! returns [`UnfixableCusipError`] with the caller's original input.

pub mod cusip;
pub mod error;
pub mod isin;
mod luhn;
pub mod scheme;
pub mod security_id;
pub mod sedol;

pub use cusip::{
    compute_cusip_check_digit, contains_invalid_cusip_characters, cusip_char_value,
    extract_unique_valid_cusips_from_bytes, extract_unique_valid_cusips_from_reader,
    extract_unique_valid_cusips_from_text, extract_valid_cusips_from_bytes,
    extract_valid_cusips_from_reader, extract_valid_cusips_from_text, is_valid_cusip,
    repair_cusip, repair_cusip_detailed, retain_valid_cusips, Cusip, RepairOutcome, CUSIP_LEN,
};
pub use error::{CoreError, UnfixableCusipError, ValidationError};
pub use isin::{compute_isin_check_digit, is_valid_isin, Isin, ISIN_LEN};
pub use scheme::IdentifierScheme;
pub use security_id::SecurityId;
pub use sedol::{compute_sedol_check_digit, is_valid_sedol, Sedol, SEDOL_LEN, SEDOL_WEIGHTS};
