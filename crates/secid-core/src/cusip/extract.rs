use std::collections::HashSet;
use std::io::Read;

use tracing::{debug, trace};

use super::is_valid_cusip;
use crate::scheme::trim_padding;

/// Separators between pasted identifiers: commas and ASCII whitespace,
/// vertical tab included.
fn is_separator(ch: char) -> bool {
    ch == ',' || ch == '\u{0B}' || ch.is_ascii_whitespace()
}

/// Non-empty tokens with NUL padding stripped, so a matching token is exactly
/// the nine identifier characters.
fn split_tokens(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .map(trim_padding)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Keeps the candidates that are valid CUSIPs, in their original order.
pub fn retain_valid_cusips<I, S>(candidates: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter(|candidate| is_valid_cusip(candidate.as_ref()))
        .collect()
}

/// Pulls every valid CUSIP out of a pasted block of text.
///
/// Tokens are separated by runs of commas and whitespace. Matches keep their
/// original order and casing, duplicates included.
pub fn extract_valid_cusips_from_text(text: &str) -> Vec<String> {
    let tokens = split_tokens(text);
    let valid: Vec<String> = retain_valid_cusips(tokens.iter().copied())
        .into_iter()
        .map(str::to_owned)
        .collect();
    trace!(
        tokens = tokens.len(),
        matched = valid.len(),
        "extracted CUSIPs from text"
    );
    valid
}

/// Like [`extract_valid_cusips_from_text`], keeping only the first occurrence
/// of each exact string.
pub fn extract_unique_valid_cusips_from_text(text: &str) -> Vec<String> {
    let tokens = split_tokens(text);
    let mut seen = HashSet::new();
    let unique: Vec<String> = tokens
        .iter()
        .copied()
        .filter(|token| is_valid_cusip(token))
        .filter(|token| seen.insert(*token))
        .map(str::to_owned)
        .collect();
    trace!(
        tokens = tokens.len(),
        matched = unique.len(),
        "extracted unique CUSIPs from text"
    );
    unique
}

/// Extracts CUSIPs from raw bytes. Input that is not UTF-8 yields no matches.
pub fn extract_valid_cusips_from_bytes(bytes: impl AsRef<[u8]>) -> Vec<String> {
    decode(bytes.as_ref())
        .map(extract_valid_cusips_from_text)
        .unwrap_or_default()
}

/// Unique variant of [`extract_valid_cusips_from_bytes`].
pub fn extract_unique_valid_cusips_from_bytes(bytes: impl AsRef<[u8]>) -> Vec<String> {
    decode(bytes.as_ref())
        .map(extract_unique_valid_cusips_from_text)
        .unwrap_or_default()
}

/// Extracts CUSIPs from a reader such as an open file.
///
/// A read failure, including content that is not UTF-8, yields no matches
/// rather than an error.
pub fn extract_valid_cusips_from_reader<R: Read>(reader: R) -> Vec<String> {
    read_text(reader)
        .map(|text| extract_valid_cusips_from_text(&text))
        .unwrap_or_default()
}

/// Unique variant of [`extract_valid_cusips_from_reader`].
pub fn extract_unique_valid_cusips_from_reader<R: Read>(reader: R) -> Vec<String> {
    read_text(reader)
        .map(|text| extract_unique_valid_cusips_from_text(&text))
        .unwrap_or_default()
}

fn decode(bytes: &[u8]) -> Option<&str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(error) => {
            debug!(%error, "input is not UTF-8 text; no CUSIPs extracted");
            None
        }
    }
}

fn read_text<R: Read>(mut reader: R) -> Option<String> {
    let mut text = String::new();
    match reader.read_to_string(&mut text) {
        Ok(_) => Some(text),
        Err(error) => {
            debug!(%error, "could not read text; no CUSIPs extracted");
            None
        }
    }
}
