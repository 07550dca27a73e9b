//! Input validator
//!
//! Decides whether a raw comma-separated string is made only of single ASCII
//! letters or unsigned ASCII integers, and splits it into tokens.

use regex::Regex;
use std::sync::LazyLock;

/// Token separator in the raw input.
pub const SEPARATOR: char = ',';

/// A token is one ASCII letter or one-or-more ASCII digits. `[0-9]` rather
/// than `\d` so non-ASCII digits are rejected.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z]|[0-9]+)$").unwrap_or_else(|e| panic!("token pattern: {e}"))
});

/// Returns whether a single, already trimmed token is well-formed.
pub fn is_valid_token(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

/// Splits the raw input on `,` and trims each piece, keeping original order.
///
/// Empty pieces are kept so `"1,,2"` yields three tokens.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .map(|item| item.trim().to_string())
        .collect()
}

/// Returns whether every token of the raw input is well-formed.
///
/// An empty string splits into one empty token, so it is never valid.
pub fn is_valid(raw: &str) -> bool {
    raw.split(SEPARATOR)
        .map(str::trim)
        .all(is_valid_token)
}

/// Returns the offending tokens, in order of appearance.
pub fn invalid_tokens(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .map(str::trim)
        .filter(|item| !is_valid_token(item))
        .map(str::to_string)
        .collect()
}
