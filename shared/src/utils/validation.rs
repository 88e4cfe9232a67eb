//! Input validation helpers
//!
//! Verification codes are exactly four decimal digits; requester
//! identities are opaque non-empty strings. Both are validated here so
//! the bot and web processes reject malformed input identically, before
//! any store access.

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a verification code
pub const CODE_LENGTH: usize = 4;

/// Maximum accepted length for a requester identifier
pub const MAX_REQUESTER_ID_LENGTH: usize = 64;

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("code pattern is valid"));

/// Check that a candidate code is exactly four ASCII decimal digits
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Check that a requester identifier is non-empty, within length bounds,
/// and free of whitespace
pub fn is_valid_requester_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUESTER_ID_LENGTH
        && !id.chars().any(|c| c.is_whitespace())
}
