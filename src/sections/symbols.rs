//! Symbol section - everything that is not an ASCII letter or digit.

use super::SectionResult;

pub const SYMBOL_POOL: u32 = 32;

/// Checks for at least one character outside `[a-zA-Z0-9]`.
///
/// Punctuation, whitespace and every non-ASCII code point count as symbols.
pub fn symbol_section(password: &str) -> SectionResult {
    password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
        .then_some(SYMBOL_POOL)
}
