//! Letter sections - ASCII lowercase and uppercase letters.

use super::SectionResult;

pub const LOWERCASE_POOL: u32 = 26;
pub const UPPERCASE_POOL: u32 = 26;

/// Checks for at least one ASCII lowercase letter (`a-z`).
pub fn lowercase_section(password: &str) -> SectionResult {
    password
        .chars()
        .any(|c| c.is_ascii_lowercase())
        .then_some(LOWERCASE_POOL)
}

/// Checks for at least one ASCII uppercase letter (`A-Z`).
pub fn uppercase_section(password: &str) -> SectionResult {
    password
        .chars()
        .any(|c| c.is_ascii_uppercase())
        .then_some(UPPERCASE_POOL)
}
