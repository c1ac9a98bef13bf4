//! Digit section - ASCII digits.

use super::SectionResult;

pub const DIGIT_POOL: u32 = 10;

/// Checks for at least one ASCII digit (`0-9`).
pub fn digit_section(password: &str) -> SectionResult {
    password
        .chars()
        .any(|c| c.is_ascii_digit())
        .then_some(DIGIT_POOL)
}
