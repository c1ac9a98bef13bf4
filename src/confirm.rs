//! Password confirmation gate.

/// Returns `true` when both entries are non-empty and equal after trimming
/// surrounding whitespace.
///
/// Only the check trims; the archive is encrypted with the password exactly
/// as it was entered.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    let password = password.trim();
    !password.is_empty() && password == confirmation.trim()
}

/// Whether a strength label should be shown for the current entry.
pub fn should_show_strength(password: &str) -> bool {
    !password.trim().is_empty()
}
