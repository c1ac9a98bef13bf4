//! Environment configuration.

use std::path::PathBuf;

use crate::archive::Encryption;
use crate::error::Result;

pub const OUTPUT_DIR_VAR: &str = "TOZIP_OUTPUT_DIR";
pub const ENCRYPTION_VAR: &str = "TOZIP_ENCRYPTION";

/// Returns the directory archives are exported to.
///
/// Priority:
/// 1. Environment variable `TOZIP_OUTPUT_DIR`
/// 2. Default path `.`
pub fn get_output_dir() -> PathBuf {
    std::env::var(OUTPUT_DIR_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the encryption scheme for new archives.
///
/// Reads `TOZIP_ENCRYPTION` (`aes256` or `zipcrypto`), defaulting to AES-256.
///
/// # Errors
///
/// Returns [`ToZipError::Config`](crate::ToZipError::Config) if the variable
/// holds an unknown value.
pub fn get_encryption() -> Result<Encryption> {
    match std::env::var(ENCRYPTION_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(Encryption::default()),
    }
}
