//! Password-protected single-file ZIP archives
//!
//! This library selects one file, checks a password against its
//! confirmation, rates the password's strength and writes an encrypted ZIP
//! archive containing the file.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `tozip` binary
//!
//! # Environment Variables
//!
//! - `TOZIP_OUTPUT_DIR`: Directory archives are exported to (default: `.`)
//! - `TOZIP_ENCRYPTION`: `aes256` (default) or `zipcrypto`
//!
//! # Example
//!
//! ```rust,no_run
//! use secrecy::SecretString;
//! use tozip::{DirectorySink, ExportSession, PathSource, ZipArchiveWriter, evaluate};
//!
//! println!("Strength: {}", evaluate("Tr0ub4dor&3xtra!").strength);
//!
//! let mut session = ExportSession::new();
//! session.select(&PathSource::new("report.pdf"))?;
//! session.set_password(SecretString::new("Tr0ub4dor&3xtra!".to_string().into()));
//! session.set_confirmation(SecretString::new("Tr0ub4dor&3xtra!".to_string().into()));
//!
//! session.create_archive(&ZipArchiveWriter::default())?;
//! let path = session.export(&DirectorySink::new("."))?;
//! println!("Wrote {}", path.display());
//! # Ok::<(), tozip::ToZipError>(())
//! ```

// Internal modules
mod archive;
mod config;
mod confirm;
mod error;
mod evaluator;
mod export;
mod sections;
mod session;
mod source;
mod types;

// Public API
pub use archive::{ArchiveWriter, Encryption, ZipArchiveWriter};
pub use config::{ENCRYPTION_VAR, OUTPUT_DIR_VAR, get_encryption, get_output_dir};
pub use confirm::{passwords_match, should_show_strength};
pub use error::{ErrorKind, Result, ToZipError};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use export::{
    DirectorySink, ExportSink, FILE_TIMESTAMP_FORMAT, default_archive_name,
    timestamped_archive_name,
};
pub use session::ExportSession;
pub use source::{FileSource, PathSource, SelectedFile};
pub use types::{PasswordStrength, PasswordStrengthResult, STRONG_FROM_BITS, WEAK_BELOW_BITS};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};
