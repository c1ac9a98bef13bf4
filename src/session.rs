//! Export session - state for one select, confirm, create and export flow.

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use crate::archive::ArchiveWriter;
use crate::confirm::{passwords_match, should_show_strength};
use crate::error::{Result, ToZipError};
use crate::evaluator::evaluate_password_strength;
use crate::export::{ExportSink, default_archive_name};
use crate::source::{FileSource, SelectedFile};
use crate::types::PasswordStrengthResult;

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}

/// Transient state of one archive flow.
///
/// Every step records a user-facing message when it fails and can be retried
/// without restarting the flow. A successful export or [`cancel`](Self::cancel)
/// resets the session.
pub struct ExportSession {
    file: Option<SelectedFile>,
    password: SecretString,
    confirmation: SecretString,
    archive: Option<Vec<u8>>,
    archive_name: Option<String>,
    error_message: Option<String>,
}

impl Default for ExportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSession {
    pub fn new() -> Self {
        Self {
            file: None,
            password: empty_secret(),
            confirmation: empty_secret(),
            archive: None,
            archive_name: None,
            error_message: None,
        }
    }

    /// Replaces the selected file with one from `source`.
    ///
    /// Any previously created archive is discarded. On failure no file stays
    /// selected.
    pub fn select(&mut self, source: &dyn FileSource) -> Result<&SelectedFile> {
        self.file = None;
        self.archive = None;
        match source.select() {
            Ok(file) => {
                self.error_message = None;
                Ok(self.file.insert(file))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = password;
    }

    pub fn set_confirmation(&mut self, confirmation: SecretString) {
        self.confirmation = confirmation;
    }

    pub fn clear_passwords(&mut self) {
        self.password = empty_secret();
        self.confirmation = empty_secret();
    }

    /// Overrides the suggested archive name used by [`export`](Self::export).
    pub fn set_archive_name(&mut self, name: impl Into<String>) {
        self.archive_name = Some(name.into());
    }

    pub fn passwords_match(&self) -> bool {
        passwords_match(self.password.expose_secret(), self.confirmation.expose_secret())
    }

    /// Whether creation is allowed: passwords match and a non-empty file is selected.
    pub fn can_create(&self) -> bool {
        self.passwords_match() && self.file.as_ref().is_some_and(|f| !f.is_empty())
    }

    /// Strength of the current password, `None` while it is blank.
    pub fn strength(&self) -> Option<PasswordStrengthResult> {
        should_show_strength(self.password.expose_secret())
            .then(|| evaluate_password_strength(&self.password))
    }

    /// Encrypts the selected file with the current password.
    ///
    /// Refuses without calling `writer` when the gate is closed. On writer
    /// failure passwords and file are kept so creation can be retried.
    pub fn create_archive(&mut self, writer: &dyn ArchiveWriter) -> Result<()> {
        self.archive = None;
        if let Err(e) = self.check_gate() {
            return Err(self.fail(e));
        }
        let created = match &self.file {
            Some(file) => writer.create(file, &self.password),
            None => Err(ToZipError::NoFileSelected),
        };
        match created {
            Ok(bytes) => {
                self.archive = Some(bytes);
                self.error_message = None;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Hands the created archive to `sink`.
    ///
    /// On success the session resets. On failure the archive bytes are kept
    /// so the export can be retried.
    pub fn export(&mut self, sink: &dyn ExportSink) -> Result<PathBuf> {
        let name = self.suggested_name().unwrap_or_else(|| "archive.zip".to_string());
        let exported = match self.archive.as_deref() {
            Some(bytes) => sink.export(bytes, &name),
            None => Err(ToZipError::NoArchive),
        };

        match exported {
            Ok(path) => {
                self.reset();
                Ok(path)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Abandons the flow and clears all state.
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn archive(&self) -> Option<&[u8]> {
        self.archive.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Name the archive will be exported under.
    pub fn suggested_name(&self) -> Option<String> {
        self.archive_name
            .clone()
            .or_else(|| self.file.as_ref().map(|f| default_archive_name(f.name())))
    }

    fn check_gate(&self) -> Result<()> {
        let file = self.file.as_ref().ok_or(ToZipError::NoFileSelected)?;
        if !self.passwords_match() {
            return Err(ToZipError::PasswordMismatch);
        }
        if file.is_empty() {
            return Err(ToZipError::EmptyFile);
        }
        Ok(())
    }

    fn fail(&mut self, err: ToZipError) -> ToZipError {
        #[cfg(feature = "tracing")]
        tracing::error!("{:?} step failed: {}", err.kind(), err);
        self.error_message = Some(err.user_message());
        err
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
