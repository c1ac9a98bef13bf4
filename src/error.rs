//! Error types for the selection, archive and export steps.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToZipError {
    #[error("Failed to read {path}: {source}")]
    Selection {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),
    #[error("No file selected")]
    NoFileSelected,
    #[error("Selected file is empty")]
    EmptyFile,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password is empty")]
    EmptyPassword,
    #[error("Failed to create zip archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Failed to prepare archive workspace: {0}")]
    Workspace(#[source] io::Error),
    #[error("Failed to export to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),
    #[error("No archive to export")]
    NoArchive,
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Which step of the flow an error belongs to.
///
/// Each step can be retried on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Selection,
    Validation,
    Archive,
    Export,
    Config,
}

impl ToZipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToZipError::Selection { .. }
            | ToZipError::NotAFile(_)
            | ToZipError::InvalidFileName(_) => ErrorKind::Selection,
            ToZipError::NoFileSelected
            | ToZipError::EmptyFile
            | ToZipError::PasswordMismatch
            | ToZipError::EmptyPassword => ErrorKind::Validation,
            ToZipError::Archive(_) | ToZipError::Workspace(_) => ErrorKind::Archive,
            ToZipError::Export { .. } | ToZipError::DestinationExists(_) | ToZipError::NoArchive => {
                ErrorKind::Export
            }
            ToZipError::Config(_) => ErrorKind::Config,
        }
    }

    /// Short message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ToZipError::Selection { source, .. } => source.to_string(),
            ToZipError::NotAFile(_) | ToZipError::InvalidFileName(_) => {
                "Please select a regular file.".to_string()
            }
            ToZipError::NoFileSelected => "No file selected.".to_string(),
            ToZipError::EmptyFile => "The selected file is empty.".to_string(),
            ToZipError::PasswordMismatch | ToZipError::EmptyPassword => {
                "Passwords do not match.".to_string()
            }
            ToZipError::Archive(_) | ToZipError::Workspace(_) => {
                "Error creating encrypted zip.".to_string()
            }
            ToZipError::DestinationExists(path) => {
                format!("{} already exists.", path.display())
            }
            ToZipError::Export { .. } | ToZipError::NoArchive => {
                "Could not export the file. Please try again.".to_string()
            }
            ToZipError::Config(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToZipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(ToZipError::NotAFile(PathBuf::from("/tmp")).kind(), ErrorKind::Selection);
        assert_eq!(ToZipError::PasswordMismatch.kind(), ErrorKind::Validation);
        assert_eq!(
            ToZipError::Workspace(io::Error::other("disk full")).kind(),
            ErrorKind::Archive
        );
        assert_eq!(ToZipError::NoArchive.kind(), ErrorKind::Export);
        assert_eq!(ToZipError::Config("bad".into()).kind(), ErrorKind::Config);
    }

    #[test]
    fn test_user_messages() {
        let err = ToZipError::Archive(zip::result::ZipError::FileNotFound);
        assert_eq!(err.user_message(), "Error creating encrypted zip.");

        let err = ToZipError::Export {
            path: PathBuf::from("/out/a.zip"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.user_message(), "Could not export the file. Please try again.");
    }

    #[test]
    fn test_selection_message_uses_io_cause() {
        let err = ToZipError::Selection {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.user_message(), "No such file or directory");
        assert!(err.to_string().contains("missing.txt"));
    }
}
