//! File export sink.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tempfile::NamedTempFile;

use crate::error::{Result, ToZipError};

/// Timestamp format used in archive names, e.g. `2026-02-22_14-05-09`.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Suggested archive name for `file_name`: its stem plus `.zip`.
///
/// `report.pdf` becomes `report.zip`; names without an extension, or that
/// are only an extension like `.env`, keep their full name.
pub fn default_archive_name(file_name: &str) -> String {
    format!("{}.zip", file_stem(file_name))
}

/// Like [`default_archive_name`] with `_<timestamp>` appended to the stem.
pub fn timestamped_archive_name(file_name: &str, at: DateTime<Local>) -> String {
    format!(
        "{}_{}.zip",
        file_stem(file_name),
        at.format(FILE_TIMESTAMP_FORMAT)
    )
}

fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

/// Persists archive bytes to a destination.
pub trait ExportSink {
    /// Writes `bytes` and returns the path written.
    fn export(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf>;
}

/// Exports into a directory.
///
/// The archive is first written to a temporary file beside the destination
/// and then moved into place, so a failed export never leaves a partial file.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    overwrite: bool,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            overwrite: false,
        }
    }

    /// Allows replacing an existing file at the destination.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn export(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf> {
        let dest = self.dir.join(suggested_name);
        let export_err = |source: std::io::Error| ToZipError::Export {
            path: dest.clone(),
            source,
        };

        if !self.overwrite && dest.exists() {
            return Err(ToZipError::DestinationExists(dest.clone()));
        }

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(export_err)?;
        tmp.write_all(bytes).map_err(export_err)?;
        tmp.as_file().sync_all().map_err(export_err)?;

        let persisted = if self.overwrite {
            tmp.persist(&dest)
        } else {
            tmp.persist_noclobber(&dest)
        };
        persisted.map_err(|e| {
            if e.error.kind() == std::io::ErrorKind::AlreadyExists {
                ToZipError::DestinationExists(dest.clone())
            } else {
                export_err(e.error)
            }
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Exported {} bytes to {}", bytes.len(), dest.display());

        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_default_archive_name() {
        assert_eq!(default_archive_name("report.pdf"), "report.zip");
        assert_eq!(default_archive_name("archive.tar.gz"), "archive.tar.zip");
        assert_eq!(default_archive_name("README"), "README.zip");
        assert_eq!(default_archive_name(".env"), ".env.zip");
    }

    #[test]
    fn test_timestamped_archive_name() {
        let at = Local.with_ymd_and_hms(2026, 2, 22, 14, 5, 9).unwrap();
        assert_eq!(
            timestamped_archive_name("report.pdf", at),
            "report_2026-02-22_14-05-09.zip"
        );
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let sink = DirectorySink::new(dir.path());

        let path = sink.export(b"PK\x03\x04data", "report.zip").unwrap();
        assert_eq!(path, dir.path().join("report.zip"));
        assert_eq!(std::fs::read(&path).unwrap(), b"PK\x03\x04data");
    }

    #[test]
    fn test_export_refuses_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let existing = dir.path().join("report.zip");
        std::fs::write(&existing, b"old").unwrap();

        let result = DirectorySink::new(dir.path()).export(b"new", "report.zip");
        assert!(matches!(result, Err(ToZipError::DestinationExists(_))));
        assert_eq!(std::fs::read(&existing).unwrap(), b"old");
    }

    #[test]
    fn test_export_overwrite() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let existing = dir.path().join("report.zip");
        std::fs::write(&existing, b"old").unwrap();

        DirectorySink::new(dir.path())
            .overwrite(true)
            .export(b"new", "report.zip")
            .unwrap();
        assert_eq!(std::fs::read(&existing).unwrap(), b"new");
    }

    #[test]
    fn test_export_missing_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let sink = DirectorySink::new(dir.path().join("nope"));

        let result = sink.export(b"data", "report.zip");
        assert!(matches!(result, Err(ToZipError::Export { .. })));
    }

    #[test]
    fn test_export_leaves_no_temp_files() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        DirectorySink::new(dir.path()).export(b"data", "a.zip").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.zip")]);
    }
}
