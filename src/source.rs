//! File selection source.

use std::path::{Path, PathBuf};

use crate::error::{Result, ToZipError};

/// A file picked by the user, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Builds a selected file from a display name and its contents.
    ///
    /// The name becomes the archive entry name, so it must be a bare file
    /// name without path separators.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ToZipError::InvalidFileName(name));
        }
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Supplies the file to archive.
pub trait FileSource {
    fn select(&self) -> Result<SelectedFile>;
}

/// Reads the selected file from a filesystem path.
#[derive(Debug, Clone)]
pub struct PathSource {
    path: PathBuf,
}

impl PathSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileSource for PathSource {
    fn select(&self) -> Result<SelectedFile> {
        let metadata = std::fs::metadata(&self.path).map_err(|source| ToZipError::Selection {
            path: self.path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ToZipError::NotAFile(self.path.clone()));
        }

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ToZipError::NotAFile(self.path.clone()))?;

        let bytes = std::fs::read(&self.path).map_err(|source| ToZipError::Selection {
            path: self.path.clone(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Selected {} ({} bytes)", self.path.display(), bytes.len());

        SelectedFile::new(name, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_selected_file_rejects_paths() {
        assert!(matches!(
            SelectedFile::new("dir/file.txt", vec![1]),
            Err(ToZipError::InvalidFileName(_))
        ));
        assert!(matches!(
            SelectedFile::new("dir\\file.txt", vec![1]),
            Err(ToZipError::InvalidFileName(_))
        ));
        assert!(matches!(
            SelectedFile::new("", vec![1]),
            Err(ToZipError::InvalidFileName(_))
        ));
        assert!(matches!(
            SelectedFile::new("..", vec![1]),
            Err(ToZipError::InvalidFileName(_))
        ));
    }

    #[test]
    fn test_selected_file_accessors() {
        let file = SelectedFile::new("notes.txt", b"hello".to_vec()).unwrap();
        assert_eq!(file.name(), "notes.txt");
        assert_eq!(file.bytes(), b"hello");
        assert_eq!(file.len(), 5);
        assert!(!file.is_empty());
    }

    #[test]
    fn test_path_source_reads_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("report.pdf");
        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        file.write_all(b"%PDF-1.7").expect("Failed to write");

        let selected = PathSource::new(&path).select().unwrap();
        assert_eq!(selected.name(), "report.pdf");
        assert_eq!(selected.bytes(), b"%PDF-1.7");
    }

    #[test]
    fn test_path_source_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing.txt");

        match PathSource::new(&path).select() {
            Err(ToZipError::Selection { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Selection error, got {other:?}"),
        }
    }

    #[test]
    fn test_path_source_rejects_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let result = PathSource::new(dir.path()).select();
        assert!(matches!(result, Err(ToZipError::NotAFile(_))));
    }

    #[test]
    fn test_path_source_empty_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, b"").expect("Failed to write");

        let selected = PathSource::new(&path).select().unwrap();
        assert!(selected.is_empty());
    }
}
