//! Archive writer - password-protected single-entry ZIP archives.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use tempfile::TempDir;
use zip::unstable::write::FileOptionsExt;
use zip::write::{FileOptions, SimpleFileOptions};
use zip::{AesMode, CompressionMethod, ZipWriter};

use crate::error::{Result, ToZipError};
use crate::source::SelectedFile;

const WORKSPACE_INPUT: &str = "input";
const WORKSPACE_ARCHIVE: &str = "archive.zip";

/// Entry encryption scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encryption {
    /// WinZip AES-256.
    #[default]
    Aes256,
    /// Legacy PKWARE ZipCrypto, readable by older unzip tools but weak.
    ZipCrypto,
}

impl Encryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encryption::Aes256 => "aes256",
            Encryption::ZipCrypto => "zipcrypto",
        }
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encryption {
    type Err = ToZipError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes256" | "aes" => Ok(Encryption::Aes256),
            "zipcrypto" => Ok(Encryption::ZipCrypto),
            other => Err(ToZipError::Config(format!(
                "unknown encryption {other:?} (expected aes256 or zipcrypto)"
            ))),
        }
    }
}

/// Produces encrypted archive bytes for one file.
pub trait ArchiveWriter {
    fn create(&self, file: &SelectedFile, password: &SecretString) -> Result<Vec<u8>>;
}

/// [`ArchiveWriter`] backed by the `zip` crate.
///
/// Works through a temporary directory holding the input file and the
/// archive; both are removed when the directory guard drops, on success and
/// on every error path.
#[derive(Debug, Clone, Default)]
pub struct ZipArchiveWriter {
    encryption: Encryption,
    temp_root: Option<PathBuf>,
}

impl ZipArchiveWriter {
    pub fn new(encryption: Encryption) -> Self {
        Self {
            encryption,
            temp_root: None,
        }
    }

    /// Creates temporary workspaces under `dir` instead of the system
    /// temporary directory.
    pub fn temp_root<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.temp_root = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn encryption(&self) -> Encryption {
        self.encryption
    }

    fn file_options<'k>(&self, password: &'k str) -> FileOptions<'k, ()> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);
        match self.encryption {
            Encryption::Aes256 => options.with_aes_encryption(AesMode::Aes256, password),
            Encryption::ZipCrypto => options.with_deprecated_encryption(password.as_bytes()),
        }
    }

    fn workspace(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("tozip-");
        match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(ToZipError::Workspace)
    }

    fn write_archive(&self, input: &Path, output: &Path, entry_name: &str, password: &str) -> Result<()> {
        let out = File::create(output).map_err(ToZipError::Workspace)?;
        let mut writer = ZipWriter::new(BufWriter::new(out));
        writer.start_file(entry_name, self.file_options(password))?;

        let mut reader = BufReader::new(File::open(input).map_err(ToZipError::Workspace)?);
        io::copy(&mut reader, &mut writer).map_err(ToZipError::Workspace)?;

        let mut out = writer.finish()?;
        io::Write::flush(&mut out).map_err(ToZipError::Workspace)?;
        Ok(())
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    fn create(&self, file: &SelectedFile, password: &SecretString) -> Result<Vec<u8>> {
        let password = password.expose_secret();
        if password.is_empty() {
            return Err(ToZipError::EmptyPassword);
        }
        if file.is_empty() {
            return Err(ToZipError::EmptyFile);
        }

        let workspace = self.workspace()?;
        // Fixed names: the entry name can be as long as the filesystem allows
        let input = workspace.path().join(WORKSPACE_INPUT);
        let output = workspace.path().join(WORKSPACE_ARCHIVE);

        fs::write(&input, file.bytes()).map_err(ToZipError::Workspace)?;

        if let Err(e) = self.write_archive(&input, &output, file.name(), password) {
            #[cfg(feature = "tracing")]
            tracing::error!("Archive creation FAILED for {}: {}", file.name(), e);
            return Err(e);
        }

        let bytes = fs::read(&output).map_err(ToZipError::Workspace)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Created {} archive for {}: {} bytes",
            self.encryption,
            file.name(),
            bytes.len()
        );

        Ok(bytes)
    }
}
