use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tozip::Encryption;

#[derive(Parser)]
#[command(
    name = "tozip",
    version,
    about = "Pack a file into a password-protected ZIP archive"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a file into a ZIP archive
    Zip(ZipArgs),
    /// Rate the strength of a password
    Strength,
}

#[derive(Args, Clone)]
pub struct ZipArgs {
    /// File to archive
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
    /// Output directory (default: $TOZIP_OUTPUT_DIR or .)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// Archive file name (default: <file stem>.zip)
    #[arg(short, long, value_name = "NAME", conflicts_with = "timestamp")]
    pub name: Option<String>,
    /// Append the current date and time to the archive name
    #[arg(short, long)]
    pub timestamp: bool,
    /// Encryption scheme (default: $TOZIP_ENCRYPTION or aes256)
    #[arg(short, long, value_enum)]
    pub encryption: Option<EncryptionChoice>,
    /// Replace an existing archive
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EncryptionChoice {
    #[value(name = "aes256")]
    Aes256,
    #[value(name = "zipcrypto")]
    ZipCrypto,
}

impl From<EncryptionChoice> for Encryption {
    fn from(choice: EncryptionChoice) -> Self {
        match choice {
            EncryptionChoice::Aes256 => Encryption::Aes256,
            EncryptionChoice::ZipCrypto => Encryption::ZipCrypto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_zip_args() {
        let cli = Cli::try_parse_from([
            "tozip", "zip", "report.pdf", "-o", "/out", "--encryption", "zipcrypto", "--force",
        ])
        .unwrap();
        let Command::Zip(args) = cli.command else {
            panic!("Expected zip command");
        };
        assert_eq!(args.input, PathBuf::from("report.pdf"));
        assert_eq!(args.output, Some(PathBuf::from("/out")));
        assert!(args.encryption == Some(EncryptionChoice::ZipCrypto));
        assert!(args.force);
    }

    #[test]
    fn test_name_conflicts_with_timestamp() {
        let result = Cli::try_parse_from(["tozip", "zip", "a.txt", "--name", "b.zip", "--timestamp"]);
        assert!(result.is_err());
    }
}
