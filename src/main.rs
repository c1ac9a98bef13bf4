mod cli;

use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, anyhow};
use clap::Parser;
use dialoguer::Password;
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::EnvFilter;

use tozip::{
    DirectorySink, ExportSession, PasswordStrengthResult, PathSource, ZipArchiveWriter,
    get_encryption, get_output_dir, timestamped_archive_name,
};

use crate::cli::{Cli, Command, ZipArgs};

const PASSWORD_VAR: &str = "TOZIP_PASSWORD";
const MAX_PASSWORD_ATTEMPTS: usize = 3;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Zip(args) => zip(args),
        Command::Strength => strength(),
    }
}

fn zip(args: ZipArgs) -> anyhow::Result<()> {
    let encryption = match args.encryption {
        Some(choice) => choice.into(),
        None => get_encryption()?,
    };
    let output_dir = args.output.clone().unwrap_or_else(get_output_dir);

    let mut session = ExportSession::new();
    let file = session
        .select(&PathSource::new(&args.input))
        .with_context(|| format!("Could not read {}", args.input.display()))?;
    if file.is_empty() {
        return Err(anyhow!("{} is empty", args.input.display()));
    }
    let file_name = file.name().to_string();

    if let Some(name) = args.name {
        session.set_archive_name(name);
    } else if args.timestamp {
        session.set_archive_name(timestamped_archive_name(&file_name, chrono::Local::now()));
    }

    read_passwords(&mut session)?;

    let writer = ZipArchiveWriter::new(encryption);
    session.create_archive(&writer)?;

    let sink = DirectorySink::new(&output_dir).overwrite(args.force);
    let path = session.export(&sink)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Fills in password and confirmation, from `TOZIP_PASSWORD` or by prompting.
fn read_passwords(session: &mut ExportSession) -> anyhow::Result<()> {
    if let Ok(value) = std::env::var(PASSWORD_VAR) {
        if !value.trim().is_empty() {
            tracing::debug!("Using password from {}", PASSWORD_VAR);
            session.set_password(SecretString::new(value.clone().into()));
            session.set_confirmation(SecretString::new(value.into()));
            return Ok(());
        }
    }
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "No password provided and no TTY available. Set {}.",
            PASSWORD_VAR
        ));
    }

    for _ in 0..MAX_PASSWORD_ATTEMPTS {
        session.set_password(prompt_secret("ZIP file password")?);
        if let Some(result) = session.strength() {
            print_strength(&result);
        }
        session.set_confirmation(prompt_secret("Confirm password")?);

        if session.passwords_match() {
            return Ok(());
        }
        eprintln!("Passwords do not match.");
        session.clear_passwords();
    }
    Err(anyhow!("Passwords did not match after {} attempts", MAX_PASSWORD_ATTEMPTS))
}

fn prompt_secret(prompt: &str) -> anyhow::Result<SecretString> {
    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| anyhow!("Failed to read password: {}", e))?;
    Ok(SecretString::new(value.into()))
}

fn strength() -> anyhow::Result<()> {
    let password = if io::stdin().is_terminal() {
        prompt_secret("Password")?
    } else {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read password from stdin")?;
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        SecretString::new(line.into())
    };

    print_strength(&tozip::evaluate(password.expose_secret()));
    Ok(())
}

fn print_strength(result: &PasswordStrengthResult) {
    println!(
        "Password {} ({:.1} bits)",
        result.strength, result.entropy_bits
    );
}
