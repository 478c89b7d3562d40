//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, ZipVaultError};
use crate::vault::VaultStore;

/// ZipVault CLI: password-gated encrypted archive sessions.
#[derive(Parser)]
#[command(
    name = "zipvault",
    about = "Encrypt files into password-gated ZIP archive sessions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault root directory (default: from .zipvault.toml, else "ENC")
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Bundle files into a new encrypted archive session
    Create {
        /// Files to archive and encrypt
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Verify the password, decrypt a session, and extract its files
    Decrypt,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the vault password, trying in order:
/// 1. `ZIPVAULT_PASSWORD` env var (CI/CD)
/// 2. Interactive prompt (hidden input)
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    // Check the environment variable first (CI/CD friendly).
    if let Ok(pw) = std::env::var("ZIPVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // Fall back to interactive prompt.
    let pw = dialoguer::Password::new()
        .with_prompt("Enter a password for accessing zipfiles")
        .interact()
        .map_err(|e| ZipVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Load settings and open the vault store for this invocation.
///
/// The `--vault-dir` flag overrides the configured directory name.
/// Opening creates the vault root if it does not exist yet.
pub fn open_store(cli: &Cli) -> Result<(Settings, VaultStore)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let vault_dir = cli.vault_dir.as_deref().unwrap_or(&settings.vault_dir);
    let root = cwd.join(vault_dir);

    let store = VaultStore::open(
        &root,
        &settings.archive_name,
        &settings.key_name,
        &settings.password_file,
    )?;

    Ok((settings, store))
}

/// Validate that every input file exists before any flow runs.
///
/// This is a precondition check done at dispatch time, so a typo'd
/// path never leaves a half-written session behind.
pub fn validate_input_files(files: &[PathBuf]) -> Result<()> {
    for path in files {
        if !path.is_file() {
            return Err(ZipVaultError::InputFileNotFound(path.clone()));
        }
    }
    Ok(())
}
