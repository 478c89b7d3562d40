use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in ZipVault.
#[derive(Debug, Error)]
pub enum ZipVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or corrupted archive")]
    DecryptionFailed,

    #[error("Password hashing failed: {0}")]
    PasswordHashFailed(String),

    #[error("Stored password record is malformed: {0}")]
    InvalidPasswordRecord(String),

    // --- Vault errors ---
    #[error("No password record found at {0} — run `zipvault create` first")]
    PasswordRecordMissing(PathBuf),

    #[error("Session directory already exists: {0}")]
    SessionAlreadyExists(PathBuf),

    #[error("Key file missing for session: {0}")]
    KeyFileMissing(PathBuf),

    // --- Archive errors ---
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Archive entry '{0}' has an unsafe path")]
    UnsafeEntryName(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Input file not found: {0}")]
    InputFileNotFound(PathBuf),
}

/// Convenience type alias for ZipVault results.
pub type Result<T> = std::result::Result<T, ZipVaultError>;
