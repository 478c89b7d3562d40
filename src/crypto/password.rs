//! Argon2id password hashing and verification.
//!
//! The stored record is a self-describing PHC string
//! (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), so verification
//! needs no side-channel parameter storage — the salt and parameters
//! travel inside the hash itself.
//!
//! Passwords are normalized to lowercase before hashing and before
//! verification.  The case-insensitive password policy is deliberate:
//! "Secret1" and "secret1" are the same password.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::errors::{Result, ZipVaultError};

/// Configurable Argon2id parameters.
///
/// These map 1:1 to the fields in `Settings` so the CLI can pass
/// whatever the user configured in `.zipvault.toml`.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Minimum safe memory cost in KiB (8 MB).
const MIN_MEMORY_KIB: u32 = 8_192;

/// Lowercase a password, wiping the intermediate on drop.
///
/// Both `hash_password` and `verify_password` call this, so callers
/// can pass the password exactly as typed.
pub fn normalize_password(password: &str) -> Zeroizing<String> {
    Zeroizing::new(password.to_lowercase())
}

/// Hash a password into a PHC string with Argon2id.
///
/// A fresh random salt is generated on every call, so two hashes of
/// the same password differ.  Pass `None` for `params` to use defaults.
pub fn hash_password(password: &str, params: Option<&Argon2Params>) -> Result<String> {
    let normalized = normalize_password(password);
    let argon2 = build_argon2(params.copied().unwrap_or_default())?;

    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(normalized.as_bytes(), &salt)
        .map_err(|e| ZipVaultError::PasswordHashFailed(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch, and an error
/// only when the stored record itself cannot be parsed.
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool> {
    let normalized = normalize_password(password);

    let parsed = PasswordHash::new(stored_hash.trim())
        .map_err(|e| ZipVaultError::InvalidPasswordRecord(e.to_string()))?;

    // Argon2::default() verifies with the params embedded in the hash,
    // regardless of what the hashing side was configured with.
    Ok(Argon2::default()
        .verify_password(normalized.as_bytes(), &parsed)
        .is_ok())
}

/// Build an Argon2id instance from explicit parameters.
///
/// Enforces minimum parameters to prevent dangerously weak settings.
fn build_argon2(p: Argon2Params) -> Result<Argon2<'static>> {
    if p.memory_kib < MIN_MEMORY_KIB {
        return Err(ZipVaultError::PasswordHashFailed(format!(
            "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
            p.memory_kib
        )));
    }
    if p.iterations < 1 {
        return Err(ZipVaultError::PasswordHashFailed(
            "Argon2 iterations must be at least 1".into(),
        ));
    }
    if p.parallelism < 1 {
        return Err(ZipVaultError::PasswordHashFailed(
            "Argon2 parallelism must be at least 1".into(),
        ));
    }

    let params = Params::new(p.memory_kib, p.iterations, p.parallelism, None)
        .map_err(|e| ZipVaultError::PasswordHashFailed(format!("invalid Argon2 params: {e}")))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
