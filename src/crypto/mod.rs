//! Cryptographic primitives for ZipVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption of archive bytes (`encryption`)
//! - Argon2id password hashing and verification (`password`)

pub mod encryption;
pub mod password;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, generate_key, ...};
pub use encryption::{decrypt, encrypt, generate_key, KEY_LEN};
pub use password::{hash_password, normalize_password, verify_password, Argon2Params};
