//! Vault module — encrypted archive session storage.
//!
//! This module provides:
//! - `Session` type and session-selection helpers (`session`)
//! - ZIP archive building and extraction (`archive`)
//! - High-level `VaultStore` for the vault root layout (`store`)

pub mod archive;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use session::{consumed_name, selectable_sessions, validate_selection, Session};
pub use session::{CONSUMED_PREFIX, SESSION_PREFIX};
pub use store::VaultStore;
