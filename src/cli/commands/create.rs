//! `zipvault create` — hash the password, archive the input files,
//! and encrypt the archive inside a new session.

use std::path::PathBuf;

use crate::cli::output;
use crate::cli::{open_store, prompt_password, Cli};
use crate::crypto::hash_password;
use crate::errors::Result;

/// Execute the `create` command.
///
/// The input paths have already been validated by the dispatcher, so
/// every file exists when the flow starts.
pub fn execute(cli: &Cli, files: &[PathBuf]) -> Result<()> {
    // Opening creates the vault root if this is the first run.
    let (settings, store) = open_store(cli)?;

    let password = prompt_password()?;

    // 1. Hash the (lowercased) password and store the record,
    //    replacing whatever was there.  Only the latest password can
    //    unlock future decrypts.
    let hash = hash_password(&password, Some(&settings.argon2_params()))?;
    store.store_password_hash(&hash)?;

    // 2. New timestamped session; a same-second collision is fatal.
    let session = store.create_session()?;

    // 3. Archive, key, then in-place encryption.
    store.seal_session(&session, files)?;

    output::success(&format!(
        "Encrypted zip folder created successfully: {}",
        store.archive_path(&session).display()
    ));
    output::tip("Run `zipvault decrypt` to extract it again.");

    Ok(())
}
