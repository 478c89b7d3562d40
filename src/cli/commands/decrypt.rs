//! `zipvault decrypt` — verify the password, let the operator pick a
//! session, then decrypt and extract it into the working directory.

use crate::cli::output;
use crate::cli::{open_store, prompt_password, Cli};
use crate::crypto::verify_password;
use crate::errors::{Result, ZipVaultError};
use crate::vault::{selectable_sessions, validate_selection};

/// Execute the `decrypt` command.
///
/// Wrong password and invalid session selection are handled user
/// errors: a styled message, then a normal exit.  A missing password
/// record, missing key file, or corrupt ciphertext propagates as an
/// error instead.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_settings, store) = open_store(cli)?;

    // 1. The stored hash gates everything; without it there is
    //    nothing to decrypt against.
    let stored_hash = store.load_password_hash()?;

    let password = prompt_password()?;
    if !verify_password(&stored_hash, &password)? {
        output::error("Invalid password");
        return Ok(());
    }

    // 2. Raw listing of the vault root; only enc_ sessions are
    //    offered, numbered by their raw-listing position.
    let entries = store.list_entries()?;
    let sessions = selectable_sessions(&entries);
    if sessions.is_empty() {
        output::info("No encrypted sessions to decrypt.");
        return Ok(());
    }

    output::print_sessions_table(&sessions);
    let input = prompt_session_index()?;

    // 3. The typed value must string-match one of the listed numbers.
    let Some(name) = validate_selection(&input, &entries) else {
        output::error("Invalid input: must be one of the listed session numbers");
        return Ok(());
    };
    let session = store.session(name);

    // 4. Decrypt in place, extract into the working directory, and
    //    only then mark the session consumed.
    let cwd = std::env::current_dir()?;
    let extracted = store.extract_session(&session, &cwd)?;
    store.consume_session(session)?;

    output::success("Zip folder decrypted successfully.");
    output::info("Decrypted files:");
    for file in &extracted {
        output::item(file);
    }

    Ok(())
}

/// Read the operator's session choice as a raw string.
///
/// No parsing happens here — `validate_selection` decides whether the
/// string is acceptable.
fn prompt_session_index() -> Result<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("Pick a zipfile to decrypt")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ZipVaultError::CommandFailed(format!("session prompt: {e}")))
}
