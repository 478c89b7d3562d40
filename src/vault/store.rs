//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the on-disk layout of the vault root: the shared
//! password record plus the timestamped session subdirectories.  It
//! wraps the archive layer and the crypto layer so the commands can
//! work with simple method calls like `store.seal_session(...)`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::crypto::{decrypt, encrypt, generate_key};
use crate::errors::{Result, ZipVaultError};

use super::archive::{build_archive, extract_archive};
use super::session::{consumed_name, Session, SESSION_PREFIX, TIMESTAMP_FORMAT};

/// The main vault handle.  Open one with `VaultStore::open`, then use
/// its methods to manage the password record and sessions.
pub struct VaultStore {
    /// Path to the vault root directory.
    root: PathBuf,

    /// File name of the archive inside each session (e.g. `encrypted.zip`).
    /// The name never changes, even after the bytes become plaintext.
    archive_name: String,

    /// File name of the session key inside each session (e.g. `key.key`).
    key_name: String,

    /// File name of the password record under the vault root.
    password_file: String,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault at `root`, creating the directory if it does not
    /// exist yet.  Idempotent.
    pub fn open(
        root: &Path,
        archive_name: &str,
        key_name: &str,
        password_file: &str,
    ) -> Result<Self> {
        if !root.exists() {
            fs::create_dir_all(root)?;
        }

        Ok(Self {
            root: root.to_path_buf(),
            archive_name: archive_name.to_string(),
            key_name: key_name.to_string(),
            password_file: password_file.to_string(),
        })
    }

    // ------------------------------------------------------------------
    // Password record
    // ------------------------------------------------------------------

    /// Path to the shared password record.
    pub fn password_path(&self) -> PathBuf {
        self.root.join(&self.password_file)
    }

    /// Persist a password hash, unconditionally overwriting any prior
    /// record.  At most one record exists at a time; the latest
    /// password gates every subsequent decrypt.
    pub fn store_password_hash(&self, hash: &str) -> Result<()> {
        fs::write(self.password_path(), hash)?;
        Ok(())
    }

    /// Read the stored password hash.
    ///
    /// A missing record means no `create` has ever run against this
    /// vault root.
    pub fn load_password_hash(&self) -> Result<String> {
        let path = self.password_path();
        if !path.exists() {
            return Err(ZipVaultError::PasswordRecordMissing(path));
        }
        Ok(fs::read_to_string(path)?)
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Create a new session directory named after the current local
    /// time.  Two creations within the same second collide, which is
    /// fatal — there is no retry.
    pub fn create_session(&self) -> Result<Session> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        self.create_session_named(&format!("{SESSION_PREFIX}{timestamp}"))
    }

    /// Create a session directory with an explicit name.
    pub fn create_session_named(&self, name: &str) -> Result<Session> {
        let path = self.root.join(name);
        if path.exists() {
            return Err(ZipVaultError::SessionAlreadyExists(path));
        }
        fs::create_dir(&path)?;
        Ok(Session::new(name.to_string(), path))
    }

    /// Handle to an existing session by directory name.
    pub fn session(&self, name: &str) -> Session {
        Session::new(name.to_string(), self.root.join(name))
    }

    /// Sorted names of all immediate entries of the vault root — the
    /// "raw listing" that session selection indices refer to.  The
    /// password record and consumed sessions are included; filtering
    /// happens later, but the positions assigned here are what the
    /// operator types.
    pub fn list_entries(&self) -> Result<Vec<String>> {
        let mut entries: Vec<String> = fs::read_dir(&self.root)?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        Ok(entries)
    }

    /// Path to a session's archive file.
    pub fn archive_path(&self, session: &Session) -> PathBuf {
        session.path().join(&self.archive_name)
    }

    /// Path to a session's one-time key file.
    pub fn key_path(&self, session: &Session) -> PathBuf {
        session.path().join(&self.key_name)
    }

    // ------------------------------------------------------------------
    // Seal / extract / consume
    // ------------------------------------------------------------------

    /// Fill a freshly created session: build the archive from the
    /// input files, generate and persist a one-time key, then encrypt
    /// the archive file in place.
    ///
    /// The archive briefly exists as plaintext on disk before being
    /// overwritten with ciphertext.  A crash in between leaves it in
    /// whatever state it was — there is no rollback.
    pub fn seal_session(&self, session: &Session, files: &[PathBuf]) -> Result<()> {
        let archive_path = self.archive_path(session);
        build_archive(&archive_path, files)?;

        let key = generate_key();
        fs::write(self.key_path(session), key)?;

        let plaintext = fs::read(&archive_path)?;
        let ciphertext = encrypt(&key, &plaintext)?;
        fs::write(&archive_path, ciphertext)?;

        Ok(())
    }

    /// Decrypt a session's archive in place and extract every entry
    /// into `dest`.  Returns the extracted entry names in container
    /// enumeration order.
    ///
    /// Losing the key file permanently strands the session — the
    /// archive cannot be recovered without it.
    pub fn extract_session(&self, session: &Session, dest: &Path) -> Result<Vec<String>> {
        let key_path = self.key_path(session);
        if !key_path.exists() {
            return Err(ZipVaultError::KeyFileMissing(key_path));
        }
        let key = fs::read(key_path)?;

        let archive_path = self.archive_path(session);
        let ciphertext = fs::read(&archive_path)?;
        let plaintext = decrypt(&key, &ciphertext)?;
        fs::write(&archive_path, plaintext)?;

        extract_archive(&archive_path, dest)
    }

    /// Mark a session as consumed by renaming its directory from
    /// `enc_*` to `dec_*`.  Returns the new path.  Only the final path
    /// component is renamed — the vault root's own name is never
    /// touched.
    pub fn consume_session(&self, session: Session) -> Result<PathBuf> {
        let new_path = self.root.join(consumed_name(session.name()));
        fs::rename(session.path(), &new_path)?;
        Ok(new_path)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
