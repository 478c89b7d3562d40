//! Integration tests for the ZipVault vault module.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use zipvault::errors::ZipVaultError;
use zipvault::vault::{selectable_sessions, validate_selection, VaultStore};

/// Helper: open a store with the default file names under a fresh
/// subdirectory of `root`.
fn open_store(root: &Path) -> VaultStore {
    VaultStore::open(&root.join("ENC"), "encrypted.zip", "key.key", "password.txt")
        .expect("open vault store")
}

/// Helper: write input files into `dir` and return their paths.
fn write_inputs(dir: &Path) -> Vec<std::path::PathBuf> {
    let a = dir.join("a.txt");
    let b = dir.join("b.txt");
    fs::write(&a, b"contents of a").unwrap();
    fs::write(&b, b"contents of b").unwrap();
    vec![a, b]
}

// ---------------------------------------------------------------------------
// Seal and extract round-trip
// ---------------------------------------------------------------------------

#[test]
fn seal_and_extract_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());
    let inputs = write_inputs(tmp.path());

    let session = store
        .create_session_named("enc_2026_01_01_00_00_00")
        .unwrap();
    store.seal_session(&session, &inputs).unwrap();

    // Both artifacts exist.
    assert!(store.key_path(&session).exists());
    assert!(store.archive_path(&session).exists());

    // The archive on disk is ciphertext, not a ZIP file.
    let sealed = fs::read(store.archive_path(&session)).unwrap();
    assert!(!sealed.starts_with(b"PK"), "sealed archive must not be plaintext");

    // Extract into a separate directory (stands in for the cwd).
    let out = TempDir::new().unwrap();
    let extracted = store.extract_session(&session, out.path()).unwrap();
    assert_eq!(extracted, vec!["a.txt", "b.txt"]);

    assert_eq!(fs::read(out.path().join("a.txt")).unwrap(), b"contents of a");
    assert_eq!(fs::read(out.path().join("b.txt")).unwrap(), b"contents of b");

    // After extraction the archive bytes are a valid container again.
    let opened = fs::read(store.archive_path(&session)).unwrap();
    assert!(opened.starts_with(b"PK"));
}

#[test]
fn consume_renames_session_directory() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());
    let inputs = write_inputs(tmp.path());

    let session = store
        .create_session_named("enc_2026_01_01_00_00_00")
        .unwrap();
    store.seal_session(&session, &inputs).unwrap();

    let out = TempDir::new().unwrap();
    store.extract_session(&session, out.path()).unwrap();

    let old_path = session.path().to_path_buf();
    let new_path = store.consume_session(session).unwrap();

    assert!(!old_path.exists());
    assert!(new_path.exists());
    assert_eq!(
        new_path.file_name().unwrap().to_str().unwrap(),
        "dec_2026_01_01_00_00_00"
    );

    // The key and archive travel with the renamed directory.
    assert!(new_path.join("key.key").exists());
    assert!(new_path.join("encrypted.zip").exists());
}

#[test]
fn consume_never_touches_the_vault_root_name() {
    // A vault root whose own name contains "enc" must survive intact.
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("enc_vault");
    let store = VaultStore::open(&root, "encrypted.zip", "key.key", "password.txt").unwrap();

    let session = store.create_session_named("enc_2026_05_05_05_05_05").unwrap();
    let new_path = store.consume_session(session).unwrap();

    assert!(root.exists(), "vault root must keep its name");
    assert_eq!(new_path, root.join("dec_2026_05_05_05_05_05"));
}

// ---------------------------------------------------------------------------
// Password record
// ---------------------------------------------------------------------------

#[test]
fn password_record_is_overwritten_not_appended() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());

    store.store_password_hash("first-hash").unwrap();
    store.store_password_hash("second-hash").unwrap();

    assert_eq!(store.load_password_hash().unwrap(), "second-hash");
}

#[test]
fn missing_password_record_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());

    let result = store.load_password_hash();
    assert!(matches!(result, Err(ZipVaultError::PasswordRecordMissing(_))));
}

// ---------------------------------------------------------------------------
// Session lifecycle errors
// ---------------------------------------------------------------------------

#[test]
fn same_second_session_collision_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());

    store.create_session_named("enc_2026_01_01_12_00_00").unwrap();
    let result = store.create_session_named("enc_2026_01_01_12_00_00");
    assert!(matches!(result, Err(ZipVaultError::SessionAlreadyExists(_))));
}

#[test]
fn missing_key_file_strands_the_session() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());
    let inputs = write_inputs(tmp.path());

    let session = store.create_session_named("enc_2026_01_01_00_00_00").unwrap();
    store.seal_session(&session, &inputs).unwrap();

    fs::remove_file(store.key_path(&session)).unwrap();

    let out = TempDir::new().unwrap();
    let result = store.extract_session(&session, out.path());
    assert!(matches!(result, Err(ZipVaultError::KeyFileMissing(_))));
}

#[test]
fn wrong_key_fails_decryption_and_extracts_nothing() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());
    let inputs = write_inputs(tmp.path());

    let session = store.create_session_named("enc_2026_01_01_00_00_00").unwrap();
    store.seal_session(&session, &inputs).unwrap();

    // Replace the key with 32 wrong bytes.
    fs::write(store.key_path(&session), [0x42u8; 32]).unwrap();

    let out = TempDir::new().unwrap();
    let result = store.extract_session(&session, out.path());
    assert!(matches!(result, Err(ZipVaultError::DecryptionFailed)));

    // Nothing was extracted.
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

// ---------------------------------------------------------------------------
// Raw listing and selection
// ---------------------------------------------------------------------------

#[test]
fn listing_positions_drive_selection() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());

    store.store_password_hash("hash").unwrap();
    store.create_session_named("dec_2026_01_01_00_00_00").unwrap();
    store.create_session_named("enc_2026_02_02_00_00_00").unwrap();
    store.create_session_named("enc_2026_03_03_00_00_00").unwrap();

    // Sorted raw listing: dec_..., enc_..., enc_..., password.txt
    let entries = store.list_entries().unwrap();
    assert_eq!(
        entries,
        vec![
            "dec_2026_01_01_00_00_00",
            "enc_2026_02_02_00_00_00",
            "enc_2026_03_03_00_00_00",
            "password.txt",
        ]
    );

    // Only the enc_ sessions are offered, at raw positions 1 and 2.
    let sessions = selectable_sessions(&entries);
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0], (1, "enc_2026_02_02_00_00_00"));
    assert_eq!(sessions[1], (2, "enc_2026_03_03_00_00_00"));

    // The consumed session's raw position is not a valid choice.
    assert_eq!(validate_selection("0", &entries), None);
    assert_eq!(validate_selection("1", &entries), Some("enc_2026_02_02_00_00_00"));
}

#[test]
fn decrypted_sessions_are_not_offered_again() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(tmp.path());
    let inputs = write_inputs(tmp.path());

    let session = store.create_session_named("enc_2026_01_01_00_00_00").unwrap();
    store.seal_session(&session, &inputs).unwrap();

    let out = TempDir::new().unwrap();
    store.extract_session(&session, out.path()).unwrap();
    store.consume_session(session).unwrap();

    let entries = store.list_entries().unwrap();
    assert!(selectable_sessions(&entries).is_empty());
}

// ---------------------------------------------------------------------------
// Custom file names via configuration
// ---------------------------------------------------------------------------

#[test]
fn store_honors_configured_file_names() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("vault");
    let store = VaultStore::open(&root, "bundle.zip", "session.key", "gate.txt").unwrap();
    let inputs = write_inputs(tmp.path());

    store.store_password_hash("hash").unwrap();
    let session = store.create_session_named("enc_2026_01_01_00_00_00").unwrap();
    store.seal_session(&session, &inputs).unwrap();

    assert!(root.join("gate.txt").exists());
    assert!(session.path().join("bundle.zip").exists());
    assert!(session.path().join("session.key").exists());
}
