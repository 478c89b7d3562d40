//! Session naming and selection.
//!
//! A session is one timestamped subdirectory of the vault root.  Its
//! name encodes its state: `enc_<timestamp>` while the archive inside
//! is ciphertext, `dec_<timestamp>` once it has been decrypted and
//! extracted.  The selection helpers here are pure functions so the
//! decrypt command's interactive prompt stays separate from the logic
//! it validates against.

use std::path::PathBuf;

/// Prefix of a session that still holds an encrypted archive.
pub const SESSION_PREFIX: &str = "enc_";

/// Prefix of a session whose archive has been decrypted and extracted.
pub const CONSUMED_PREFIX: &str = "dec_";

/// Timestamp format used in session directory names (local time,
/// second precision).  Two creations within the same second collide.
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// A handle to one session subdirectory under the vault root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    path: PathBuf,
}

impl Session {
    pub(crate) fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }

    /// Directory name of the session (e.g. `enc_2026_08_27_14_03_59`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path to the session directory.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// Filter a raw vault-root listing down to selectable sessions.
///
/// Returns `(index, name)` pairs where `index` is the entry's position
/// in the **unfiltered** listing.  That is the number the operator must
/// type: consumed (`dec_`) sessions and the password record occupy
/// positions in the numbering but are never offered.
pub fn selectable_sessions(entries: &[String]) -> Vec<(usize, &str)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, name)| name.starts_with(SESSION_PREFIX))
        .map(|(i, name)| (i, name.as_str()))
        .collect()
}

/// Validate the operator's typed selection against a raw listing.
///
/// The input is valid only if, after trimming whitespace, it exactly
/// matches the decimal index of an `enc_`-prefixed entry in the raw
/// listing.  Returns the selected session name, or `None` for
/// non-numeric, out-of-range, or filtered-out input.
pub fn validate_selection<'a>(input: &str, entries: &'a [String]) -> Option<&'a str> {
    let input = input.trim();
    entries
        .iter()
        .enumerate()
        .filter(|(_, name)| name.starts_with(SESSION_PREFIX))
        .find(|(i, _)| i.to_string() == input)
        .map(|(_, name)| name.as_str())
}

/// Compute the consumed name for a session directory.
///
/// Replaces the first occurrence of `enc` with `dec` in the directory
/// name only — never in the rest of the path, so a vault root whose
/// own name contains "enc" is unaffected.
pub fn consumed_name(name: &str) -> String {
    name.replacen("enc", "dec", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<String> {
        // Sorted raw listing of a vault root: one consumed session,
        // two live ones, and the password record.
        vec![
            "dec_2026_01_01_00_00_00".to_string(),
            "enc_2026_02_02_10_30_00".to_string(),
            "enc_2026_03_03_23_59_59".to_string(),
            "password.txt".to_string(),
        ]
    }

    #[test]
    fn selectable_keeps_raw_positions() {
        let entries = listing();
        let sessions = selectable_sessions(&entries);
        assert_eq!(
            sessions,
            vec![(1, "enc_2026_02_02_10_30_00"), (2, "enc_2026_03_03_23_59_59")]
        );
    }

    #[test]
    fn consumed_sessions_are_never_offered() {
        let entries = listing();
        let sessions = selectable_sessions(&entries);
        assert!(sessions.iter().all(|(_, name)| !name.starts_with("dec_")));
    }

    #[test]
    fn valid_selection_resolves_to_session_name() {
        let entries = listing();
        assert_eq!(validate_selection("1", &entries), Some("enc_2026_02_02_10_30_00"));
        assert_eq!(validate_selection("2", &entries), Some("enc_2026_03_03_23_59_59"));
    }

    #[test]
    fn selection_of_filtered_out_entry_is_rejected() {
        let entries = listing();
        // Index 0 is the dec_ session, index 3 is password.txt — both
        // exist in the raw listing but are not selectable.
        assert_eq!(validate_selection("0", &entries), None);
        assert_eq!(validate_selection("3", &entries), None);
    }

    #[test]
    fn garbage_selection_is_rejected() {
        let entries = listing();
        assert_eq!(validate_selection("two", &entries), None);
        assert_eq!(validate_selection("", &entries), None);
        assert_eq!(validate_selection("-1", &entries), None);
        assert_eq!(validate_selection("99", &entries), None);
        // "01" is numerically 1 but does not string-match "1".
        assert_eq!(validate_selection("01", &entries), None);
    }

    #[test]
    fn selection_trims_whitespace() {
        let entries = listing();
        assert_eq!(validate_selection(" 1 \n", &entries), Some("enc_2026_02_02_10_30_00"));
    }

    #[test]
    fn consumed_name_swaps_prefix() {
        assert_eq!(consumed_name("enc_2026_08_27_14_03_59"), "dec_2026_08_27_14_03_59");
    }

    #[test]
    fn consumed_name_only_touches_first_occurrence() {
        assert_eq!(consumed_name("enc_enc_weird"), "dec_enc_weird");
    }
}
