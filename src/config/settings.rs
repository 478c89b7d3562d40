use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZipVaultError};

/// Project-level configuration, loaded from `.zipvault.toml`.
///
/// Every field has a sensible default so ZipVault works out-of-the-box
/// without any config file at all.  The defaults reproduce the classic
/// layout: an `ENC` directory holding `password.txt` and per-session
/// `key.key` / `encrypted.zip` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the vault root directory (relative to the working dir).
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the archive inside each session.
    #[serde(default = "default_archive_name")]
    pub archive_name: String,

    /// File name of the one-time key inside each session.
    #[serde(default = "default_key_name")]
    pub key_name: String,

    /// File name of the password record under the vault root.
    #[serde(default = "default_password_file")]
    pub password_file: String,

    /// Argon2 memory cost in KiB (default: 64 MB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count (default: 3).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree (default: 4).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    "ENC".to_string()
}

fn default_archive_name() -> String {
    "encrypted.zip".to_string()
}

fn default_key_name() -> String {
    "key.key".to_string()
}

fn default_password_file() -> String {
    "password.txt".to_string()
}

fn default_argon2_memory_kib() -> u32 {
    65_536 // 64 MB
}

fn default_argon2_iterations() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            archive_name: default_archive_name(),
            key_name: default_key_name(),
            password_file: default_password_file(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".zipvault.toml";

    /// Load settings from `<project_dir>/.zipvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            ZipVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> crate::crypto::Argon2Params {
        crate::crypto::Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_dir, "ENC");
        assert_eq!(s.archive_name, "encrypted.zip");
        assert_eq!(s.key_name, "key.key");
        assert_eq!(s.password_file, "password.txt");
        assert_eq!(s.argon2_memory_kib, 65_536);
        assert_eq!(s.argon2_iterations, 3);
        assert_eq!(s.argon2_parallelism, 4);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "ENC");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_dir = "vault"
archive_name = "bundle.zip"
argon2_memory_kib = 131072
argon2_iterations = 5
argon2_parallelism = 8
"#;
        fs::write(tmp.path().join(".zipvault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "vault");
        assert_eq!(settings.archive_name, "bundle.zip");
        assert_eq!(settings.argon2_memory_kib, 131_072);
        assert_eq!(settings.argon2_iterations, 5);
        assert_eq!(settings.argon2_parallelism, 8);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let config = "vault_dir = \"secrets\"\n";
        fs::write(tmp.path().join(".zipvault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "secrets");
        // Rest should be defaults
        assert_eq!(settings.archive_name, "encrypted.zip");
        assert_eq!(settings.argon2_iterations, 3);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".zipvault.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err());
    }
}
