// File: src/config.rs
// Purpose: Configuration parsing from rusty-signup.toml

use crate::store::{CredentialStore, FileStorage, DEFAULT_STORAGE_KEY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "rusty-signup.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the credential blob lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key of the account blob within the storage medium
    #[serde(default = "default_key")]
    pub key: String,

    /// Directory used by the filesystem backend
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` overrides it
    #[serde(default = "default_level")]
    pub level: String,
}

// Default values
fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from(".rusty-signup")
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            dir: default_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl SignupConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SignupConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rusty-signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Open the file-backed credential store this configuration describes
    pub fn file_store(&self) -> CredentialStore<FileStorage> {
        CredentialStore::with_key(FileStorage::new(&self.storage.dir), self.storage.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert_eq!(config.storage.key, "users");
        assert_eq!(config.storage.dir, PathBuf::from(".rusty-signup"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [storage]
            key = "accounts"
        "#;
        let config: SignupConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.key, "accounts");
        assert_eq!(config.storage.dir, PathBuf::from(".rusty-signup"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_and_empty_files() {
        let tmp = TempDir::new().unwrap();

        let missing = SignupConfig::load(tmp.path().join("nope.toml")).unwrap();
        assert_eq!(missing.storage.key, "users");

        let empty = tmp.path().join("empty.toml");
        fs::write(&empty, "  \n").unwrap();
        assert_eq!(SignupConfig::load(&empty).unwrap().storage.key, "users");
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let tmp = TempDir::new().unwrap();
        let bad = tmp.path().join("bad.toml");
        fs::write(&bad, "[storage\nkey = 1").unwrap();

        let err = SignupConfig::load(&bad).unwrap_err();
        assert!(format!("{:#}", err).contains("bad.toml"));
    }

    #[test]
    fn test_file_store_uses_configured_key_and_dir() {
        let tmp = TempDir::new().unwrap();
        let config = SignupConfig {
            storage: StorageConfig {
                key: "accounts".to_string(),
                dir: tmp.path().to_path_buf(),
            },
            ..Default::default()
        };

        config.file_store().register("bob", "bob@test.com", "pw").unwrap();
        assert!(tmp.path().join("accounts.json").exists());
    }
}
