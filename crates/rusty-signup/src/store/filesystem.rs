//! Filesystem storage backend

use crate::store::Storage;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage backend
///
/// Stores each key as `<dir>/<key>.json`. Persistent across runs, which
/// makes it the native counterpart of the browser's localStorage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the file path for a key
    fn key_to_path(&self, key: &str) -> PathBuf {
        // Sanitize key to make it filesystem-safe
        let safe_key: String = key
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':' | '.') { '_' } else { c })
            .collect();

        self.dir.join(format!("{}.json", safe_key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read storage file: {:?}", path)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create storage directory: {:?}", self.dir))?;

        let path = self.key_to_path(key);
        fs::write(&path, value).with_context(|| format!("Failed to write storage file: {:?}", path))?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
