//! Credential persistence
//!
//! A [`Storage`] is the durable string-keyed medium (localStorage in the
//! browser, a directory of JSON files natively). The [`CredentialStore`]
//! keeps every account in a single JSON blob under one key of that medium.

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod credentials;
pub mod filesystem;
pub mod memory;

pub use credentials::{Accounts, CredentialStore, DEFAULT_STORAGE_KEY};
pub use filesystem::FileStorage;
pub use memory::MemoryStorage;

/// Trait for string-keyed storage backends
///
/// Mirrors `getItem`/`setItem` of the Web Storage API. Implementations are synchronous and
/// single-threaded; nothing here requires `Send` or `Sync`.
pub trait Storage {
    /// Get the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

/// Stored record for one username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Always lowercase
    pub email: String,
    /// Plain text, exactly as entered
    pub password: String,
}
