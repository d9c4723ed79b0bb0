//! Username → account mapping persisted as one JSON blob

use crate::error::AuthError;
use crate::store::{Account, Storage};
use crate::validation::UsernameRegistry;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Storage key the account blob lives under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "users";

/// Every registered account, keyed by lowercase username
pub type Accounts = BTreeMap<String, Account>;

/// Credential store over a string-keyed medium
///
/// Each operation reads (and, for writes, rewrites) the whole blob.
/// Concurrent writers through different handles on the same medium are
/// last-write-wins.
pub struct CredentialStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Read all accounts
    ///
    /// Never fails: a missing entry, an unreadable medium, or a blob that is
    /// not a JSON object of accounts all read as "no users yet".
    pub fn load(&self) -> Accounts {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Accounts::new(),
            Err(e) => {
                tracing::warn!(
                    backend = self.storage.name(),
                    key = %self.key,
                    "Failed to read credential store, treating as empty: {:#}",
                    e
                );
                return Accounts::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::warn!(
                    backend = self.storage.name(),
                    key = %self.key,
                    "Malformed credential store, treating as empty: {}",
                    e
                );
                Accounts::new()
            }
        }
    }

    /// Replace the persisted blob with `accounts`
    pub fn save(&self, accounts: &Accounts) -> Result<()> {
        let blob = serde_json::to_string(accounts).context("Failed to serialize accounts")?;
        self.storage
            .set_item(&self.key, &blob)
            .with_context(|| format!("Failed to write '{}' to {} storage", self.key, self.storage.name()))
    }

    /// Case-insensitive membership check
    pub fn exists(&self, username: &str) -> bool {
        self.load().contains_key(&username.to_lowercase())
    }

    /// Insert or overwrite the account for `username`
    ///
    /// Does not check uniqueness; callers validate first.
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let key = username.to_lowercase();
        let mut accounts = self.load();
        accounts.insert(
            key.clone(),
            Account {
                email: email.to_lowercase(),
                password: password.to_string(),
            },
        );
        self.save(&accounts)?;

        tracing::info!(username = %key, "Account registered");
        Ok(())
    }

    /// Check a username/password pair against the stored account
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let accounts = self.load();
        let account = accounts
            .get(&username.to_lowercase())
            .ok_or(AuthError::UnknownUser)?;

        if account.password != password {
            return Err(AuthError::BadPassword);
        }

        Ok(())
    }

    /// Get all stored usernames, sorted
    pub fn usernames(&self) -> Vec<String> {
        self.load().into_keys().collect()
    }
}

impl<S: Storage> UsernameRegistry for CredentialStore<S> {
    fn exists(&self, username: &str) -> bool {
        CredentialStore::exists(self, username)
    }
}
