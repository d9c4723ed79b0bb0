//! `window.localStorage` as a credential storage medium

use anyhow::{anyhow, Result};
use rusty_signup::Storage;
use wasm_bindgen::JsValue;

/// Browser localStorage backend
///
/// Persists for the origin until the user clears site data.
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// Open the current window's localStorage
    ///
    /// Fails outside a window context (workers, Node) or when the browser
    /// denies storage access.
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window object available"))?;
        let inner = window
            .local_storage()
            .map_err(|e| js_error("localStorage access denied", e))?
            .ok_or_else(|| anyhow!("localStorage is not available"))?;

        Ok(Self { inner })
    }
}

fn js_error(what: &str, err: JsValue) -> anyhow::Error {
    match err.as_string() {
        Some(message) => anyhow!("{}: {}", what, message),
        None => anyhow!("{}: {:?}", what, err),
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| js_error("localStorage.getItem failed", e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // Throws QuotaExceededError when the origin is full
        self.inner
            .set_item(key, value)
            .map_err(|e| js_error("localStorage.setItem failed", e))
    }

    fn name(&self) -> &'static str {
        "localStorage"
    }
}
