//! Rusty Signup WASM
//!
//! WebAssembly bindings for the registration and login forms.
//! The page's submit handlers pass plain field values in and render the
//! returned `{ ok, field, message }` object; accounts persist in
//! `window.localStorage`.

use rusty_signup::{self as signup, CredentialStore, FormResponse, LoginForm, RegistrationForm};
use wasm_bindgen::prelude::*;

pub mod storage;

pub use storage::LocalStorage;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn open_store() -> Result<CredentialStore<LocalStorage>, JsValue> {
    let storage = LocalStorage::open().map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    Ok(CredentialStore::new(storage))
}

fn to_js(response: &FormResponse) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(response)?)
}

/// Handle a registration form submission
///
/// # Example (JavaScript)
/// ```javascript
/// const result = submitRegistration({
///     username: form.username.value,
///     email: form.email.value,
///     password: form.password.value,
///     passwordConfirm: form.passwordCheck.value,
///     termsAccepted: form.terms.checked,
/// });
/// if (!result.ok) showError(result.message, result.field);
/// ```
#[wasm_bindgen(js_name = submitRegistration)]
pub fn submit_registration(form: JsValue) -> Result<JsValue, JsValue> {
    let form: RegistrationForm = serde_wasm_bindgen::from_value(form)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse registration form: {}", e)))?;
    let store = open_store()?;

    to_js(&FormResponse::from(signup::register(&store, &form)))
}

/// Handle a login form submission
#[wasm_bindgen(js_name = submitLogin)]
pub fn submit_login(form: JsValue) -> Result<JsValue, JsValue> {
    let form: LoginForm = serde_wasm_bindgen::from_value(form)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse login form: {}", e)))?;
    let store = open_store()?;

    to_js(&FormResponse::from(signup::login(&store, &form)))
}

/// Check a username, including whether it is already registered
#[wasm_bindgen(js_name = validateUsername)]
pub fn validate_username_js(value: &str) -> Result<JsValue, JsValue> {
    let store = open_store()?;
    to_js(&FormResponse::from(signup::validate_username(value, &store)))
}

/// Quick email validation
#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(value: &str) -> Result<JsValue, JsValue> {
    to_js(&FormResponse::from(signup::validate_email(value)))
}

/// Quick password validation
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str, confirm: &str, username: &str) -> Result<JsValue, JsValue> {
    to_js(&FormResponse::from(signup::validate_password(password, confirm, username)))
}

#[wasm_bindgen(js_name = validateTerms)]
pub fn validate_terms_js(accepted: bool) -> Result<JsValue, JsValue> {
    to_js(&FormResponse::from(signup::validate_terms(accepted)))
}
