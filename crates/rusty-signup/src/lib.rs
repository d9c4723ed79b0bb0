//! Rusty Signup
//!
//! Registration and login form handling for a single browser session.
//! Field values come in as plain strings and booleans, go through ordered
//! rule sets, and successful registrations land in a [`CredentialStore`]
//! backed by any string-keyed [`Storage`] medium.
//!
//! The same code runs natively (CLI, tests) and in WebAssembly, where the
//! storage medium is `window.localStorage`.
//!
//! Credentials are stored in plain text. This crate validates input; it is
//! not an authentication system.

pub mod config;
pub mod error;
pub mod flow;
pub mod store;
pub mod validation;

pub use config::SignupConfig;
pub use error::{AuthError, RegistrationError};
pub use flow::{login, register, FormResponse, LoggedIn, LoginForm, Registered, RegistrationForm};
pub use store::{Account, CredentialStore, FileStorage, MemoryStorage, Storage};
pub use validation::{
    validate_email, validate_password, validate_terms, validate_username, Field, UsernameRegistry,
    ValidationFailure,
};
