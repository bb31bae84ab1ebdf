//! Username/password/url credential extraction for pluggable authentication.
//!
//! This crate provides a single strategy that an authentication host can
//! run against incoming requests:
//! - **Field lookup**: credentials are read from the request body, falling
//!   back to the query string, under configurable field names including
//!   object-notation paths such as `user[username]`
//! - **Presence validation**: a request missing any credential fails with
//!   `"Missing credentials"` and status 400, without reaching the callback
//! - **Delegation**: the application's verify callback decides whether the
//!   credentials are valid and which user they belong to
//!
//! # Core Types
//!
//! - [`Strategy`]: The extraction-and-delegation unit, built once and shared
//! - [`StrategyOptions`]: Field names and strategy name, loadable with serde
//! - [`CredentialSource`]: Boundary trait exposing a request's body and query
//! - [`Credentials`]: What the verify callback receives
//! - [`Verification`]: What the verify callback returns
//! - [`Outcome`]: The terminal signal of one attempt (success, fail, error)
//! - [`AuthHost`]: Callback-style receiver for an [`Outcome`]
//!
//! # Examples
//!
//! ```
//! use local_url_strategy::{
//!     Failure, Outcome, RequestSnapshot, Strategy, StrategyOptions, Verification,
//! };
//! use serde_json::json;
//!
//! let options = StrategyOptions::default()
//!     .with_username_field("user[username]")
//!     .with_password_field("user[password]")
//!     .with_url_field("user[url]");
//!
//! let strategy = Strategy::<String, (), String>::with_options(options, |creds| {
//!     if creds.password().expose_secret() == "secret" {
//!         Verification::verified(creds.username().to_string())
//!     } else {
//!         Verification::rejected()
//!     }
//! })
//! .expect("valid field names");
//!
//! let req = RequestSnapshot::new().with_body(json!({
//!     "user": { "username": "johndoe", "password": "secret", "url": "http://localhost" }
//! }));
//! assert!(strategy.authenticate(&req).is_success());
//!
//! let outcome = strategy.authenticate(&RequestSnapshot::new());
//! assert_eq!(outcome, Outcome::Fail(Failure::MissingCredentials));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod error;
mod field;
mod options;
mod outcome;
mod request;
mod secret;
mod strategy;
mod verification;

#[cfg(test)]
mod test_utils;

pub use credentials::Credentials;
pub use error::{Error, FieldPathError, FieldPathErrorKind};
pub use field::FieldPath;
pub use options::{
    StrategyOptions, DEFAULT_PASSWORD_FIELD, DEFAULT_STRATEGY_NAME, DEFAULT_URL_FIELD,
    DEFAULT_USERNAME_FIELD,
};
pub use outcome::{AuthHost, Failure, Outcome, BAD_REQUEST, MISSING_CREDENTIALS_MESSAGE};
pub use request::{CredentialSource, RequestSnapshot};
pub use secret::Secret;
pub use strategy::{Strategy, StrategyBuilder};
pub use verification::Verification;
