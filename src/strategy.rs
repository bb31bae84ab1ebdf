//! The credential extraction strategy.
//!
//! A [`Strategy`] reads a username, password and url out of a request,
//! checks that all three are present, and delegates the decision to a
//! verify callback supplied by the application.
//!
//! # Flow
//!
//! ```text
//! CredentialSource (body, query)
//!   ↓
//! FieldPath lookup per credential (body first, then query)
//!   ↓ any missing?  ──→ Fail(MissingCredentials), status 400
//! verify(&Credentials)
//!   ↓
//! Verified → Success | Rejected → Fail(Rejected) | Error → Error
//! ```

use std::fmt;

use serde_json::Value;

use crate::credentials::Credentials;
use crate::error::Error;
use crate::field::FieldPath;
use crate::options::{
    StrategyOptions, DEFAULT_PASSWORD_FIELD, DEFAULT_STRATEGY_NAME, DEFAULT_URL_FIELD,
    DEFAULT_USERNAME_FIELD,
};
use crate::outcome::{AuthHost, Failure, Outcome};
use crate::request::CredentialSource;
use crate::verification::Verification;

type VerifyFn<U, I, E> = dyn Fn(&Credentials) -> Verification<U, I, E> + Send + Sync;

/// Extracts username, password and url from a request and delegates
/// verification to a callback.
///
/// A strategy is built once and then shared across requests. It holds no
/// per-request state, so `authenticate` may run concurrently from many
/// threads on the same instance.
///
/// # Examples
///
/// ```
/// use local_url_strategy::{Outcome, RequestSnapshot, Strategy, Verification};
/// use serde_json::json;
///
/// let strategy = Strategy::<&str, &str, String>::new(|creds| {
///     if creds.username() == "johndoe"
///         && creds.password().expose_secret() == "secret"
///         && creds.url() == "http://localhost"
///     {
///         Verification::verified_with("1234", "read")
///     } else {
///         Verification::rejected()
///     }
/// });
///
/// let req = RequestSnapshot::new().with_body(json!({
///     "username": "johndoe",
///     "password": "secret",
///     "url": "http://localhost",
/// }));
///
/// assert_eq!(
///     strategy.authenticate(&req),
///     Outcome::Success { user: "1234", info: Some("read") }
/// );
/// ```
pub struct Strategy<U, I, E> {
    name: String,
    username_field: FieldPath,
    password_field: FieldPath,
    url_field: FieldPath,
    verify: Box<VerifyFn<U, I, E>>,
}

impl<U, I, E> Strategy<U, I, E> {
    /// Creates a strategy reading `username`, `password` and `url`.
    pub fn new<F>(verify: F) -> Self
    where
        F: Fn(&Credentials) -> Verification<U, I, E> + Send + Sync + 'static,
    {
        Self {
            name: DEFAULT_STRATEGY_NAME.to_string(),
            username_field: FieldPath::Flat(DEFAULT_USERNAME_FIELD.to_string()),
            password_field: FieldPath::Flat(DEFAULT_PASSWORD_FIELD.to_string()),
            url_field: FieldPath::Flat(DEFAULT_URL_FIELD.to_string()),
            verify: Box::new(verify),
        }
    }

    /// Creates a strategy reading the fields named in `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldPath`] if a configured field name is not
    /// a valid lookup path.
    pub fn with_options<F>(options: StrategyOptions, verify: F) -> Result<Self, Error>
    where
        F: Fn(&Credentials) -> Verification<U, I, E> + Send + Sync + 'static,
    {
        Self::from_parts(options, Box::new(verify))
    }

    /// Returns a builder for a strategy whose callback is supplied later.
    pub fn builder() -> StrategyBuilder<U, I, E> {
        StrategyBuilder::new()
    }

    fn from_parts(options: StrategyOptions, verify: Box<VerifyFn<U, I, E>>) -> Result<Self, Error> {
        Ok(Self {
            username_field: FieldPath::parse(&options.username_field)?,
            password_field: FieldPath::parse(&options.password_field)?,
            url_field: FieldPath::parse(&options.url_field)?,
            name: options.name,
            verify,
        })
    }

    /// Name the strategy is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path the username is read from.
    pub fn username_field(&self) -> &FieldPath {
        &self.username_field
    }

    /// Path the password is read from.
    pub fn password_field(&self) -> &FieldPath {
        &self.password_field
    }

    /// Path the url is read from.
    pub fn url_field(&self) -> &FieldPath {
        &self.url_field
    }

    /// Runs one authentication attempt against `req`.
    ///
    /// If username, password or url is missing the attempt fails with
    /// [`Failure::MissingCredentials`] and the verify callback is not called.
    /// Otherwise the callback runs once and its result becomes the outcome.
    pub fn authenticate<R>(&self, req: &R) -> Outcome<U, I, E>
    where
        R: CredentialSource + ?Sized,
    {
        let Some(credentials) = self.extract(req) else {
            tracing::debug!(strategy = %self.name, "missing credentials");
            return Outcome::Fail(Failure::MissingCredentials);
        };

        match (self.verify)(&credentials) {
            Verification::Verified { user, info } => {
                tracing::debug!(strategy = %self.name, "credentials verified");
                Outcome::Success { user, info }
            }
            Verification::Rejected { info } => {
                tracing::debug!(strategy = %self.name, "credentials rejected");
                Outcome::Fail(Failure::Rejected(info))
            }
            Verification::Error(err) => {
                tracing::debug!(strategy = %self.name, "verify callback returned an error");
                Outcome::Error(err)
            }
        }
    }

    /// Runs one authentication attempt and reports its outcome to `host`.
    pub fn authenticate_into<R, H>(&self, req: &R, host: &mut H)
    where
        R: CredentialSource + ?Sized,
        H: AuthHost<U, I, E> + ?Sized,
    {
        self.authenticate(req).dispatch(host);
    }

    /// Reads the credentials from `req` without verifying them.
    ///
    /// Returns `None` if any of the three values is missing.
    pub fn extract<R>(&self, req: &R) -> Option<Credentials>
    where
        R: CredentialSource + ?Sized,
    {
        let body = req.body();
        let query = req.query();

        // Resolve all three before bailing so every miss is logged
        let username = self.lookup("username", &self.username_field, body, query);
        let password = self.lookup("password", &self.password_field, body, query);
        let url = self.lookup("url", &self.url_field, body, query);

        Some(Credentials::new(username?, password?, url?))
    }

    fn lookup<'a>(
        &self,
        credential: &'static str,
        path: &FieldPath,
        body: Option<&'a Value>,
        query: Option<&'a Value>,
    ) -> Option<&'a str> {
        let value = path.lookup(body, query);
        if value.is_none() {
            tracing::debug!(
                strategy = %self.name,
                credential,
                field = %path,
                "credential not found"
            );
        }
        value
    }
}

impl<U, I, E> fmt::Debug for Strategy<U, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("name", &self.name)
            .field("username_field", &self.username_field)
            .field("password_field", &self.password_field)
            .field("url_field", &self.url_field)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Strategy`].
///
/// Unlike the constructors on `Strategy`, the builder lets the verify
/// callback be left out, and reports that as [`Error::MissingVerifier`]
/// from [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use local_url_strategy::{Error, Strategy, StrategyOptions, Verification};
///
/// let strategy = Strategy::<String, (), ()>::builder()
///     .options(StrategyOptions::default().with_url_field("siteurl"))
///     .verify(|creds| Verification::verified(creds.username().to_string()))
///     .build()
///     .expect("valid configuration");
/// assert_eq!(strategy.url_field().to_string(), "siteurl");
///
/// let missing = Strategy::<String, (), ()>::builder().build();
/// assert_eq!(missing.unwrap_err(), Error::MissingVerifier);
/// ```
pub struct StrategyBuilder<U, I, E> {
    options: StrategyOptions,
    verify: Option<Box<VerifyFn<U, I, E>>>,
}

impl<U, I, E> StrategyBuilder<U, I, E> {
    /// Creates a builder with default options and no callback.
    pub fn new() -> Self {
        Self {
            options: StrategyOptions::default(),
            verify: None,
        }
    }

    /// Replaces the options.
    pub fn options(mut self, options: StrategyOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the verify callback.
    pub fn verify<F>(mut self, verify: F) -> Self
    where
        F: Fn(&Credentials) -> Verification<U, I, E> + Send + Sync + 'static,
    {
        self.verify = Some(Box::new(verify));
        self
    }

    /// Builds the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVerifier`] if no callback was set, or
    /// [`Error::InvalidFieldPath`] for a malformed field name.
    pub fn build(self) -> Result<Strategy<U, I, E>, Error> {
        let verify = self.verify.ok_or(Error::MissingVerifier)?;
        Strategy::from_parts(self.options, verify)
    }
}

impl<U, I, E> Default for StrategyBuilder<U, I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U, I, E> fmt::Debug for StrategyBuilder<U, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyBuilder")
            .field("options", &self.options)
            .field("has_verify", &self.verify.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldPathErrorKind;
    use crate::request::RequestSnapshot;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: &'static str,
    }

    type TestStrategy = Strategy<User, &'static str, String>;

    fn johndoe_only(creds: &Credentials) -> Verification<User, &'static str, String> {
        if creds.username() == "johndoe"
            && creds.password().expose_secret() == "secret"
            && creds.url() == "http://localhost"
        {
            Verification::verified_with(User { id: "1234" }, "read")
        } else {
            Verification::rejected()
        }
    }

    fn full_body() -> RequestSnapshot {
        RequestSnapshot::new().with_body(json!({
            "username": "johndoe",
            "password": "secret",
            "url": "http://localhost",
        }))
    }

    #[test]
    fn default_fields_are_flat() {
        let strategy = TestStrategy::new(johndoe_only);
        assert_eq!(strategy.name(), "local-url");
        assert_eq!(strategy.username_field(), &FieldPath::Flat("username".to_string()));
        assert_eq!(strategy.password_field(), &FieldPath::Flat("password".to_string()));
        assert_eq!(strategy.url_field(), &FieldPath::Flat("url".to_string()));
    }

    #[test]
    fn success_carries_user_and_info() {
        let strategy = TestStrategy::new(johndoe_only);
        assert_eq!(
            strategy.authenticate(&full_body()),
            Outcome::Success {
                user: User { id: "1234" },
                info: Some("read"),
            }
        );
    }

    #[test]
    fn callback_receives_values_unmodified() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let strategy = TestStrategy::new(move |creds| {
            sink.lock().unwrap().push((
                creds.username().to_string(),
                creds.password().expose_secret().clone(),
                creds.url().to_string(),
            ));
            Verification::rejected()
        });

        let req = RequestSnapshot::new().with_body(json!({
            "username": " John Doe ",
            "password": "p@ss word",
            "url": "HTTP://LOCALHOST/",
        }));
        strategy.authenticate(&req);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(
                " John Doe ".to_string(),
                "p@ss word".to_string(),
                "HTTP://LOCALHOST/".to_string()
            )]
        );
    }

    #[test]
    fn missing_credentials_skip_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let strategy = TestStrategy::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Verification::rejected()
        });

        let outcome = strategy.authenticate(&RequestSnapshot::new());

        assert_eq!(outcome, Outcome::Fail(Failure::MissingCredentials));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rejection_passes_info_without_status() {
        let strategy =
            TestStrategy::new(|_| Verification::rejected_with("Incorrect password"));

        match strategy.authenticate(&full_body()) {
            Outcome::Fail(failure) => {
                assert_eq!(failure, Failure::Rejected(Some("Incorrect password")));
                assert_eq!(failure.status(), None);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn rejection_without_info() {
        let strategy = TestStrategy::new(|_| Verification::rejected());
        assert_eq!(
            strategy.authenticate(&full_body()),
            Outcome::Fail(Failure::Rejected(None))
        );
    }

    #[test]
    fn error_is_propagated_verbatim() {
        let strategy = TestStrategy::new(|_| Verification::Error("database offline".to_string()));
        assert_eq!(
            strategy.authenticate(&full_body()),
            Outcome::Error("database offline".to_string())
        );
    }

    #[test]
    fn extract_returns_credentials() {
        let strategy = TestStrategy::new(johndoe_only);
        let creds = strategy.extract(&full_body()).expect("all present");
        assert_eq!(creds.username(), "johndoe");
        assert_eq!(creds.url(), "http://localhost");
    }

    #[test]
    fn with_options_rejects_malformed_path() {
        let err = TestStrategy::with_options(
            StrategyOptions::default().with_password_field("user[password"),
            johndoe_only,
        )
        .unwrap_err();

        match err {
            Error::InvalidFieldPath(e) => {
                assert_eq!(e.path, "user[password");
                assert_eq!(e.kind, FieldPathErrorKind::UnbalancedBrackets);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn builder_without_verify_fails_fast() {
        let result = TestStrategy::builder()
            .options(StrategyOptions::default().with_name("login"))
            .build();
        assert_eq!(result.unwrap_err(), Error::MissingVerifier);
    }

    #[test]
    fn builder_applies_options() {
        let strategy = TestStrategy::builder()
            .options(StrategyOptions::default().with_name("login"))
            .verify(johndoe_only)
            .build()
            .unwrap();
        assert_eq!(strategy.name(), "login");
    }

    #[test]
    fn debug_omits_callback() {
        let strategy = TestStrategy::new(johndoe_only);
        let debug = format!("{:?}", strategy);
        assert!(debug.contains("local-url"));
        assert!(debug.contains(".."));
    }

    #[test]
    fn strategy_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestStrategy>();

        let strategy = TestStrategy::new(johndoe_only);
        let req = full_body();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| strategy.authenticate(&req).is_success()))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap());
            }
        });
    }
}
