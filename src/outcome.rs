//! Terminal signals of an authentication attempt.
//!
//! Every call to [`Strategy::authenticate`](crate::Strategy::authenticate)
//! ends in exactly one [`Outcome`]: success, failure, or error. Hosts that
//! prefer callbacks implement [`AuthHost`] and let [`Outcome::dispatch`]
//! invoke the matching method once.

use std::fmt;

/// Message carried by the failure raised when a credential is missing.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Missing credentials";

/// Status code attached to a missing-credentials failure.
pub const BAD_REQUEST: u16 = 400;

/// The result of one authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<U, I, E> {
    /// The verify callback accepted the credentials
    Success {
        /// The authenticated user
        user: U,
        /// Info the callback attached to the user
        info: Option<I>,
    },
    /// The request was missing credentials, or the callback rejected them
    Fail(Failure<I>),
    /// The verify callback reported an error, propagated verbatim
    Error(E),
}

impl<U, I, E> Outcome<U, I, E> {
    /// Returns `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Returns `true` for [`Outcome::Fail`].
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    /// Returns `true` for [`Outcome::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Hands the outcome to `host`, calling exactly one of its methods once.
    ///
    /// Failures are reported together with their status code, so a
    /// missing-credentials failure arrives as `fail(.., Some(400))` and a
    /// callback rejection as `fail(.., None)`.
    pub fn dispatch<H>(self, host: &mut H)
    where
        H: AuthHost<U, I, E> + ?Sized,
    {
        match self {
            Outcome::Success { user, info } => host.success(user, info),
            Outcome::Fail(failure) => {
                let status = failure.status();
                host.fail(failure, status);
            }
            Outcome::Error(err) => host.error(err),
        }
    }
}

/// Why an attempt ended in failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure<I> {
    /// Username, password or url could not be found in the request.
    ///
    /// The verify callback was not called.
    MissingCredentials,
    /// The verify callback rejected the credentials, with its optional info.
    Rejected(Option<I>),
}

impl<I> Failure<I> {
    /// Status code the host should respond with, if the strategy forces one.
    ///
    /// Only [`Failure::MissingCredentials`] carries a status ([`BAD_REQUEST`]);
    /// for rejections the host picks the response code.
    pub fn status(&self) -> Option<u16> {
        match self {
            Failure::MissingCredentials => Some(BAD_REQUEST),
            Failure::Rejected(_) => None,
        }
    }

    /// The failure message, if the strategy supplied one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Failure::MissingCredentials => Some(MISSING_CREDENTIALS_MESSAGE),
            Failure::Rejected(_) => None,
        }
    }

    /// The info the verify callback attached to a rejection.
    pub fn info(&self) -> Option<&I> {
        match self {
            Failure::MissingCredentials => None,
            Failure::Rejected(info) => info.as_ref(),
        }
    }
}

impl<I> fmt::Display for Failure<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::MissingCredentials => f.write_str(MISSING_CREDENTIALS_MESSAGE),
            Failure::Rejected(_) => f.write_str("Credentials rejected"),
        }
    }
}

/// Receiver for the terminal signals of an authentication attempt.
///
/// This is the surface an authentication dispatch host exposes to the
/// strategy. Exactly one method is called per attempt.
///
/// # Examples
///
/// ```
/// use local_url_strategy::{AuthHost, Failure, Outcome};
///
/// #[derive(Default)]
/// struct Responder {
///     status: Option<u16>,
/// }
///
/// impl AuthHost<String, String, String> for Responder {
///     fn success(&mut self, _user: String, _info: Option<String>) {
///         self.status = Some(200);
///     }
///     fn fail(&mut self, _failure: Failure<String>, status: Option<u16>) {
///         self.status = Some(status.unwrap_or(401));
///     }
///     fn error(&mut self, _err: String) {
///         self.status = Some(500);
///     }
/// }
///
/// let mut host = Responder::default();
/// Outcome::<String, String, String>::Fail(Failure::MissingCredentials).dispatch(&mut host);
/// assert_eq!(host.status, Some(400));
/// ```
pub trait AuthHost<U, I, E> {
    /// Called when the verify callback accepted the credentials.
    fn success(&mut self, user: U, info: Option<I>);

    /// Called when credentials are missing or were rejected.
    fn fail(&mut self, failure: Failure<I>, status: Option<u16>);

    /// Called when the verify callback reported an error.
    fn error(&mut self, err: E);
}
