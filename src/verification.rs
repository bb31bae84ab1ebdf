//! What a verify callback reports back to the strategy.

/// The result a verify callback returns for one set of credentials.
///
/// `U` is the user type the host works with, `I` is optional auxiliary
/// information (a scope, a challenge message, ...) and `E` is the
/// callback's error type.
///
/// # Examples
///
/// ```
/// use local_url_strategy::{Credentials, Verification};
///
/// fn verify(creds: &Credentials) -> Verification<u32, &'static str, std::io::Error> {
///     if creds.username() == "johndoe" && creds.password().expose_secret() == "secret" {
///         Verification::verified_with(1234, "read")
///     } else {
///         Verification::rejected()
///     }
/// }
///
/// let creds = Credentials::new("johndoe", "secret", "http://localhost");
/// assert!(verify(&creds).is_verified());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification<U, I, E> {
    /// The credentials are valid
    Verified {
        /// The authenticated user
        user: U,
        /// Optional information to hand to the host alongside the user
        info: Option<I>,
    },
    /// The credentials are not valid
    Rejected {
        /// Optional information explaining the rejection
        info: Option<I>,
    },
    /// Verification could not be carried out
    Error(E),
}

impl<U, I, E> Verification<U, I, E> {
    /// Credentials are valid for `user`.
    pub fn verified(user: U) -> Self {
        Verification::Verified { user, info: None }
    }

    /// Credentials are valid for `user`, with extra info.
    pub fn verified_with(user: U, info: I) -> Self {
        Verification::Verified {
            user,
            info: Some(info),
        }
    }

    /// Credentials are not valid.
    pub fn rejected() -> Self {
        Verification::Rejected { info: None }
    }

    /// Credentials are not valid, with info explaining why.
    pub fn rejected_with(info: I) -> Self {
        Verification::Rejected { info: Some(info) }
    }

    /// Returns `true` for [`Verification::Verified`].
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified { .. })
    }
}

/// Lets a callback built on a fallible user lookup return its result directly:
/// `Ok(Some(user))` verifies, `Ok(None)` rejects, `Err(e)` is an error.
impl<U, I, E> From<Result<Option<U>, E>> for Verification<U, I, E> {
    fn from(result: Result<Option<U>, E>) -> Self {
        match result {
            Ok(Some(user)) => Verification::verified(user),
            Ok(None) => Verification::rejected(),
            Err(e) => Verification::Error(e),
        }
    }
}
