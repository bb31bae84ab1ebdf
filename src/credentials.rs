//! The credential set handed to the verify callback.

use crate::secret::Secret;

/// The username, password and url extracted from one request.
///
/// Values are exactly what the request carried: the strategy never trims,
/// normalizes or decodes them. `Debug` output redacts the password.
///
/// # Examples
///
/// ```
/// use local_url_strategy::Credentials;
///
/// let creds = Credentials::new("johndoe", "secret", "http://localhost");
///
/// assert_eq!(creds.username(), "johndoe");
/// assert_eq!(creds.password().expose_secret(), "secret");
/// assert_eq!(creds.url(), "http://localhost");
/// assert!(!format!("{:?}", creds).contains("secret"));
/// ```
#[derive(Debug)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
    url: String,
}

impl Credentials {
    /// Creates a credential set.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
            url: url.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password, wrapped so it cannot be printed by accident.
    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    /// Returns the url.
    pub fn url(&self) -> &str {
        &self.url
    }
}
