//! Construction-time configuration: which fields to read and what the
//! strategy is called.

use serde::Deserialize;

/// Default field name for the username.
pub const DEFAULT_USERNAME_FIELD: &str = "username";
/// Default field name for the password.
pub const DEFAULT_PASSWORD_FIELD: &str = "password";
/// Default field name for the url.
pub const DEFAULT_URL_FIELD: &str = "url";
/// Default name a host registers the strategy under.
pub const DEFAULT_STRATEGY_NAME: &str = "local-url";

/// Construction-time options for a [`Strategy`](crate::Strategy).
///
/// Each field name is either a flat key or an object-notation path such as
/// `user[username]`. Options can be deserialized from a host's configuration
/// file using camelCase keys; missing keys keep their defaults and keys meant
/// for other strategies or the host (`session`, `passReqToCallback`, ...) are
/// ignored.
///
/// # Examples
///
/// ```
/// use local_url_strategy::StrategyOptions;
///
/// let options = StrategyOptions::default()
///     .with_username_field("userid")
///     .with_password_field("passwd");
/// assert_eq!(options.username_field, "userid");
/// assert_eq!(options.url_field, "url");
///
/// let options: StrategyOptions =
///     serde_json::from_str(r#"{ "urlField": "siteurl" }"#).unwrap();
/// assert_eq!(options.url_field, "siteurl");
/// assert_eq!(options.username_field, "username");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyOptions {
    /// Where to find the username
    pub username_field: String,
    /// Where to find the password
    pub password_field: String,
    /// Where to find the url
    pub url_field: String,
    /// Name the strategy reports to its host and in log events
    pub name: String,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            username_field: DEFAULT_USERNAME_FIELD.to_string(),
            password_field: DEFAULT_PASSWORD_FIELD.to_string(),
            url_field: DEFAULT_URL_FIELD.to_string(),
            name: DEFAULT_STRATEGY_NAME.to_string(),
        }
    }
}

impl StrategyOptions {
    /// Overrides the username field name.
    pub fn with_username_field(mut self, field: impl Into<String>) -> Self {
        self.username_field = field.into();
        self
    }

    /// Overrides the password field name.
    pub fn with_password_field(mut self, field: impl Into<String>) -> Self {
        self.password_field = field.into();
        self
    }

    /// Overrides the url field name.
    pub fn with_url_field(mut self, field: impl Into<String>) -> Self {
        self.url_field = field.into();
        self
    }

    /// Overrides the strategy name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
