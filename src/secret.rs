//! Redacting wrapper for sensitive values.

use std::fmt;

/// A wrapper that keeps an extracted password out of logs and debug output.
///
/// The strategy stores the password it reads from a request in a
/// `Secret<String>` before handing it to the verify callback, so a
/// `{:?}` of [`Credentials`](crate::Credentials) or a stray `tracing` field
/// never prints it. The value is passed through unmodified and can be read
/// with [`expose_secret`](Self::expose_secret).
///
/// # Examples
///
/// ```
/// use local_url_strategy::Secret;
///
/// let password = Secret::new("hunter2".to_string());
///
/// assert_eq!(format!("{:?}", password), "[REDACTED]");
/// assert_eq!(format!("{}", password), "[REDACTED]");
/// assert_eq!(password.expose_secret(), "hunter2");
/// ```
// Do NOT derive Clone, Copy, or Default: credentials must not be duplicated carelessly.
pub struct Secret<T> {
    // Must stay private. A public field bypasses redaction (CWE-532).
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the wrapped value.
    ///
    /// Verify callbacks call this to compare the password against stored
    /// material. Do not log the result.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

// No Deref, AsRef, Borrow, or value-printing Debug/Display. The ONLY access is expose_secret().

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
