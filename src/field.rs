//! Field paths naming where a credential lives inside a request mapping.
//!
//! A field name is either a flat key (`"username"`) or an object-notation
//! path (`"user[username]"`, `"account[login][name]"`). Paths are parsed
//! once when the strategy is built and then resolved against every request.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{FieldPathError, FieldPathErrorKind};

/// A parsed lookup path.
///
/// # Examples
///
/// ```
/// use local_url_strategy::FieldPath;
/// use serde_json::json;
///
/// let path: FieldPath = "user[username]".parse().unwrap();
/// let body = json!({ "user": { "username": "johndoe" } });
///
/// assert_eq!(path.resolve(&body), Some("johndoe"));
/// assert_eq!(path.to_string(), "user[username]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    /// A single key looked up directly in the source mapping
    Flat(String),
    /// A parent key followed by nested keys, looked up in order.
    ///
    /// [`FieldPath::parse`] only builds this with at least one child. An
    /// empty `children` list resolves and displays like `Flat(parent)`.
    Nested {
        /// Key looked up in the source mapping
        parent: String,
        /// Keys looked up inside the parent, outermost first
        children: Vec<String>,
    },
}

impl FieldPath {
    /// Parses a configured field name.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldPathError`] if the name is empty, contains an empty
    /// segment, or has brackets that do not pair up as `parent[child]`.
    pub fn parse(raw: &str) -> Result<Self, FieldPathError> {
        let err = |kind| FieldPathError::new(raw, kind);

        if raw.is_empty() {
            return Err(err(FieldPathErrorKind::Empty));
        }

        let Some(open) = raw.find('[') else {
            if raw.contains(']') {
                return Err(err(FieldPathErrorKind::UnbalancedBrackets));
            }
            return Ok(FieldPath::Flat(raw.to_string()));
        };

        let (parent, mut rest) = raw.split_at(open);
        if parent.is_empty() {
            return Err(err(FieldPathErrorKind::EmptySegment));
        }
        if parent.contains(']') {
            return Err(err(FieldPathErrorKind::UnbalancedBrackets));
        }

        let mut children = Vec::new();
        while !rest.is_empty() {
            let Some(inner) = rest.strip_prefix('[') else {
                return Err(err(FieldPathErrorKind::TrailingCharacters));
            };
            let Some(close) = inner.find(']') else {
                return Err(err(FieldPathErrorKind::UnbalancedBrackets));
            };
            let key = &inner[..close];
            if key.contains('[') {
                return Err(err(FieldPathErrorKind::UnbalancedBrackets));
            }
            if key.is_empty() {
                return Err(err(FieldPathErrorKind::EmptySegment));
            }
            children.push(key.to_string());
            rest = &inner[close + 1..];
        }

        tracing::trace!(path = raw, depth = children.len() + 1, "parsed nested field path");
        Ok(FieldPath::Nested {
            parent: parent.to_string(),
            children,
        })
    }

    /// Resolves this path inside a single source mapping.
    ///
    /// Returns the value only when it is a non-empty string. Absent keys,
    /// `null`, non-string values, and `""` all count as missing, as does a
    /// nested path whose parent is not itself a mapping.
    pub fn resolve<'a>(&self, source: &'a Value) -> Option<&'a str> {
        let value = match self {
            FieldPath::Flat(key) => source.get(key.as_str())?,
            FieldPath::Nested { parent, children } => children
                .iter()
                .try_fold(source.get(parent.as_str())?, |current, key| {
                    current.get(key.as_str())
                })?,
        };

        match value.as_str() {
            Some(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Resolves this path in `body`, falling back to `query` when the body
    /// is absent or does not yield a value.
    pub fn lookup<'a>(
        &self,
        body: Option<&'a Value>,
        query: Option<&'a Value>,
    ) -> Option<&'a str> {
        body.and_then(|b| self.resolve(b))
            .or_else(|| query.and_then(|q| self.resolve(q)))
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Flat(key) => f.write_str(key),
            FieldPath::Nested { parent, children } => {
                f.write_str(parent)?;
                for child in children {
                    write!(f, "[{}]", child)?;
                }
                Ok(())
            }
        }
    }
}
