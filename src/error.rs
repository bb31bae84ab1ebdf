use std::fmt;

/// Errors that can occur while constructing a [`Strategy`](crate::Strategy).
///
/// These indicate programming mistakes in how the strategy is wired up,
/// never a property of an incoming request. Request-time outcomes are
/// reported through [`Outcome`](crate::Outcome) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The strategy was built without a verification callback
    MissingVerifier,
    /// A configured field name is not a valid lookup path
    InvalidFieldPath(FieldPathError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingVerifier => write!(f, "strategy requires a verify callback"),
            Error::InvalidFieldPath(e) => write!(f, "Invalid field path: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingVerifier => None,
            Error::InvalidFieldPath(e) => Some(e),
        }
    }
}

impl From<FieldPathError> for Error {
    fn from(e: FieldPathError) -> Self {
        Error::InvalidFieldPath(e)
    }
}

/// A field name that could not be parsed into a lookup path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPathError {
    /// The field name as it was configured
    pub path: String,
    /// Why the field name was rejected
    pub kind: FieldPathErrorKind,
}

impl FieldPathError {
    /// Creates a new field path error.
    pub fn new(path: impl Into<String>, kind: FieldPathErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.path, self.kind)
    }
}

impl std::error::Error for FieldPathError {}

/// The kind of field path error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPathErrorKind {
    /// The field name is empty
    Empty,
    /// A key between brackets (or before the first one) is empty, as in `user[]`
    EmptySegment,
    /// A `[` without a matching `]`, or the reverse
    UnbalancedBrackets,
    /// Characters follow a closing bracket without opening a new segment, as in `a[b]c`
    TrailingCharacters,
}

impl fmt::Display for FieldPathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPathErrorKind::Empty => write!(f, "empty field name"),
            FieldPathErrorKind::EmptySegment => write!(f, "empty key segment"),
            FieldPathErrorKind::UnbalancedBrackets => write!(f, "unbalanced brackets"),
            FieldPathErrorKind::TrailingCharacters => {
                write!(f, "unexpected characters after ']'")
            }
        }
    }
}
