//! Shared proptest generators for unit tests.

use proptest::prelude::*;

/// Generates keys usable as a flat field name or a single path segment.
pub(crate) fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

/// Generates non-empty credential values, including characters common in
/// passwords and urls.
pub(crate) fn arb_credential_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9:/._@!#%-]{1,32}"
}
