//! The request boundary the strategy reads credentials from.
//!
//! Request parsing happens upstream. By the time the strategy runs, a host
//! has decoded the body and the query string into JSON-like values and
//! exposes them through [`CredentialSource`].

use serde_json::Value;

/// Read-only view of the parts of a request that may carry credentials.
///
/// Framework integrations implement this for their own request types, or
/// copy the relevant parts into a [`RequestSnapshot`].
///
/// # Examples
///
/// ```
/// use local_url_strategy::CredentialSource;
/// use serde_json::{json, Value};
///
/// struct FormRequest {
///     form: Value,
/// }
///
/// impl CredentialSource for FormRequest {
///     fn body(&self) -> Option<&Value> {
///         Some(&self.form)
///     }
///
///     fn query(&self) -> Option<&Value> {
///         None
///     }
/// }
///
/// let req = FormRequest { form: json!({ "username": "johndoe" }) };
/// assert!(req.body().is_some());
/// ```
pub trait CredentialSource {
    /// The decoded request body, if the request had one.
    fn body(&self) -> Option<&Value>;

    /// The decoded query parameters, if the request had any.
    fn query(&self) -> Option<&Value>;
}

impl<T: CredentialSource + ?Sized> CredentialSource for &T {
    fn body(&self) -> Option<&Value> {
        (**self).body()
    }

    fn query(&self) -> Option<&Value> {
        (**self).query()
    }
}

/// An owned request snapshot holding an optional body and query mapping.
///
/// # Examples
///
/// ```
/// use local_url_strategy::{CredentialSource, RequestSnapshot};
/// use serde_json::json;
///
/// let req = RequestSnapshot::new().with_body(json!({
///     "username": "johndoe",
///     "password": "secret",
///     "url": "http://localhost",
/// }));
/// assert!(req.body().is_some());
/// assert!(req.query().is_none());
///
/// let mut req = RequestSnapshot::new();
/// req.add_query_param("username", "johndoe");
/// assert_eq!(req.query().unwrap()["username"], "johndoe");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSnapshot {
    body: Option<Value>,
    query: Option<Value>,
}

impl RequestSnapshot {
    /// Creates a snapshot with neither a body nor a query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decoded body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the decoded query parameters.
    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a top-level body field, creating an empty body first if needed.
    ///
    /// A body that is not a mapping is replaced.
    pub fn add_body_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        insert_field(&mut self.body, key.into(), value.into());
    }

    /// Adds a query parameter, creating an empty query first if needed.
    ///
    /// A query that is not a mapping is replaced.
    pub fn add_query_param(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        insert_field(&mut self.query, key.into(), value.into());
    }
}

fn insert_field(slot: &mut Option<Value>, key: String, value: Value) {
    let target = slot.get_or_insert(Value::Null);
    if !target.is_object() {
        *target = Value::Null;
    }
    // Indexing a null value by key turns it into an object
    target[key] = value;
}

impl CredentialSource for RequestSnapshot {
    fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    fn query(&self) -> Option<&Value> {
        self.query.as_ref()
    }
}
