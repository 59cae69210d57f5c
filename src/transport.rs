//! Transport trait: the seam between resource objects and HTTP.
//!
//! Resources never touch the network themselves. They build a path, hand
//! it to a [`Transport`] together with opaque request parameters, and
//! return whatever the transport decodes. The shipped implementation is
//! [`BucketClient`](crate::BucketClient); tests substitute their own.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BucketError, Result};

/// Opaque request parameters.
///
/// A string-keyed JSON map passed through to the server unmodified.
/// Resources never inspect or validate these; which keys an endpoint
/// accepts is documented by the server, not by this crate.
pub type Params = serde_json::Map<String, Value>;

/// Convert any serializable value into [`Params`].
///
/// Convenient for callers who keep their request fields in a struct
/// rather than assembling a map by hand.
///
/// # Example
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NewIssue<'a> {
///     title: &'a str,
///     kind: &'a str,
/// }
///
/// let params = bucketapi::to_params(&NewIssue { title: "Widget jams", kind: "bug" }).unwrap();
/// assert_eq!(params["title"], "Widget jams");
/// ```
///
/// # Errors
///
/// Returns [`BucketError::InvalidArgument`] if the value does not
/// serialize to a JSON object, or a parse error if serialization fails.
pub fn to_params<T: Serialize>(value: &T) -> Result<Params> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(BucketError::InvalidArgument(format!(
            "request parameters must serialize to a JSON object, got {other}"
        ))),
    }
}

/// HTTP verb methods required from a transport collaborator.
///
/// `get` and `delete` serialize params into the query string; `post` and
/// `put` send them as a JSON body. Each method performs exactly one
/// request and returns the decoded response body, with an empty body
/// decoding to [`Value::Null`].
///
/// Implementations must not retry: errors propagate unchanged so callers
/// can decide what a failure means for them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, path: &str, params: &Params) -> Result<Value>;

    /// Perform a POST request.
    async fn post(&self, path: &str, params: &Params) -> Result<Value>;

    /// Perform a PUT request.
    async fn put(&self, path: &str, params: &Params) -> Result<Value>;

    /// Perform a DELETE request.
    async fn delete(&self, path: &str, params: &Params) -> Result<Value>;
}
