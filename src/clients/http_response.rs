//! HTTP response type.
//!
//! [`HttpResponse`] is what a [`Transport`](crate::clients::Transport) hands
//! back on success: the status code, the headers, and the body parsed as JSON.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;

/// A response from a transport.
///
/// Header names are stored lowercase; a header may carry multiple values.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`null` when the body was empty).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Creates a `200 OK` response with no headers.
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(200, HashMap::new(), body)
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header (name is matched lowercase).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Decodes the body into the requested type.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body does not match `E`.
    pub fn json<E: DeserializeOwned>(&self) -> Result<E, HttpError> {
        E::deserialize(&self.body).map_err(HttpError::Decode)
    }
}
