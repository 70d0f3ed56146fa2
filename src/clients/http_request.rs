//! HTTP request types.
//!
//! This module provides [`HttpRequest`] and its builder, plus
//! [`RequestOptions`], the per-call configuration bag passed through to the
//! transport untouched.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Header name used for the JSON default.
pub const CONTENT_TYPE: &str = "Content-Type";

/// MIME type used for JSON request bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP methods supported by a [`Transport`](crate::clients::Transport).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Per-call request configuration: headers and query parameters.
///
/// This layer never interprets these values; they are handed to the
/// transport as-is. Build a fresh value per call.
///
/// # Example
///
/// ```rust
/// use rest_resource::clients::RequestOptions;
///
/// let options = RequestOptions::json()
///     .header("Authorization", "Bearer abc")
///     .param("page", "2");
///
/// assert_eq!(options.headers.get("Content-Type").map(String::as_str), Some("application/json"));
/// assert_eq!(options.params.get("page").map(String::as_str), Some("2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Headers to include in the request.
    pub headers: HashMap<String, String>,
    /// Query parameters to append to the URL.
    pub params: HashMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options carrying only `Content-Type: application/json`.
    ///
    /// Used as the default for create, update and delete calls.
    #[must_use]
    pub fn json() -> Self {
        Self::new().header(CONTENT_TYPE, APPLICATION_JSON)
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// An HTTP request to be executed by a [`Transport`](crate::clients::Transport).
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use rest_resource::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "api/todos")
///     .body(json!({"title": "Write docs"}))
///     .header("Content-Type", "application/json")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "api/todos");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the transport's base URL, or absolute).
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// Headers and query parameters.
    pub options: RequestOptions,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Put` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.options
            .headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    options: RequestOptions,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces headers and query parameters with the given options.
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options = self.options.header(key, value);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options = self.options.param(key, value);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            options: self.options,
        };
        request.verify()?;
        Ok(request)
    }
}
