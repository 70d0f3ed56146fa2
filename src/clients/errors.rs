//! HTTP-specific error types.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for everything a [`Transport`](crate::clients::Transport) can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_resource::clients::{HttpError, Transport};
//!
//! match transport.get("todos", RequestOptions::new()).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("Status {}: {:?}", e.code, e.message),
//!     Err(e) => println!("Transport failure: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// `message` is the human-readable message the server put in the body
/// (`message`, then `error`), if any. The raw body is kept for handlers that
/// need more than the message.
///
/// # Example
///
/// ```rust
/// use rest_resource::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: Some("Todo not found".to_string()),
///     body: serde_json::json!({"message": "Todo not found"}),
///     request_id: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: Todo not found");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {}", .message.as_deref().unwrap_or("request failed"))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The message extracted from the response body, if any.
    pub message: Option<String>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Request ID from the `X-Request-Id` header, if present.
    pub request_id: Option<String>,
}

impl HttpResponseError {
    /// Extracts a human-readable message from an error body.
    ///
    /// Looks at `message`, then `error`, then accepts a bare JSON string body.
    #[must_use]
    pub fn extract_message(body: &serde_json::Value) -> Option<String> {
        let from_field = |key: &str| {
            body.get(key)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        from_field("message")
            .or_else(|| from_field("error"))
            .or_else(|| body.as_str().filter(|s| !s.is_empty()).map(String::from))
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A relative path was given to a transport without a base URL.
    #[error("Cannot resolve relative path '{path}' without a configured base URL.")]
    RelativePathWithoutBase {
        /// The relative path that was provided.
        path: String,
    },
}

/// Unified error type for all transport failures.
///
/// No distinction is made upstream between these variants: they are all
/// routed through the same error handler. The variants exist so that a
/// custom handler can tell them apart.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The response body did not match the requested type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    /// Returns the message the server put in an error response body.
    ///
    /// Only [`HttpError::Response`] can carry one; every other variant
    /// returns `None` and is described by its `Display` text instead.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.message.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if the failure was a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
