//! Error type returned by service operations.
//!
//! Every transport failure reaches callers as whatever the service's
//! [`ErrorHandler`](crate::rest::ErrorHandler) turns it into. With the
//! default handler that is:
//!
//! - [`ResourceError::Message`] when the failure carries a server message
//! - [`ResourceError::Http`] with the raw [`HttpError`] otherwise
//!
//! [`ResourceError::MissingId`] is raised before any request is sent and
//! never passes through the handler.
//!
//! # Example
//!
//! ```rust,ignore
//! match todos.get_one(42, None, None).await {
//!     Ok(todo) => println!("Found: {}", todo.title),
//!     Err(ResourceError::Message(message)) => println!("Server said: {message}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for service operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A failure reduced to a message.
    ///
    /// Produced by the default handler when the transport error carries a
    /// server message, and available to custom handlers.
    #[error("{0}")]
    Message(String),

    /// The raw transport error.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// An id-addressed operation was called without an id.
    #[error("{resource}::{operation} requires an id")]
    MissingId {
        /// The resource name (e.g., "Todo").
        resource: &'static str,
        /// The operation being attempted (e.g., "update_one").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Returns the HTTP status code when the raw transport error is kept.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
