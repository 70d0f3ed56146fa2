//! The error interception hook.
//!
//! Every failure of an [`HttpService`](crate::rest::HttpService) (and so of
//! every [`ResourceService`](crate::rest::ResourceService) built on it) goes
//! through exactly one [`ErrorHandler`]. Swapping the handler changes what
//! callers of that service observe, and nothing else.

use crate::clients::HttpError;
use crate::rest::ResourceError;

/// Maps a transport failure to the error callers see.
///
/// Any `Fn(HttpError) -> ResourceError + Send + Sync` closure is a handler.
///
/// # Example
///
/// ```rust
/// use rest_resource::clients::HttpError;
/// use rest_resource::rest::{ErrorHandler, ResourceError};
///
/// struct LoginRedirect;
///
/// impl ErrorHandler for LoginRedirect {
///     fn handle_error(&self, error: HttpError) -> ResourceError {
///         if error.status() == Some(401) {
///             return ResourceError::Message("session expired, please log in".to_string());
///         }
///         ResourceError::Http(error)
///     }
/// }
/// ```
pub trait ErrorHandler: Send + Sync {
    /// Converts a transport failure into the caller-visible error.
    fn handle_error(&self, error: HttpError) -> ResourceError;
}

/// The default handler.
///
/// Surfaces the server's message (see [`HttpError::message`]) when the
/// response carried one, otherwise the raw error.
/// There is no recovery, retry or suppression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn handle_error(&self, error: HttpError) -> ResourceError {
        match error.message() {
            Some(message) => ResourceError::Message(message.to_string()),
            None => ResourceError::Http(error),
        }
    }
}

impl<F> ErrorHandler for F
where
    F: Fn(HttpError) -> ResourceError + Send + Sync,
{
    fn handle_error(&self, error: HttpError) -> ResourceError {
        self(error)
    }
}
