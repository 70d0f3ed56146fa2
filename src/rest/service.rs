//! The base HTTP wrapper.
//!
//! [`HttpService`] exposes the four verbs over a shared [`Transport`], decodes
//! successful responses into the caller's type, and routes every failure
//! through its [`ErrorHandler`].

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpError, HttpResponse, RequestOptions, Transport};
use crate::rest::{DefaultErrorHandler, ErrorHandler, ResourceError};

/// Verb-level access to a transport with a single error interception point.
///
/// Every method returns a lazy future: nothing is sent until it is awaited,
/// and each call is an independent request. Dropping the future before it
/// completes drops the transport's in-flight request with it.
///
/// Cloning is cheap: the transport and handler are shared behind `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use rest_resource::rest::{HttpService, OperationResult};
///
/// let service = HttpService::new(Arc::new(http_client));
/// let result: OperationResult = service.post("api/login", &credentials, None).await?;
/// ```
#[derive(Clone)]
pub struct HttpService {
    transport: Arc<dyn Transport>,
    error_handler: Arc<dyn ErrorHandler>,
}

impl fmt::Debug for HttpService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpService").finish_non_exhaustive()
    }
}

// Verify HttpService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpService>();
};

impl HttpService {
    /// Creates a service over the given transport with the default handler.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            error_handler: Arc::new(DefaultErrorHandler),
        }
    }

    /// Returns a copy of this service that uses a different error handler.
    ///
    /// The transport stays shared; the original service keeps its handler.
    #[must_use]
    pub fn with_error_handler(&self, handler: impl ErrorHandler + 'static) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            error_handler: Arc::new(handler),
        }
    }

    /// Returns the shared transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Routes a transport failure through this service's handler.
    pub fn handle_error(&self, error: HttpError) -> ResourceError {
        tracing::debug!(error = %error, "routing transport failure through error handler");
        self.error_handler.handle_error(error)
    }

    /// Sends a GET request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns the handler's mapping of any transport or decoding failure.
    pub async fn get<E: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<E, ResourceError> {
        let result = self
            .transport
            .get(path, options.unwrap_or_default())
            .await;
        self.decode(result)
    }

    /// Sends a POST request with `body` encoded as JSON and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns the handler's mapping of any encoding, transport or decoding failure.
    pub async fn post<B, E>(
        &self,
        path: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<E, ResourceError>
    where
        B: Serialize + ?Sized + Sync,
        E: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| self.handle_error(e.into()))?;
        let result = self
            .transport
            .post(path, body, options.unwrap_or_default())
            .await;
        self.decode(result)
    }

    /// Sends a PUT request with `body` encoded as JSON and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns the handler's mapping of any encoding, transport or decoding failure.
    pub async fn put<B, E>(
        &self,
        path: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<E, ResourceError>
    where
        B: Serialize + ?Sized + Sync,
        E: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| self.handle_error(e.into()))?;
        let result = self
            .transport
            .put(path, body, options.unwrap_or_default())
            .await;
        self.decode(result)
    }

    /// Sends a DELETE request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns the handler's mapping of any transport or decoding failure.
    pub async fn delete<E: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<E, ResourceError> {
        let result = self
            .transport
            .delete(path, options.unwrap_or_default())
            .await;
        self.decode(result)
    }

    fn decode<E: DeserializeOwned>(
        &self,
        result: Result<HttpResponse, HttpError>,
    ) -> Result<E, ResourceError> {
        result
            .and_then(|response| response.json())
            .map_err(|e| self.handle_error(e))
    }
}
