//! The transport seam.
//!
//! [`Transport`] is the only thing the service layers need from an HTTP
//! client. [`HttpClient`](crate::clients::HttpClient) implements it with
//! `reqwest`; tests and alternative backends can implement it directly.

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestOptions};
use crate::clients::http_response::HttpResponse;

/// An HTTP transport capable of executing GET, POST, PUT and DELETE requests.
///
/// Implementors provide [`request`](Transport::request); the verb methods
/// build and validate an [`HttpRequest`] and delegate to it.
///
/// A successful result must be a 2xx response. Anything else (non-2xx
/// status, network failure) is reported as an [`HttpError`].
///
/// The trait is object-safe so a single transport can be shared as
/// `Arc<dyn Transport>` by every service in an application.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use rest_resource::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct Echo;
///
/// #[async_trait]
/// impl Transport for Echo {
///     async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok(request.body.unwrap_or_default()))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes a request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any failure, including non-2xx responses.
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Transport::request).
    async fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .options(options)
            .build()?;
        self.request(request).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Transport::request).
    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .options(options)
            .build()?;
        self.request(request).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Transport::request).
    async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .options(options)
            .build()?;
        self.request(request).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Transport::request).
    async fn delete(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .options(options)
            .build()?;
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse::ok(json!({})))
        }
    }

    #[tokio::test]
    async fn test_verb_methods_build_matching_requests() {
        let transport = Recorder::default();

        transport.get("a", RequestOptions::new()).await.unwrap();
        transport
            .post("b", json!({"x": 1}), RequestOptions::json())
            .await
            .unwrap();
        transport
            .put("c/1", json!({"x": 2}), RequestOptions::new())
            .await
            .unwrap();
        transport
            .delete("c/1", RequestOptions::new().param("hard", "true"))
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        let methods: Vec<_> = seen.iter().map(|r| r.http_method).collect();
        assert_eq!(
            methods,
            vec![
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Put,
                HttpMethod::Delete
            ]
        );
        assert_eq!(seen[1].body, Some(json!({"x": 1})));
        assert_eq!(seen[1].header("content-type"), Some("application/json"));
        assert_eq!(seen[3].options.params.get("hard"), Some(&"true".to_string()));
    }

    #[test]
    fn test_transport_is_object_safe() {
        let transport: std::sync::Arc<dyn Transport> = std::sync::Arc::new(Recorder::default());
        let _ = transport;
    }
}
