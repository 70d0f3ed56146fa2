//! `reqwest`-backed transport.
//!
//! This module provides [`HttpClient`], the default [`Transport`]
//! implementation.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, APPLICATION_JSON, CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{BaseUrl, ClientConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client that executes requests with `reqwest`.
///
/// The client handles:
/// - URL construction from the configured base URL (absolute paths pass through)
/// - Default headers including `User-Agent` and `Accept`
/// - JSON request bodies and JSON response parsing
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// There is no retry logic. Dropping a pending request future aborts the
/// underlying connection attempt.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use rest_resource::{BaseUrl, ClientConfig, HttpClient, RequestOptions, Transport};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let response = client.get("todos", RequestOptions::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL relative paths are joined onto.
    base_url: Option<BaseUrl>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}rest-resource v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        for (name, value) in config.default_headers() {
            default_headers.insert(name.clone(), value.clone());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().cloned(),
            default_headers,
        })
    }

    /// Returns the base URL for this client, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path to a full URL.
    ///
    /// Absolute `http://` and `https://` paths are used as-is. Relative paths
    /// are joined onto the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::RelativePathWithoutBase`] for a
    /// relative path when no base URL is configured.
    pub fn resolve_url(&self, path: &str) -> Result<String, InvalidHttpRequestError> {
        if is_absolute(path) {
            return Ok(path.to_string());
        }

        self.base_url.as_ref().map(|base| base.join(path)).ok_or_else(|| {
            InvalidHttpRequestError::RelativePathWithoutBase {
                path: path.to_string(),
            }
        })
    }

    /// Merges default headers with the request's own (per-call wins, names
    /// compared case-insensitively).
    ///
    /// A request with a body gets `Content-Type: application/json` unless a
    /// content type was already given.
    fn merge_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        for (key, value) in &request.options.headers {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            headers.insert(key.clone(), value.clone());
        }

        let has_content_type = headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case(CONTENT_TYPE));
        if request.body.is_some() && !has_content_type {
            headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        }

        headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses a response body: empty is `null`, non-JSON is a JSON string.
    fn parse_body(text: String) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path)?;

        let headers = self.merge_headers(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.options.params.is_empty() {
            req_builder = req_builder.query(&request.options.params);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(serde_json::to_vec(body)?);
        }

        tracing::debug!(method = %request.http_method, %url, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = Self::parse_body(res.text().await?);

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!(
            method = %request.http_method,
            %url,
            status = code,
            "request returned an error status"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: HttpResponseError::extract_message(&response.body),
            request_id: response.request_id().map(String::from),
            body: response.body,
        }))
    }
}

fn is_absolute(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
