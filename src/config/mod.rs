//! Configuration types for the HTTP transport.
//!
//! # Overview
//!
//! - [`ClientConfig`]: settings used to construct an [`HttpClient`](crate::clients::HttpClient)
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: a validated base URL that relative paths are joined onto
//! - [`BasePath`]: a validated, non-empty resource collection path
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use rest_resource::{BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .default_header("X-Client", "inventory-ui")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().unwrap().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::{BasePath, BaseUrl};

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Configuration for an [`HttpClient`](crate::clients::HttpClient).
///
/// Everything is optional. Without a base URL, every request path must be an
/// absolute `http(s)://` URL.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    default_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base URL, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `None`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the transport's own default)
/// - `default_headers`: empty
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    default_headers: HashMap<String, String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL relative paths are joined onto.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the timeout applied to each request by the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Per-call headers with the same name take precedence.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if a default header name or
    /// value cannot be sent over HTTP.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        for (name, value) in &self.default_headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err()
                || HeaderValue::from_str(value).is_err()
            {
                return Err(ConfigError::InvalidHeader { name: name.clone() });
            }
        }

        Ok(ClientConfig {
            base_url: self.base_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            default_headers: self.default_headers,
        })
    }
}
