//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated base URL that relative request paths are joined onto.
///
/// The URL must use the `http` or `https` scheme and name a host. A trailing
/// `/` is removed so that joining never produces a double slash at the seam.
///
/// # Example
///
/// ```rust
/// use rest_resource::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.example.com");
/// assert_eq!(url.join("todos/3"), "https://api.example.com/v1/todos/3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not `http` or
    /// `https`, or if the host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start >= host_end {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative request path onto this URL with exactly one `/`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.url.clone();
        }
        format!("{}/{path}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// The root path of a resource collection, e.g. `api/todos`.
///
/// The only rule enforced is that the path is non-empty; it is otherwise kept
/// verbatim (relative or absolute) and never URL-encoded.
///
/// # Example
///
/// ```rust
/// use rest_resource::BasePath;
///
/// let path = BasePath::new("api/todos").unwrap();
/// assert_eq!(path.as_ref(), "api/todos");
/// assert!(BasePath::new("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Creates a new validated base path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBasePath`] if the path is empty or only
    /// whitespace.
    pub fn new(path: impl Into<String>) -> Result<Self, ConfigError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ConfigError::EmptyBasePath);
        }
        Ok(Self(path))
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_https_with_path() {
        let url = BaseUrl::new("https://api.example.com/v1").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.example.com");
        assert_eq!(url.as_ref(), "https://api.example.com/v1");
    }

    #[test]
    fn test_base_url_accepts_http_with_port() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://api.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_base_url_rejects_invalid_urls() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("api.example.com").is_err());
        assert!(BaseUrl::new("ftp://files.example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https://:8080").is_err());
    }

    #[test]
    fn test_base_url_join_uses_single_separator() {
        let url = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(url.join("todos"), "https://api.example.com/todos");
        assert_eq!(url.join("/todos/1"), "https://api.example.com/todos/1");
        assert_eq!(url.join(""), "https://api.example.com");
    }

    #[test]
    fn test_base_path_rejects_blank() {
        assert!(matches!(BasePath::new(""), Err(ConfigError::EmptyBasePath)));
        assert!(matches!(BasePath::new(" \t"), Err(ConfigError::EmptyBasePath)));
    }

    #[test]
    fn test_base_path_kept_verbatim() {
        let path = BasePath::new("https://api.example.com/todos").unwrap();
        assert_eq!(path.to_string(), "https://api.example.com/todos");
    }
}
