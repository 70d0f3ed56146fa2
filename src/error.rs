//! Error types for configuration and validation.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid input is rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use rest_resource::{BasePath, ConfigError};
//!
//! let result = BasePath::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBasePath)));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A resource base path cannot be empty.
    #[error("Base path cannot be empty. Every resource service needs a collection path.")]
    EmptyBasePath,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http or https URL (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A default header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'. Header names must be non-empty and names and values must be visible ASCII.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_path_error_message() {
        let message = ConfigError::EmptyBasePath.to_string();
        assert!(message.contains("Base path cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_includes_url() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http or https"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidHeader {
            name: "bad header".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
