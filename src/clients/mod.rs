//! HTTP transport layer.
//!
//! This module provides the transport seam the service layers are built on,
//! and a `reqwest`-backed implementation of it.
//!
//! # Overview
//!
//! - [`Transport`]: the trait every HTTP backend implements
//! - [`HttpClient`]: the default `reqwest` transport
//! - [`HttpRequest`]: a request to be executed
//! - [`RequestOptions`]: per-call headers and query parameters
//! - [`HttpResponse`]: a parsed response
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: everything a transport can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_resource::clients::{HttpClient, RequestOptions, Transport};
//! use rest_resource::{BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let response = client
//!     .get("todos", RequestOptions::new().param("done", "false"))
//!     .await?;
//! println!("{}", response.body);
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    HttpMethod, HttpRequest, HttpRequestBuilder, RequestOptions, APPLICATION_JSON, CONTENT_TYPE,
};
pub use http_response::HttpResponse;
pub use transport::Transport;
