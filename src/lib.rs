//! # rest-resource
//!
//! Typed REST resource services over a pluggable HTTP transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - A [`Transport`] trait and a `reqwest`-backed [`HttpClient`]
//! - [`HttpService`]: GET/POST/PUT/DELETE with a single overridable error handler
//! - [`ResourceService`]: `query`, `get_all`, `get_one`, `create_one`,
//!   `update_one` and `delete_one` with collection-root and `/{id}` URL conventions
//! - Response envelopes: [`OperationResult`] and [`ResourceResponse`]
//! - Validated configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rest_resource::{BaseUrl, ClientConfig, HttpClient, HttpService, Resource, ResourceService};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Todo {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub title: String,
//! }
//!
//! impl Resource for Todo {
//!     type Id = u64;
//!     const NAME: &'static str = "Todo";
//!     const BASE_PATH: &'static str = "api/todos";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config).unwrap();
//! let todos: ResourceService<Todo> = ResourceService::new(HttpService::new(Arc::new(client))).unwrap();
//!
//! assert_eq!(todos.base_path(), "api/todos");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! let all = todos.get_all(None).await?;
//! let one = todos.get_one(3, None, None).await?;
//! let created = todos.create_one(&Todo { id: None, title: "Milk".into() }, None, None).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: transports, handlers and base paths are passed explicitly
//! - **Lazy**: every operation is a future that does nothing until awaited
//! - **One interception point**: all transport failures pass through the service's [`ErrorHandler`]
//! - **Thread-safe**: services are `Clone + Send + Sync` and share their transport

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BasePath, BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RequestOptions, Transport,
};

// Re-export service types
pub use rest::{
    DefaultErrorHandler, ErrorHandler, HttpService, MissingIdPolicy, OperationResult, Payload,
    Resource, ResourceError, ResourceResponse, ResourceService,
};
