//! Service layers built on a [`Transport`](crate::clients::Transport).
//!
//! - [`HttpService`]: GET/POST/PUT/DELETE against any path, decoding into the
//!   caller's type, with every failure routed through one [`ErrorHandler`]
//! - [`ResourceService`]: REST conventions (collection root, `/{id}`) for a
//!   [`Resource`] type, built on an `HttpService` by composition
//! - [`OperationResult`], [`ResourceResponse`] and [`Payload`]: response envelopes
//! - [`ResourceError`]: what callers see when an operation fails
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rest_resource::{BaseUrl, ClientConfig, HttpClient};
//! use rest_resource::rest::{HttpService, ResourceService};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let http = HttpService::new(Arc::new(HttpClient::new(&config)?));
//!
//! // One service per resource, typically created once at startup.
//! let todos: ResourceService<Todo> = ResourceService::new(http.clone())?;
//!
//! let open = todos
//!     .query(Some(RequestOptions::new().param("done", "false")), None)
//!     .await?;
//! let created = todos.create_one(&new_todo, None, None).await?;
//! todos.delete_one(open[0].id, None, None).await?;
//! ```

mod errors;
mod handler;
mod path;
mod resource;
mod response;
mod service;

pub use errors::ResourceError;
pub use handler::{DefaultErrorHandler, ErrorHandler};
pub use path::{effective_path, member_path};
pub use resource::{MissingIdPolicy, Resource, ResourceService};
pub use response::{OperationResult, Payload, ResourceResponse};
pub use service::HttpService;
