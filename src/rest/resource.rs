//! Resource services: CRUD conventions over an [`HttpService`].
//!
//! A resource type implements [`Resource`] to declare its name, its default
//! collection path and how to read its id. A [`ResourceService`] then
//! provides `query`, `get_all`, `get_one`, `create_one`, `update_one` and
//! `delete_one` with these URL conventions:
//!
//! | Operation    | Method | URL                     |
//! |--------------|--------|-------------------------|
//! | `query`      | GET    | `{path}`                |
//! | `get_all`    | GET    | `{path}`                |
//! | `get_one`    | GET    | `{path}/{id}`           |
//! | `create_one` | POST   | `{path}`                |
//! | `update_one` | PUT    | `{path}/{model.id}`     |
//! | `delete_one` | DELETE | `{path}/{id}`           |
//!
//! where `{path}` is the per-call override if given, else the service's base
//! path.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_resource::rest::{Resource, ResourceService, HttpService};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Todo {
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
//! let todos: ResourceService<Todo> = ResourceService::new(http_service)?;
//! let all = todos.get_all(None).await?;
//! let one = todos.get_one(3, None, None).await?;
//! ```

use std::fmt::{self, Display};
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpError, RequestOptions};
use crate::config::BasePath;
use crate::error::ConfigError;
use crate::rest::{
    effective_path, member_path, ErrorHandler, HttpService, OperationResult, ResourceError,
};

/// A REST-addressable entity type.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// The type of the resource's identifier.
    type Id: Display + Send + Sync;

    /// The singular name of the resource (e.g., "Todo"), used in errors and logs.
    const NAME: &'static str;

    /// The default collection path (e.g., "api/todos").
    const BASE_PATH: &'static str;

    /// Returns the resource's id, or `None` for an unsaved resource.
    fn id(&self) -> Option<Self::Id>;
}

/// What an id-addressed operation does when no id is available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingIdPolicy {
    /// Fail with [`ResourceError::MissingId`] without sending anything.
    #[default]
    Reject,
    /// Send the request to the collection path instead.
    CollectionRoot,
}

/// CRUD operations for one resource type `T`, answering with `E`.
///
/// `E` is the server's envelope for create, update and delete; it defaults
/// to [`OperationResult`].
///
/// The service owns an [`HttpService`] (and so its error handler) and a
/// non-empty base path; it holds no other state.
pub struct ResourceService<T, E = OperationResult> {
    http: HttpService,
    base_path: BasePath,
    missing_id: MissingIdPolicy,
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> Clone for ResourceService<T, E> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_path: self.base_path.clone(),
            missing_id: self.missing_id,
            _marker: PhantomData,
        }
    }
}

impl<T: Resource, E> fmt::Debug for ResourceService<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &T::NAME)
            .field("base_path", &self.base_path)
            .field("missing_id", &self.missing_id)
            .finish_non_exhaustive()
    }
}

impl<T, E> ResourceService<T, E>
where
    T: Resource,
    E: DeserializeOwned,
{
    /// Creates a service rooted at [`Resource::BASE_PATH`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBasePath`] if `T::BASE_PATH` is blank.
    pub fn new(http: HttpService) -> Result<Self, ConfigError> {
        Ok(Self::with_base_path(http, BasePath::new(T::BASE_PATH)?))
    }

    /// Creates a service rooted at an explicit base path.
    #[must_use]
    pub const fn with_base_path(http: HttpService, base_path: BasePath) -> Self {
        Self {
            http,
            base_path,
            missing_id: MissingIdPolicy::Reject,
            _marker: PhantomData,
        }
    }

    /// Sets what id-addressed operations do without an id.
    #[must_use]
    pub const fn missing_id_policy(mut self, policy: MissingIdPolicy) -> Self {
        self.missing_id = policy;
        self
    }

    /// Returns a copy of this service that uses a different error handler.
    #[must_use]
    pub fn with_error_handler(&self, handler: impl ErrorHandler + 'static) -> Self {
        Self {
            http: self.http.with_error_handler(handler),
            ..self.clone()
        }
    }

    /// Returns the resource's root URL.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.base_path.as_ref()
    }

    /// Returns the underlying verb-level service.
    #[must_use]
    pub const fn http(&self) -> &HttpService {
        &self.http
    }

    /// Routes a transport failure through this service's handler.
    pub fn handle_error(&self, error: HttpError) -> ResourceError {
        self.http.handle_error(error)
    }

    /// Fetches a list of resources, passing `options` straight to the transport.
    ///
    /// # Errors
    ///
    /// Returns the handler's mapping of any transport or decoding failure.
    pub async fn query(
        &self,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<Vec<T>, ResourceError> {
        let path = effective_path(path, self.base_path());
        self.http.get(path, options).await
    }

    /// Fetches every resource in the collection.
    ///
    /// # Errors
    ///
    /// See [`query`](Self::query).
    pub async fn get_all(&self, path: Option<&str>) -> Result<Vec<T>, ResourceError> {
        self.query(Some(RequestOptions::new()), path).await
    }

    /// Fetches one resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `id` is `None` under
    /// [`MissingIdPolicy::Reject`], else the handler's mapping of any
    /// transport or decoding failure.
    pub async fn get_one(
        &self,
        id: impl Into<Option<T::Id>> + Send,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<T, ResourceError> {
        let url = self.item_path(path, id.into(), "get_one")?;
        self.http.get(&url, options).await
    }

    /// Creates a resource by POSTing `model` to the collection.
    ///
    /// Without `options`, the request carries `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns the handler's mapping of any encoding, transport or decoding failure.
    pub async fn create_one(
        &self,
        model: &T,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<E, ResourceError> {
        let path = effective_path(path, self.base_path());
        let options = options.unwrap_or_else(RequestOptions::json);
        self.http.post(path, model, Some(options)).await
    }

    /// Updates a resource by PUTting `model` to `{path}/{model.id}`.
    ///
    /// Without `options`, the request carries `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the model has no id under
    /// [`MissingIdPolicy::Reject`], else the handler's mapping of any
    /// encoding, transport or decoding failure.
    pub async fn update_one(
        &self,
        model: &T,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<E, ResourceError> {
        let url = self.item_path(path, model.id(), "update_one")?;
        let options = options.unwrap_or_else(RequestOptions::json);
        self.http.put(&url, model, Some(options)).await
    }

    /// Deletes a resource by id.
    ///
    /// Without `options`, the request carries `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `id` is `None` under
    /// [`MissingIdPolicy::Reject`], else the handler's mapping of any
    /// transport or decoding failure.
    pub async fn delete_one(
        &self,
        id: impl Into<Option<T::Id>> + Send,
        options: Option<RequestOptions>,
        path: Option<&str>,
    ) -> Result<E, ResourceError> {
        let url = self.item_path(path, id.into(), "delete_one")?;
        let options = options.unwrap_or_else(RequestOptions::json);
        self.http.delete(&url, Some(options)).await
    }

    fn item_path(
        &self,
        path: Option<&str>,
        id: Option<T::Id>,
        operation: &'static str,
    ) -> Result<String, ResourceError> {
        let collection = effective_path(path, self.base_path());
        match (id, self.missing_id) {
            (Some(id), _) => Ok(member_path(collection, id)),
            (None, MissingIdPolicy::CollectionRoot) => {
                tracing::warn!(
                    resource = T::NAME,
                    operation,
                    path = collection,
                    "no id given, sending request to the collection path"
                );
                Ok(collection.to_string())
            }
            (None, MissingIdPolicy::Reject) => Err(ResourceError::MissingId {
                resource: T::NAME,
                operation,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpRequest, HttpResponse, Transport};
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Note {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        text: String,
    }

    impl Resource for Note {
        type Id = String;
        const NAME: &'static str = "Note";
        const BASE_PATH: &'static str = "api/notes";

        fn id(&self) -> Option<String> {
            self.id.clone()
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Blank;

    impl Resource for Blank {
        type Id = u8;
        const NAME: &'static str = "Blank";
        const BASE_PATH: &'static str = "";

        fn id(&self) -> Option<u8> {
            None
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            let body = match request.http_method {
                crate::clients::HttpMethod::Get if request.path.ends_with("notes") => json!([]),
                crate::clients::HttpMethod::Get => json!({"id": "n1", "text": "hi"}),
                _ => json!({"success": true}),
            };
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse::ok(body))
        }
    }

    fn service() -> (Arc<Recorder>, ResourceService<Note>) {
        let transport = Arc::new(Recorder::default());
        let http = HttpService::new(transport.clone());
        (transport, ResourceService::new(http).unwrap())
    }

    #[test]
    fn test_new_uses_resource_base_path() {
        let (_, notes) = service();
        assert_eq!(notes.base_path(), "api/notes");
    }

    #[test]
    fn test_new_rejects_blank_base_path() {
        let http = HttpService::new(Arc::new(Recorder::default()));
        let result = ResourceService::<Blank>::new(http);
        assert!(matches!(result, Err(ConfigError::EmptyBasePath)));
    }

    #[test]
    fn test_item_path_uses_override_and_id() {
        let (_, notes) = service();
        assert_eq!(
            notes
                .item_path(Some("api/archive"), Some("n9".to_string()), "get_one")
                .unwrap(),
            "api/archive/n9"
        );
    }

    #[test]
    fn test_item_path_missing_id_policies() {
        let (_, notes) = service();
        assert!(matches!(
            notes.item_path(None, None, "delete_one"),
            Err(ResourceError::MissingId {
                resource: "Note",
                operation: "delete_one"
            })
        ));

        let lenient = notes.missing_id_policy(MissingIdPolicy::CollectionRoot);
        assert_eq!(lenient.item_path(None, None, "delete_one").unwrap(), "api/notes");
    }

    #[tokio::test]
    async fn test_string_ids_are_appended_verbatim() {
        let (transport, notes) = service();

        let note = notes.get_one("n1".to_string(), None, None).await.unwrap();

        assert_eq!(note.text, "hi");
        assert_eq!(transport.seen.lock().unwrap()[0].path, "api/notes/n1");
    }

    #[tokio::test]
    async fn test_update_sends_model_as_body() {
        let (transport, notes) = service();
        let note = Note {
            id: Some("n2".to_string()),
            text: "edited".to_string(),
        };

        let result = notes.update_one(&note, None, None).await.unwrap();

        assert!(result.success);
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].path, "api/notes/n2");
        assert_eq!(seen[0].body, Some(json!({"id": "n2", "text": "edited"})));
    }

    #[test]
    fn test_debug_names_resource() {
        let (_, notes) = service();
        let debug = format!("{notes:?}");
        assert!(debug.contains("Note"));
        assert!(debug.contains("api/notes"));
    }
}
