//! Response envelopes.
//!
//! - [`OperationResult`]: a generic success/message/data record, the default
//!   response type of [`ResourceService`](crate::rest::ResourceService)
//! - [`ResourceResponse<T>`]: a resource envelope with pagination counters
//!   and a [`Payload<T>`] that is either one item or a list
//!
//! # Example
//!
//! ```rust
//! use rest_resource::rest::{Payload, ResourceResponse};
//! use serde_json::json;
//!
//! let response: ResourceResponse<String> = serde_json::from_value(json!({
//!     "success": true,
//!     "message": "ok",
//!     "totalCount": 12,
//!     "totalPages": 6,
//!     "resultCount": 2,
//!     "data": ["a", "b"]
//! }))
//! .unwrap();
//!
//! assert!(response.data.is_list());
//! assert_eq!(response.total_pages, 6);
//! assert_eq!(response.into_items(), vec!["a".to_string(), "b".to_string()]);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A generic operation outcome reported by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// A human-readable message.
    #[serde(default)]
    pub message: String,
    /// Arbitrary string key-value data.
    #[serde(default)]
    pub data: HashMap<String, String>,
}

/// The payload of a [`ResourceResponse`]: one item or a list of items.
///
/// On the wire a list is a JSON array and a single item is anything else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    /// A list of items.
    List(Vec<T>),
    /// A single item.
    Single(T),
}

impl<T> Default for Payload<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Payload<T> {
    /// Returns an empty list.
    #[must_use]
    pub const fn empty() -> Self {
        Self::List(Vec::new())
    }

    /// Returns `true` for [`Payload::List`].
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the item when this is [`Payload::Single`].
    #[must_use]
    pub const fn as_single(&self) -> Option<&T> {
        match self {
            Self::Single(item) => Some(item),
            Self::List(_) => None,
        }
    }

    /// Returns the items when this is [`Payload::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[T]> {
        match self {
            Self::List(items) => Some(items),
            Self::Single(_) => None,
        }
    }

    /// Returns the number of items (1 for a single item).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Single(_) => 1,
        }
    }

    /// Returns `true` for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts the payload into a list; a single item becomes a one-item list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::List(items) => items,
            Self::Single(item) => vec![item],
        }
    }
}

/// A resource envelope: status, message, pagination counters and payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse<T> {
    /// Whether the request succeeded.
    #[serde(default)]
    pub success: bool,
    /// A human-readable message.
    #[serde(default)]
    pub message: String,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u64,
    /// Number of items in this response.
    #[serde(default)]
    pub result_count: u64,
    /// The payload; an empty list when the server sends none.
    #[serde(default = "Payload::empty")]
    pub data: Payload<T>,
}

impl<T> ResourceResponse<T> {
    /// Returns the single item, if the payload is one.
    #[must_use]
    pub const fn single(&self) -> Option<&T> {
        self.data.as_single()
    }

    /// Consumes the response and returns its items as a list.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.data.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Todo {
        id: u64,
        title: String,
    }

    #[test]
    fn test_operation_result_defaults_missing_fields() {
        let result: OperationResult = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(result.success);
        assert!(result.message.is_empty());
        assert!(result.data.is_empty());
    }

    #[test]
    fn test_operation_result_with_data() {
        let result: OperationResult = serde_json::from_value(json!({
            "success": true,
            "message": "created",
            "data": {"id": "17"}
        }))
        .unwrap();
        assert_eq!(result.data.get("id"), Some(&"17".to_string()));
    }

    #[test]
    fn test_resource_response_single_payload() {
        let response: ResourceResponse<Todo> = serde_json::from_value(json!({
            "success": true,
            "message": "found",
            "data": {"id": 1, "title": "Milk"}
        }))
        .unwrap();

        assert!(!response.data.is_list());
        assert_eq!(response.single().map(|t| t.id), Some(1));
        assert_eq!(response.total_count, 0);
        assert_eq!(response.data.len(), 1);
    }

    #[test]
    fn test_resource_response_list_payload() {
        let response: ResourceResponse<Todo> = serde_json::from_value(json!({
            "success": true,
            "message": "",
            "totalCount": 3,
            "totalPages": 2,
            "resultCount": 2,
            "data": [{"id": 1, "title": "Milk"}, {"id": 2, "title": "Eggs"}]
        }))
        .unwrap();

        assert_eq!(response.total_count, 3);
        assert_eq!(response.result_count, 2);
        assert_eq!(response.data.as_list().map(<[Todo]>::len), Some(2));
        assert!(response.single().is_none());
        assert_eq!(response.into_items()[1].title, "Eggs");
    }

    #[test]
    fn test_empty_list_payload() {
        let payload: Payload<Todo> = serde_json::from_value(json!([])).unwrap();
        assert!(payload.is_list());
        assert!(payload.is_empty());
    }

    #[test]
    fn test_payload_serializes_untagged() {
        let single = Payload::Single(Todo {
            id: 4,
            title: "Bread".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&single).unwrap(),
            json!({"id": 4, "title": "Bread"})
        );
        assert_eq!(
            serde_json::to_value(Payload::<Todo>::List(vec![])).unwrap(),
            json!([])
        );
    }

    #[test]
    fn test_missing_data_is_an_empty_list() {
        let response: ResourceResponse<Todo> =
            serde_json::from_value(json!({"success": true, "message": "deleted"})).unwrap();

        assert!(response.success);
        assert_eq!(response.message, "deleted");
        assert!(response.data.is_list());
        assert!(response.data.is_empty());
        assert!(response.single().is_none());
    }

    #[test]
    fn test_payload_default_is_empty_list() {
        assert_eq!(Payload::<Todo>::default(), Payload::List(vec![]));
    }
}
