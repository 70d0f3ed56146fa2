//! URL conventions for resource services.
//!
//! A resource lives at a collection path; a single item lives at the
//! collection path followed by `/` and its id. Paths are never encoded or
//! validated here.

use std::fmt::Display;

/// Returns the explicit path when given, otherwise the base path.
///
/// # Example
///
/// ```rust
/// use rest_resource::rest::effective_path;
///
/// assert_eq!(effective_path(None, "api/todos"), "api/todos");
/// assert_eq!(effective_path(Some("api/archive"), "api/todos"), "api/archive");
/// ```
#[must_use]
pub fn effective_path<'a>(explicit: Option<&'a str>, base: &'a str) -> &'a str {
    explicit.unwrap_or(base)
}

/// Appends `/{id}` to a collection path.
///
/// # Example
///
/// ```rust
/// use rest_resource::rest::member_path;
///
/// assert_eq!(member_path("api/todos", 7), "api/todos/7");
/// assert_eq!(member_path("api/todos", "a b"), "api/todos/a b");
/// ```
#[must_use]
pub fn member_path(collection: &str, id: impl Display) -> String {
    format!("{collection}/{id}")
}
