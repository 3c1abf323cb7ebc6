//! Typed access for `serde_json` documents.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as Json;
use tracing::debug;

use crate::traverse::{get, set};

/// Reads the node at `path` as a `T`.
///
/// `None` when the path is malformed, absent, or holds something `T` cannot
/// be deserialized from.
///
/// ```
/// use jpath::extract::get_as;
/// use serde_json::json;
///
/// let doc = json!({"user": {"age": 36, "name": "Ada"}});
/// assert_eq!(get_as::<u32>(&doc, "user.age"), Some(36));
/// assert_eq!(get_as::<u32>(&doc, "user.name"), None);
/// ```
pub fn get_as<T: DeserializeOwned>(root: &Json, path: &str) -> Option<T> {
    let node = get(root, path)?;
    match T::deserialize(node) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(path, %err, "node does not deserialize into requested type");
            None
        }
    }
}

/// [`get_as`] with a fallback.
pub fn get_or<T: DeserializeOwned>(root: &Json, path: &str, default: T) -> T {
    get_as(root, path).unwrap_or(default)
}

/// Serializes `value` and writes it at `path`.
///
/// A value that fails to serialize leaves the tree untouched and reports
/// `false`, like a malformed path.
pub fn set_serialized<T: Serialize + ?Sized>(root: &mut Json, path: &str, value: &T) -> bool {
    match serde_json::to_value(value) {
        Ok(node) => set(root, path, node),
        Err(err) => {
            debug!(path, %err, "value does not serialize");
            false
        }
    }
}
