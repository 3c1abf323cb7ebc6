//! The structural view of a JSON-like tree that traversal needs.
//!
//! Traversal never builds scalars. It asks a node what it is, looks members
//! and elements up, and on the write path swaps mismatched nodes for empty
//! containers and fills holes with nulls. [`Tree`] is exactly that surface,
//! implemented here for [`serde_json::Value`] and in [`crate::value`] for the
//! crate's own [`Value`](crate::Value).

use std::fmt;

use serde_json::{Map, Value as Json};

/// Type tag of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recursive JSON-like value that paths can walk.
pub trait Tree: Sized {
    /// The null placeholder written into freshly created slots.
    fn null() -> Self;

    fn kind(&self) -> Kind;

    /// Member stored under `key`, or `None` if this is not an object or has
    /// no such member.
    fn member(&self, key: &str) -> Option<&Self>;

    /// Element at `index`, or `None` if this is not an array or the index
    /// is past the end.
    fn element(&self, index: usize) -> Option<&Self>;

    /// Member stored under `key`, inserting null when absent. A node that is
    /// not an object is first replaced by an empty one.
    fn member_or_replace(&mut self, key: &str) -> &mut Self;

    /// The element list of this node. A node that is not an array is first
    /// replaced by an empty one.
    fn elements_or_replace(&mut self) -> &mut Vec<Self>;
}

impl Tree for Json {
    fn null() -> Self {
        Json::Null
    }

    fn kind(&self) -> Kind {
        match self {
            Json::Null => Kind::Null,
            Json::Bool(_) => Kind::Boolean,
            Json::Number(n) if n.is_i64() => Kind::Integer,
            // u64 beyond i64::MAX has no integer counterpart in `Value`
            Json::Number(_) => Kind::Float,
            Json::String(_) => Kind::String,
            Json::Array(_) => Kind::Array,
            Json::Object(_) => Kind::Object,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn member_or_replace(&mut self, key: &str) -> &mut Self {
        match self {
            Json::Object(map) => map.entry(key).or_insert(Json::Null),
            other => {
                *other = Json::Object(Map::new());
                other.member_or_replace(key)
            }
        }
    }

    fn elements_or_replace(&mut self) -> &mut Vec<Self> {
        match self {
            Json::Array(items) => items,
            other => {
                *other = Json::Array(Vec::new());
                other.elements_or_replace()
            }
        }
    }
}
