use serde_json::{Map, Number, Value as Json};

use crate::tree::{Kind, Tree};

/// A minimal tagged JSON value.
///
/// Integers and floats are kept apart, and objects are an ordered list of
/// members rather than a map: lookups take the first member with a matching
/// key, so duplicates never shadow an earlier entry.
///
/// # Examples
///
/// ```
/// use jpath::{Value, get, set};
///
/// let mut doc = Value::Object(Vec::new());
/// assert!(set(&mut doc, "user.langs[2]", Value::from("rust")));
/// assert_eq!(get(&doc, "user.langs[2]").and_then(Value::as_str), Some("rust"));
/// assert_eq!(get(&doc, "user.langs[0]"), Some(&Value::Null));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null
    #[default]
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object members in insertion order
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Integers widen to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Tree for Value {
    fn null() -> Self {
        Value::Null
    }

    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(members) => members.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    fn element(&self, index: usize) -> Option<&Self> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    fn member_or_replace(&mut self, key: &str) -> &mut Self {
        match self {
            Value::Object(members) => {
                let slot = match members.iter().position(|(k, _)| k == key) {
                    Some(slot) => slot,
                    None => {
                        members.push((key.to_string(), Value::Null));
                        members.len() - 1
                    }
                };
                &mut members[slot].1
            }
            other => {
                *other = Value::Object(Vec::new());
                other.member_or_replace(key)
            }
        }
    }

    fn elements_or_replace(&mut self) -> &mut Vec<Self> {
        match self {
            Value::Array(items) => items,
            other => {
                *other = Value::Array(Vec::new());
                other.elements_or_replace()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

/// Numbers that fit `i64` stay integers; `u64` beyond that range and all
/// non-integral numbers become floats.
impl From<Json> for Value {
    fn from(v: Json) -> Self {
        match v {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            Json::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Non-finite floats become null. Duplicate object keys keep the first
/// member, matching lookup.
impl From<Value> for Json {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Json::Null,
            Value::Boolean(b) => Json::Bool(b),
            Value::Integer(i) => Json::Number(i.into()),
            Value::Float(f) => Number::from_f64(f).map(Json::Number).unwrap_or(Json::Null),
            Value::String(s) => Json::String(s),
            Value::Array(arr) => Json::Array(arr.into_iter().map(Json::from).collect()),
            Value::Object(members) => {
                let mut map = Map::with_capacity(members.len());
                for (k, v) in members {
                    if !map.contains_key(&k) {
                        map.insert(k, Json::from(v));
                    }
                }
                Json::Object(map)
            }
        }
    }
}
