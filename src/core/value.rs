//! Host value model
//!
//! [`Value`] stands in for values handed over by the host runtime. It is the
//! adapter layer between host-native objects and the generic evaluator: the
//! evaluator only needs "can I iterate this?" and "can I call this?", which is
//! exactly what [`Value::elements`] and [`Value::as_callable`] answer.

use indexmap::IndexMap;
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::error::HostError;
use super::types::TypeInfo;

type CallableFn = dyn Fn(&Value) -> Result<Value, HostError> + Send + Sync;

/// A named host callable taking one argument
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    func: Arc<CallableFn>,
}

impl Callable {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, HostError> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the callable with a single argument
    pub fn call(&self, arg: &Value) -> Result<Value, HostError> {
        (self.func)(arg)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<callable {}>", self.name)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

/// A value handed over by the host runtime
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Dict(IndexMap<String, Value>),
    Callable(Callable),
}

impl Value {
    /// Wrap a closure as a callable value
    pub fn callable<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, HostError> + Send + Sync + 'static,
    {
        Value::Callable(Callable::new(name, func))
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    pub fn type_info(&self) -> TypeInfo {
        match self {
            Value::None => TypeInfo::NoneType,
            Value::Bool(_) => TypeInfo::Bool,
            Value::Int(_) => TypeInfo::Int,
            Value::Float(_) => TypeInfo::Float,
            Value::Str(_) => TypeInfo::Str,
            Value::List(_) => TypeInfo::List,
            Value::Tuple(_) => TypeInfo::Tuple,
            Value::Dict(_) => TypeInfo::Dict,
            Value::Callable(_) => TypeInfo::Callable,
        }
    }

    /// Forward iteration over the value, or `None` if it is not iterable
    ///
    /// Strings yield one-character strings and dicts yield their keys, in order.
    pub fn elements(&self) -> Option<Elements<'_>> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(Elements::Items(items.iter())),
            Value::Str(s) => Some(Elements::Chars(s.chars())),
            Value::Dict(map) => Some(Elements::Keys(map.keys())),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Callable(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Serialize to JSON; fails on callables
    pub fn to_json(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Iterator over the elements of an iterable [`Value`]
#[derive(Debug)]
pub enum Elements<'a> {
    Items(std::slice::Iter<'a, Value>),
    Chars(std::str::Chars<'a>),
    Keys(indexmap::map::Keys<'a, String, Value>),
}

impl<'a> Iterator for Elements<'a> {
    type Item = Cow<'a, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Elements::Items(items) => items.next().map(Cow::Borrowed),
            Elements::Chars(chars) => chars.next().map(|c| Cow::Owned(Value::Str(c.to_string()))),
            Elements::Keys(keys) => keys.next().map(|k| Cow::Owned(Value::Str(k.clone()))),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Callable(c)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::None,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => {
                Value::Dict(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) | Value::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Callable(c) => Err(S::Error::custom(format!(
                "callable '{}' has no serialized form",
                c.name()
            ))),
        }
    }
}
