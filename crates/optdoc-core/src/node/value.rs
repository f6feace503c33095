//! Tagged documentation values
//!
//! Every doclet and meta entry is classified once, when it is parsed, into a
//! [`DocValue`]. Containers are reference counted: cloning a `DocValue` shares
//! them, and [`DocValue::deep_clone`](super::clone) decides level by level
//! whether a fresh container is built. Mutation goes through
//! [`Arc::make_mut`], so shared containers are never written through.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::sync::Arc;

/// A documentation value with its shape fixed at parse time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum DocValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Plain list, duplicated by the deep cloner
    List(Arc<Vec<DocValue>>),
    /// Plain key/value data, duplicated by the deep cloner
    Map(Arc<IndexMap<String, DocValue>>),
    /// Structured value that is always shared, never duplicated
    Opaque(Arc<Value>),
}

impl DocValue {
    /// Wrap a value that must be carried along by reference only
    pub fn opaque(value: Value) -> Self {
        DocValue::Opaque(Arc::new(value))
    }

    pub fn list(items: impl IntoIterator<Item = DocValue>) -> Self {
        DocValue::List(Arc::new(items.into_iter().collect()))
    }

    pub fn map(entries: impl IntoIterator<Item = (String, DocValue)>) -> Self {
        DocValue::Map(Arc::new(entries.into_iter().collect()))
    }

    pub fn string_list<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::list(items.into_iter().map(|item| DocValue::String(item.into())))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DocValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DocValue]> {
        match self {
            DocValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, DocValue>> {
        match self {
            DocValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Mutable access to a list, detaching it from any other holder first
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<DocValue>> {
        match self {
            DocValue::List(items) => Some(Arc::make_mut(items)),
            _ => None,
        }
    }

    /// String entries of a list value; a lone string counts as one entry
    pub fn strings(&self) -> Vec<String> {
        match self {
            DocValue::String(s) => vec![s.clone()],
            DocValue::List(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether both values point at the same container allocation
    pub fn shares_storage_with(&self, other: &DocValue) -> bool {
        match (self, other) {
            (DocValue::List(a), DocValue::List(b)) => Arc::ptr_eq(a, b),
            (DocValue::Map(a), DocValue::Map(b)) => Arc::ptr_eq(a, b),
            (DocValue::Opaque(a), DocValue::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DocValue::Null)
    }
}

impl From<Value> for DocValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DocValue::Null,
            Value::Bool(b) => DocValue::Bool(b),
            Value::Number(n) => DocValue::Number(n),
            Value::String(s) => DocValue::String(s),
            Value::Array(items) => DocValue::list(items.into_iter().map(DocValue::from)),
            Value::Object(entries) => {
                DocValue::map(entries.into_iter().map(|(k, v)| (k, DocValue::from(v))))
            }
        }
    }
}

impl From<DocValue> for Value {
    fn from(value: DocValue) -> Self {
        match value {
            DocValue::Null => Value::Null,
            DocValue::Bool(b) => Value::Bool(b),
            DocValue::Number(n) => Value::Number(n),
            DocValue::String(s) => Value::String(s),
            DocValue::List(items) => Value::Array(
                Arc::unwrap_or_clone(items)
                    .into_iter()
                    .map(Value::from)
                    .collect(),
            ),
            DocValue::Map(entries) => Value::Object(
                Arc::unwrap_or_clone(entries)
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
            DocValue::Opaque(inner) => Arc::unwrap_or_clone(inner),
        }
    }
}

impl From<&str> for DocValue {
    fn from(value: &str) -> Self {
        DocValue::String(value.to_string())
    }
}

impl From<String> for DocValue {
    fn from(value: String) -> Self {
        DocValue::String(value)
    }
}

impl From<bool> for DocValue {
    fn from(value: bool) -> Self {
        DocValue::Bool(value)
    }
}

impl From<u64> for DocValue {
    fn from(value: u64) -> Self {
        DocValue::Number(value.into())
    }
}
