//! Typed custom-field values.
//!
//! The hosting framework and the NetBox API both hand us custom fields as
//! loosely-typed JSON. Values are converted into [`CustomFieldValue`] at the
//! boundary so the rest of the crate never inspects raw JSON.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

/// A single custom-field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum CustomFieldValue {
    /// A string value. `Text("")` is the explicit "clear this field" marker.
    Text(String),
    /// No value (JSON `null`).
    Absent,
    /// Any non-string value NetBox returned (number, boolean, object, array).
    ///
    /// Carried through reconciliation untouched but never sent as a query
    /// parameter.
    Other(Value),
}

impl CustomFieldValue {
    /// Whether this value counts as "not set": absent or an empty string.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.is_empty(),
            Self::Other(_) => false,
        }
    }

    /// The string payload, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Shorthand for `Text(String::new())`.
    pub fn cleared() -> Self {
        Self::Text(String::new())
    }
}

impl From<Value> for CustomFieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl From<CustomFieldValue> for Value {
    fn from(value: CustomFieldValue) -> Self {
        match value {
            CustomFieldValue::Text(s) => Value::String(s),
            CustomFieldValue::Absent => Value::Null,
            CustomFieldValue::Other(v) => v,
        }
    }
}

impl From<&str> for CustomFieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CustomFieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<CustomFieldValue>> From<Option<T>> for CustomFieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Mapping from custom-field name to value, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomFieldMap(BTreeMap<String, CustomFieldValue>);

impl CustomFieldMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a map from loosely-typed JSON.
    ///
    /// Anything other than a JSON object yields an empty map.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(obj) => Self::from_object(obj),
            _ => Self::new(),
        }
    }

    /// Read a map from JSON, rejecting anything that is not an object.
    pub fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(Self::from_object(obj)),
            other => Err(CoreError::not_a_map(json_kind(other))),
        }
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        obj.iter()
            .map(|(k, v)| (k.clone(), CustomFieldValue::from(v.clone())))
            .collect()
    }

    /// Convert back into a JSON object, rendering `Absent` as `null`.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                .collect(),
        )
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<CustomFieldValue>,
    ) -> Option<CustomFieldValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&CustomFieldValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, CustomFieldValue> {
        self.0.iter()
    }

    pub(crate) fn entry(&mut self, key: String) -> btree_map::Entry<'_, String, CustomFieldValue> {
        self.0.entry(key)
    }

    pub(crate) fn values_mut(&mut self) -> btree_map::ValuesMut<'_, String, CustomFieldValue> {
        self.0.values_mut()
    }
}

impl<K: Into<String>, V: Into<CustomFieldValue>> FromIterator<(K, V)> for CustomFieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for CustomFieldMap {
    type Item = (String, CustomFieldValue);
    type IntoIter = btree_map::IntoIter<String, CustomFieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CustomFieldMap {
    type Item = (&'a String, &'a CustomFieldValue);
    type IntoIter = btree_map::Iter<'a, String, CustomFieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
