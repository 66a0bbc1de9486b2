//! Seam between custom-field handling and the resource-management framework.
//!
//! The framework owns declared configuration, stored state and the pending
//! plan. Custom-field handling only needs a handful of accessors on top of
//! them, so it depends on these traits instead of a concrete SDK.

use serde_json::{Map, Value};

/// Plan-time view of a resource.
pub trait ResourceDiff {
    /// Value of `key` as written in configuration. `None` when the
    /// attribute is omitted or explicitly null.
    fn declared_value(&self, key: &str) -> Option<Value>;

    /// Value of `key` in the stored state, if any.
    fn prior_value(&self, key: &str) -> Option<Value>;

    /// Value of `key` in the pending plan, if any.
    fn planned_value(&self, key: &str) -> Option<Value>;

    /// Replace the planned value of `key`. `None` plans a null value.
    fn set_planned_value(&mut self, key: &str, value: Option<Value>);
}

/// Apply-time view of a resource.
pub trait ResourceData {
    /// The `(old, new)` pair for `key`; `Value::Null` stands in for unset.
    fn get_change(&self, key: &str) -> (Value, Value);
}

/// A resource held entirely in memory.
///
/// Useful for hosts that drive planning themselves and for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResource {
    declared: Map<String, Value>,
    prior: Map<String, Value>,
    planned: Map<String, Value>,
}

impl InMemoryResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declared attribute. The plan starts out equal to the declaration.
    pub fn with_declared(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        self.planned.insert(key.clone(), value.clone());
        self.declared.insert(key, value);
        self
    }

    /// Set an attribute of the stored state.
    pub fn with_prior(mut self, key: impl Into<String>, value: Value) -> Self {
        self.prior.insert(key.into(), value);
        self
    }

    /// The planned attributes as a JSON object.
    pub fn planned(&self) -> Value {
        Value::Object(self.planned.clone())
    }

    /// Commit the plan: it becomes the new prior state.
    pub fn apply(&mut self) {
        self.prior = self.planned.clone();
    }
}

fn non_null(map: &Map<String, Value>, key: &str) -> Option<Value> {
    map.get(key).filter(|v| !v.is_null()).cloned()
}

impl ResourceDiff for InMemoryResource {
    fn declared_value(&self, key: &str) -> Option<Value> {
        non_null(&self.declared, key)
    }

    fn prior_value(&self, key: &str) -> Option<Value> {
        non_null(&self.prior, key)
    }

    fn planned_value(&self, key: &str) -> Option<Value> {
        non_null(&self.planned, key)
    }

    fn set_planned_value(&mut self, key: &str, value: Option<Value>) {
        self.planned
            .insert(key.to_string(), value.unwrap_or(Value::Null));
    }
}

impl ResourceData for InMemoryResource {
    fn get_change(&self, key: &str) -> (Value, Value) {
        (
            self.prior.get(key).cloned().unwrap_or(Value::Null),
            self.planned.get(key).cloned().unwrap_or(Value::Null),
        )
    }
}
