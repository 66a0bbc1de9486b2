//! Reconciliation of custom-field maps between configuration, state and NetBox.
//!
//! NetBox only updates the custom fields present in a request. A field the
//! user removed from configuration therefore has to be sent as an explicit
//! empty string, otherwise it silently keeps its old value upstream.

use serde_json::Value;

use crate::value::{CustomFieldMap, CustomFieldValue};

/// Drop every entry whose value is absent or an empty string.
pub fn normalize(raw: &CustomFieldMap) -> CustomFieldMap {
    let normalized: CustomFieldMap = raw
        .iter()
        .filter(|(_, v)| !v.is_unset())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    tracing::trace!(
        before = raw.len(),
        after = normalized.len(),
        "normalized custom fields"
    );
    normalized
}

/// Merge the previous and next custom fields into a request model.
///
/// - `next` of `None` is treated as an empty map
/// - absent values in `next` become `""`
/// - keys only in `previous` are added as `""`
///
/// Keys present in both always keep `next`'s value.
pub fn merge(previous: &CustomFieldMap, next: Option<CustomFieldMap>) -> CustomFieldMap {
    let mut merged = next.unwrap_or_default();

    for value in merged.values_mut() {
        if matches!(value, CustomFieldValue::Absent) {
            *value = CustomFieldValue::cleared();
        }
    }

    let mut cleared = 0usize;
    for key in previous.keys() {
        merged.entry(key.to_string()).or_insert_with(|| {
            cleared += 1;
            CustomFieldValue::cleared()
        });
    }

    tracing::debug!(
        fields = merged.len(),
        cleared,
        "merged custom fields"
    );
    merged
}

/// Compute the state attribute from the custom fields NetBox returned.
pub fn compute_attr(upstream: &Value) -> CustomFieldMap {
    normalize(&CustomFieldMap::from_value(upstream))
}

/// Compute the request model from the old and new attribute values.
///
/// Both sides are read leniently; a `new` that is not an object counts as
/// "not supplied", so every old key is cleared.
pub fn compute_model(old: &Value, new: &Value) -> CustomFieldMap {
    let previous = CustomFieldMap::from_value(old);
    let next = new.as_object().map(|_| CustomFieldMap::from_value(new));
    merge(&previous, next)
}
