//! Plan-time normalization of the `custom_fields` attribute.

use netbox_core::{CUSTOM_FIELDS_KEY, CustomFieldMap, normalize};

use crate::error::Result;
use crate::framework::ResourceDiff;

/// Normalize the planned `custom_fields` value of a resource.
///
/// See [`plan_custom_fields_at`].
pub fn plan_custom_fields(diff: &mut dyn ResourceDiff) -> Result<()> {
    plan_custom_fields_at(diff, CUSTOM_FIELDS_KEY)
}

/// Normalize the planned value of the custom-fields attribute `key`.
///
/// An omitted or null declaration plans null, so the attribute stays
/// unmanaged. A declared object is planned in normalized form, which keeps
/// `""` and `null` entries from showing up as a change against state that
/// never stores them. Prior state is not consulted.
pub fn plan_custom_fields_at(diff: &mut dyn ResourceDiff, key: &str) -> Result<()> {
    let planned = diff
        .declared_value(key)
        .filter(|declared| declared.is_object())
        .map(|declared| normalize(&CustomFieldMap::from_value(&declared)).to_value());

    match &planned {
        Some(value) => tracing::debug!(attribute = key, %value, "planned normalized custom fields"),
        None => tracing::debug!(attribute = key, "custom fields not declared, planning null"),
    }

    diff.set_planned_value(key, planned);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::InMemoryResource;
    use serde_json::json;

    #[test]
    fn test_declared_map_is_normalized() {
        let mut resource = InMemoryResource::new()
            .with_declared("custom_fields", json!({"site": "nyc", "note": "", "owner": null}));

        plan_custom_fields(&mut resource).unwrap();

        assert_eq!(
            resource.planned_value("custom_fields"),
            Some(json!({"site": "nyc"}))
        );
    }

    #[test]
    fn test_null_declaration_plans_null_regardless_of_prior() {
        let mut resource = InMemoryResource::new()
            .with_prior("custom_fields", json!({"site": "nyc"}))
            .with_declared("custom_fields", json!(null));

        plan_custom_fields(&mut resource).unwrap();

        assert_eq!(resource.planned_value("custom_fields"), None);
        assert_eq!(resource.planned()["custom_fields"], json!(null));
    }

    #[test]
    fn test_non_object_declaration_plans_null() {
        let mut resource =
            InMemoryResource::new().with_declared("custom_fields", json!(["site", "nyc"]));

        plan_custom_fields(&mut resource).unwrap();

        assert_eq!(resource.planned_value("custom_fields"), None);
    }

    #[test]
    fn test_custom_key() {
        let mut resource = InMemoryResource::new().with_declared("extra", json!({"a": "", "b": "x"}));

        plan_custom_fields_at(&mut resource, "extra").unwrap();

        assert_eq!(resource.planned_value("extra"), Some(json!({"b": "x"})));
    }
}
