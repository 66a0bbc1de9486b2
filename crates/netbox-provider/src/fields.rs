//! The `custom_fields` attribute as configured for one provider.

use netbox_core::{
    AttributeSchema, CustomFieldMap, compute_attr, compute_model, custom_fields_read_schema,
    custom_fields_schema,
};
use serde_json::Value;

use crate::config::CustomFieldsSettings;
use crate::error::Result;
use crate::framework::{ResourceData, ResourceDiff};
use crate::plan::plan_custom_fields_at;
use crate::request::{ClientOperation, with_custom_field_params_prefixed};

/// Plan, state and request handling for the custom-fields attribute.
#[derive(Debug, Clone)]
pub struct CustomFields {
    attribute_key: String,
    query_prefix: String,
}

impl Default for CustomFields {
    fn default() -> Self {
        Self::from_settings(&CustomFieldsSettings::default())
    }
}

impl CustomFields {
    pub fn from_settings(settings: &CustomFieldsSettings) -> Self {
        Self {
            attribute_key: settings.attribute_key.clone(),
            query_prefix: settings.query_prefix.clone(),
        }
    }

    pub fn attribute_key(&self) -> &str {
        &self.attribute_key
    }

    pub fn query_prefix(&self) -> &str {
        &self.query_prefix
    }

    /// Schema for managed resources.
    pub fn schema(&self) -> AttributeSchema {
        custom_fields_schema()
    }

    /// Schema for data sources.
    pub fn read_schema(&self) -> AttributeSchema {
        custom_fields_read_schema()
    }

    /// Plan-time hook; see [`crate::plan::plan_custom_fields_at`].
    pub fn plan(&self, diff: &mut dyn ResourceDiff) -> Result<()> {
        plan_custom_fields_at(diff, &self.attribute_key)
    }

    /// State attribute for the custom fields NetBox returned.
    pub fn attr(&self, upstream: &Value) -> CustomFieldMap {
        compute_attr(upstream)
    }

    /// Request model for the pending change of `data`.
    pub fn model(&self, data: &dyn ResourceData) -> CustomFieldMap {
        let (old, new) = data.get_change(&self.attribute_key);
        compute_model(&old, &new)
    }

    /// Operation option adding one query parameter per string field.
    pub fn params_option(
        &self,
        fields: Option<CustomFieldMap>,
    ) -> impl FnOnce(&mut ClientOperation) + use<> {
        with_custom_field_params_prefixed(fields, self.query_prefix.clone())
    }
}
