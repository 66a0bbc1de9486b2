//! Attribute schema descriptors for the `custom_fields` attribute.

use serde::{Deserialize, Serialize};

use crate::value::{CustomFieldMap, CustomFieldValue};

/// Element type of a map attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    String,
}

/// Describes a map-valued resource attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    pub element: ElementType,
    pub optional: bool,
    pub computed: bool,
    /// Default value; `None` means the attribute has no default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomFieldMap>,
}

impl AttributeSchema {
    /// Optional + computed map of strings with no default.
    pub fn optional_computed_string_map() -> Self {
        Self {
            element: ElementType::String,
            optional: true,
            computed: true,
            default: None,
        }
    }

    /// Computed-only map of strings.
    pub fn computed_string_map() -> Self {
        Self {
            element: ElementType::String,
            optional: false,
            computed: true,
            default: None,
        }
    }

    /// Whether users may set this attribute in configuration.
    pub fn is_configurable(&self) -> bool {
        self.optional
    }

    /// Whether every value of `map` fits this schema's element type.
    pub fn accepts(&self, map: &CustomFieldMap) -> bool {
        match self.element {
            ElementType::String => map
                .iter()
                .all(|(_, v)| !matches!(v, CustomFieldValue::Other(_))),
        }
    }
}

/// Schema of `custom_fields` on managed resources.
pub fn custom_fields_schema() -> AttributeSchema {
    AttributeSchema::optional_computed_string_map()
}

/// Schema of `custom_fields` on data sources.
pub fn custom_fields_read_schema() -> AttributeSchema {
    AttributeSchema::computed_string_map()
}
