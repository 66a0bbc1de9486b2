//! Custom-field handling for the NetBox provider.
//!
//! NetBox lets operators attach arbitrary "custom fields" to almost every
//! object. The provider exposes them as a single `custom_fields` map
//! attribute, and this crate owns the value model plus the pure
//! reconciliation steps applied to that map:
//!
//! - [`normalize`] drops unset entries (null or empty string)
//! - [`merge`] turns removed keys into explicit clears
//! - [`compute_attr`] / [`compute_model`] read loosely-typed JSON leniently
//! - [`schema`] describes the attribute for the hosting framework
//!
//! ```text
//! declared config ──normalize──► planned value
//! prior + planned ──merge──────► request model ──► cf_<key>=<value>
//! upstream object ──normalize──► state attribute
//! ```

pub mod error;
pub mod reconcile;
pub mod schema;
pub mod value;

pub use error::{CoreError, Result};
pub use reconcile::{compute_attr, compute_model, merge, normalize};
pub use schema::{AttributeSchema, ElementType, custom_fields_read_schema, custom_fields_schema};
pub use value::{CustomFieldMap, CustomFieldValue};

/// Name of the resource attribute that carries custom fields.
pub const CUSTOM_FIELDS_KEY: &str = "custom_fields";

/// Prefix NetBox expects on custom-field query parameters.
pub const CUSTOM_FIELD_PARAM_PREFIX: &str = "cf_";
