//! Framework glue for NetBox custom fields.
//!
//! [`netbox_core`] owns the pure reconciliation logic; this crate wires it
//! into the two places a provider touches custom fields:
//!
//! - plan time, through the [`ResourceDiff`] seam ([`plan_custom_fields`])
//! - request time, by decorating an operation's parameter writer with one
//!   `cf_<name>` query parameter per string field ([`CustomFieldParams`])
//!
//! [`CustomFields`] bundles both behind the configured attribute key and
//! query prefix.

pub mod config;
pub mod error;
pub mod fields;
pub mod framework;
pub mod observability;
pub mod plan;
pub mod request;

pub use config::{CustomFieldsSettings, LoggingSettings, ProviderSettings};
pub use error::{ProviderError, Result};
pub use fields::CustomFields;
pub use framework::{InMemoryResource, ResourceData, ResourceDiff};
pub use observability::{apply_logging_level, init_tracing, init_tracing_with_level};
pub use plan::{plan_custom_fields, plan_custom_fields_at};
pub use request::{
    ClientOperation, ClientRequest, CustomFieldParams, NoParams, QueryRequest, RequestWriter,
    query_escape, with_custom_field_params, with_custom_field_params_prefixed,
};
