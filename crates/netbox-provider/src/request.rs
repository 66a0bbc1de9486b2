//! Request decoration for custom fields.
//!
//! NetBox filters and sets custom fields through `cf_<name>` query
//! parameters. Generated API operations carry a [`RequestWriter`] that
//! writes their own parameters; [`CustomFieldParams`] wraps that writer and
//! appends the custom fields after it has run, so decorators stack without
//! knowing about each other.

use netbox_core::{CUSTOM_FIELD_PARAM_PREFIX, CustomFieldMap, CustomFieldValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::{Url, form_urlencoded};

use crate::error::{ProviderError, Result};

/// An outgoing request that accepts query parameters.
pub trait ClientRequest {
    /// Set `name` to `value`, replacing any previous value for `name`.
    fn set_query_param(&mut self, name: &str, value: &str) -> Result<()>;

    /// Current value of the query parameter `name`.
    fn query_param(&self, name: &str) -> Option<String>;
}

/// Writes an operation's parameters onto a request.
pub trait RequestWriter: Send + Sync {
    fn write_to_request(&self, request: &mut dyn ClientRequest) -> Result<()>;
}

impl<F> RequestWriter for F
where
    F: Fn(&mut dyn ClientRequest) -> Result<()> + Send + Sync,
{
    fn write_to_request(&self, request: &mut dyn ClientRequest) -> Result<()> {
        self(request)
    }
}

/// Writer for operations without parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl RequestWriter for NoParams {
    fn write_to_request(&self, _request: &mut dyn ClientRequest) -> Result<()> {
        Ok(())
    }
}

/// Everything except ASCII alphanumerics and `-_.~` is escaped.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape `s` for use inside a URL query, with space as `+`.
pub fn query_escape(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_ESCAPE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Decoded name of one raw `name=value` query segment.
fn segment_name(raw: &str) -> String {
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(k, _)| k.into_owned())
        .unwrap_or_default()
}

/// A request whose query parameters live on a [`Url`].
///
/// Setting a parameter rewrites only the segment for that name; the rest of
/// the query string is kept byte for byte. New segments are escaped with
/// [`query_escape`].
#[derive(Debug, Clone)]
pub struct QueryRequest {
    url: Url,
}

impl QueryRequest {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| ProviderError::request(format!("invalid URL: {e}")))?;
        Ok(Self::new(url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }

    /// Decoded query parameters in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

impl ClientRequest for QueryRequest {
    fn set_query_param(&mut self, name: &str, value: &str) -> Result<()> {
        if self.url.cannot_be_a_base() {
            return Err(ProviderError::request(format!(
                "cannot set query parameter {name} on {}",
                self.url
            )));
        }

        let segment = format!("{}={}", query_escape(name), query_escape(value));
        let mut replaced = false;
        let mut segments: Vec<String> = Vec::new();

        for raw in self.url.query().unwrap_or_default().split('&') {
            if raw.is_empty() {
                continue;
            }
            if segment_name(raw) != name {
                segments.push(raw.to_string());
            } else if !replaced {
                segments.push(segment.clone());
                replaced = true;
            }
        }
        if !replaced {
            segments.push(segment);
        }

        self.url.set_query(Some(&segments.join("&")));
        Ok(())
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// Decorates a [`RequestWriter`] with one query parameter per string field.
pub struct CustomFieldParams {
    params: Box<dyn RequestWriter>,
    fields: CustomFieldMap,
    prefix: String,
}

impl CustomFieldParams {
    pub fn new(params: Box<dyn RequestWriter>, fields: CustomFieldMap) -> Self {
        Self {
            params,
            fields,
            prefix: CUSTOM_FIELD_PARAM_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn fields(&self) -> &CustomFieldMap {
        &self.fields
    }

    /// Query parameter name for the field `key`.
    pub fn param_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, query_escape(key))
    }
}

impl RequestWriter for CustomFieldParams {
    fn write_to_request(&self, request: &mut dyn ClientRequest) -> Result<()> {
        self.params.write_to_request(request)?;

        for (key, value) in &self.fields {
            match value {
                CustomFieldValue::Text(text) => {
                    request.set_query_param(&self.param_name(key), text)?;
                }
                // Only string values have a query-parameter form.
                CustomFieldValue::Absent | CustomFieldValue::Other(_) => {
                    tracing::trace!(field = %key, "skipping non-string custom field");
                }
            }
        }

        Ok(())
    }
}

/// An outgoing API operation.
pub struct ClientOperation {
    pub id: String,
    pub method: String,
    pub path_pattern: String,
    pub params: Box<dyn RequestWriter>,
}

impl ClientOperation {
    pub fn new(
        id: impl Into<String>,
        method: impl Into<String>,
        path_pattern: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            path_pattern: path_pattern.into(),
            params: Box::new(NoParams),
        }
    }

    pub fn with_params(mut self, params: impl RequestWriter + 'static) -> Self {
        self.params = Box::new(params);
        self
    }

    /// Apply an operation option such as [`with_custom_field_params`].
    pub fn with_option(mut self, option: impl FnOnce(&mut ClientOperation)) -> Self {
        option(&mut self);
        self
    }

    pub fn write_params(&self, request: &mut dyn ClientRequest) -> Result<()> {
        self.params.write_to_request(request)
    }
}

impl std::fmt::Debug for ClientOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOperation")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("path_pattern", &self.path_pattern)
            .finish_non_exhaustive()
    }
}

/// Operation option that adds `cf_<name>` parameters for `fields`.
///
/// `None` behaves like an empty map.
pub fn with_custom_field_params(
    fields: Option<CustomFieldMap>,
) -> impl FnOnce(&mut ClientOperation) {
    with_custom_field_params_prefixed(fields, CUSTOM_FIELD_PARAM_PREFIX)
}

/// Like [`with_custom_field_params`] with a custom parameter prefix.
pub fn with_custom_field_params_prefixed(
    fields: Option<CustomFieldMap>,
    prefix: impl Into<String>,
) -> impl FnOnce(&mut ClientOperation) {
    let fields = fields.unwrap_or_default();
    let prefix = prefix.into();

    move |operation: &mut ClientOperation| {
        let inner = std::mem::replace(&mut operation.params, Box::new(NoParams));
        operation.params = Box::new(CustomFieldParams::new(inner, fields).with_prefix(prefix));
    }
}
