//! The record-client seam between UI actions and the hosted backend.
//!
//! DESIGN
//! ======
//! Actions are generic over `RecordClient` so their guards and error mapping
//! can be exercised against an in-memory fake. Records travel as
//! `serde_json::Value`; typed decoding happens in `net::api`.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::types::AuthResponse;

/// Query options for a full record listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Sort expression, e.g. `-created`.
    pub sort: Option<String>,
    /// Comma-separated relations to inline, e.g. `user`.
    pub expand: Option<String>,
    /// Filter expression in the backend's filter syntax.
    pub filter: Option<String>,
}

impl ListOptions {
    /// Query pairs for one page of this listing.
    #[must_use]
    pub fn query_pairs(&self, page: u32, per_page: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", page.to_string()),
            ("perPage", per_page.to_string()),
            ("skipTotal", "1".to_owned()),
        ];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(expand) = &self.expand {
            pairs.push(("expand", expand.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        pairs
    }
}

/// A file picked in a form, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(Upload),
}

/// Ordered multipart field set for record creation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub fields: Vec<(String, FormValue)>,
}

impl FormPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_owned(), FormValue::Text(value.into())));
        self
    }

    /// Append a file field when `upload` is present.
    #[must_use]
    pub fn file(mut self, name: &str, upload: Option<Upload>) -> Self {
        if let Some(upload) = upload {
            self.fields.push((name.to_owned(), FormValue::File(upload)));
        }
        self
    }

    /// Text value of the first field named `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(k, v)| match v {
            FormValue::Text(t) if k == name => Some(t.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn has_file(&self, name: &str) -> bool {
        self.fields
            .iter()
            .any(|(k, v)| k == name && matches!(v, FormValue::File(_)))
    }
}

/// Operations consumed from the hosted record backend.
#[async_trait(?Send)]
pub trait RecordClient {
    /// Every record of `collection` matching `options`, across all pages.
    async fn full_list(&self, collection: &str, options: &ListOptions) -> Result<Vec<Value>, ApiError>;

    /// The first record matching `filter`, or [`ApiError::NotFound`].
    async fn first_list_item(&self, collection: &str, filter: &str) -> Result<Value, ApiError>;

    /// Create a record from a multipart field set.
    async fn create(&self, collection: &str, payload: FormPayload) -> Result<Value, ApiError>;

    /// Password grant against an auth collection. Stores the issued token.
    async fn auth_with_password(
        &self,
        collection: &str,
        identity: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError>;

    /// Drop the stored auth token.
    fn clear_auth(&self);

    /// Currently stored auth token, if any.
    fn auth_token(&self) -> Option<String>;
}

/// Escape a value for use inside a double-quoted filter literal.
#[must_use]
pub fn quote_filter_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
