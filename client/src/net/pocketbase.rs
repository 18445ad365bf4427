//! REST client for the hosted record backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every remote call returns
//! [`ApiError::Unavailable`] since the backend is only reached from the browser.
//!
//! DESIGN
//! ======
//! `PocketBase` is a cheap `Clone` handle. The auth-token store sits behind an
//! `Arc<Mutex<_>>` so the handle can be provided as Leptos context and every
//! clone sees the same session token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "pocketbase_test.rs"]
mod pocketbase_test;

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::client::{FormPayload, ListOptions, RecordClient};
use super::error::ApiError;
use super::types::AuthResponse;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ListPage;

/// Page size used when collecting a full listing.
pub const FULL_LIST_BATCH: u32 = 500;

/// Records endpoint of a collection.
#[must_use]
pub fn records_endpoint(base: &str, collection: &str) -> String {
    format!("{base}/api/collections/{collection}/records")
}

/// Password-auth endpoint of an auth collection.
#[must_use]
pub fn auth_endpoint(base: &str, collection: &str) -> String {
    format!("{base}/api/collections/{collection}/auth-with-password")
}

/// Public URL of a stored file. The token query is left empty; files are public.
#[must_use]
pub fn file_url(base: &str, collection_id: &str, record_id: &str, file_name: &str) -> String {
    format!("{base}/api/files/{collection_id}/{record_id}/{file_name}?token=")
}

/// Fetch pages starting at 1 until one comes back shorter than `per_page`.
#[cfg(any(test, feature = "hydrate"))]
async fn collect_pages<F, Fut>(per_page: u32, mut fetch_page: F) -> Result<Vec<Value>, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<ListPage<Value>, ApiError>>,
{
    let mut records = Vec::new();
    let mut page = 1;
    loop {
        let list = fetch_page(page).await?;
        let fetched = list.items.len();
        records.extend(list.items);
        if fetched < per_page as usize {
            return Ok(records);
        }
        page += 1;
    }
}

/// Handle to one backend instance plus its auth-token store.
#[derive(Clone, Debug)]
pub struct PocketBase {
    base: String,
    token: Arc<Mutex<Option<String>>>,
}

impl PocketBase {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned(), token: Arc::new(Mutex::new(None)) }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Replace the stored auth token.
    pub fn save_auth(&self, token: impl Into<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    #[must_use]
    pub fn file_url(&self, collection_id: &str, record_id: &str, file_name: &str) -> String {
        file_url(&self.base, collection_id, record_id, file_name)
    }
}

#[async_trait(?Send)]
impl RecordClient for PocketBase {
    async fn full_list(&self, collection: &str, options: &ListOptions) -> Result<Vec<Value>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            collect_pages(FULL_LIST_BATCH, |page| self.list_page(collection, options, page, FULL_LIST_BATCH)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, options);
            Err(ApiError::Unavailable)
        }
    }

    async fn first_list_item(&self, collection: &str, filter: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let options = ListOptions { filter: Some(filter.to_owned()), ..ListOptions::default() };
            let list = self.list_page(collection, &options, 1, 1).await?;
            list.items.into_iter().next().ok_or(ApiError::NotFound)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, filter);
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, collection: &str, payload: FormPayload) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = browser::form_data(&payload)?;
            let url = records_endpoint(&self.base, collection);
            let resp = self
                .authorize(gloo_net::http::Request::post(&url))
                .body(form)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn auth_with_password(
        &self,
        collection: &str,
        identity: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = auth_endpoint(&self.base, collection);
            let payload = serde_json::json!({ "identity": identity, "password": password });
            let resp = gloo_net::http::Request::post(&url)
                .json(&payload)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let auth: AuthResponse = browser::read_json(resp).await?;
            self.save_auth(auth.token.clone());
            Ok(auth)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, identity, password);
            Err(ApiError::Unavailable)
        }
    }

    fn clear_auth(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn auth_token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[cfg(feature = "hydrate")]
impl PocketBase {
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.auth_token() {
            Some(token) => builder.header("Authorization", &token),
            None => builder,
        }
    }

    async fn list_page(
        &self,
        collection: &str,
        options: &ListOptions,
        page: u32,
        per_page: u32,
    ) -> Result<ListPage<Value>, ApiError> {
        let url = records_endpoint(&self.base, collection);
        let pairs = options.query_pairs(page, per_page);
        let resp = self
            .authorize(gloo_net::http::Request::get(&url))
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        browser::read_json(resp).await
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use serde::de::DeserializeOwned;

    use crate::net::client::{FormPayload, FormValue};
    use crate::net::error::ApiError;
    use crate::net::types::ErrorBody;

    fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
        ApiError::Transport(format!("{err:?}"))
    }

    /// Decode a 2xx body as `T`, or the backend's error body otherwise.
    pub(super) async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<ErrorBody>().await.unwrap_or_default();
            return Err(ApiError::from_body(status, body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) fn form_data(payload: &FormPayload) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for (name, value) in &payload.fields {
            match value {
                FormValue::Text(text) => form.append_with_str(name, text).map_err(js_error)?,
                FormValue::File(upload) => {
                    let parts = js_sys::Array::new();
                    parts.push(&js_sys::Uint8Array::from(upload.bytes.as_slice()));
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&upload.mime);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                        .map_err(js_error)?;
                    form.append_with_blob_and_filename(name, &blob, &upload.file_name)
                        .map_err(js_error)?;
                }
            }
        }
        Ok(form)
    }
}
