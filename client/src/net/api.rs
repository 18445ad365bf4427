//! Typed helpers over [`RecordClient`] for the blog's two collections.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; a record that does not decode
//! into the expected shape surfaces as [`ApiError::Decode`] rather than a panic.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::client::{FormPayload, ListOptions, RecordClient, quote_filter_value};
use super::error::ApiError;
use super::types::{ARTICLES, Article, AuthResponse, USERS, UserRecord};

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Listing options for the article feed: newest first, author inlined.
#[must_use]
pub fn article_feed_options() -> ListOptions {
    ListOptions { sort: Some("-created".to_owned()), expand: Some("user".to_owned()), filter: None }
}

/// Filter matching a user by exact display name.
#[must_use]
pub fn user_name_filter(name: &str) -> String {
    format!("name={}", quote_filter_value(name))
}

/// Fetch every article, newest first, with the author expanded.
pub async fn fetch_articles<C: RecordClient + ?Sized>(client: &C) -> Result<Vec<Article>, ApiError> {
    client
        .full_list(ARTICLES, &article_feed_options())
        .await?
        .into_iter()
        .map(decode::<Article>)
        .collect()
}

/// Resolve a user by display name.
pub async fn find_user_by_name<C: RecordClient + ?Sized>(client: &C, name: &str) -> Result<UserRecord, ApiError> {
    let value = client.first_list_item(USERS, &user_name_filter(name)).await?;
    decode(value)
}

/// Create an article record from a prepared payload.
pub async fn create_article<C: RecordClient + ?Sized>(client: &C, payload: FormPayload) -> Result<Article, ApiError> {
    decode(client.create(ARTICLES, payload).await?)
}

/// Create a user record from a prepared payload.
pub async fn create_user<C: RecordClient + ?Sized>(client: &C, payload: FormPayload) -> Result<UserRecord, ApiError> {
    decode(client.create(USERS, payload).await?)
}

/// Password login against the `users` collection.
pub async fn login<C: RecordClient + ?Sized>(client: &C, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    client.auth_with_password(USERS, email, password).await
}
