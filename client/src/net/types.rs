//! Record DTOs for the hosted backend's REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Relations the backend can
//! inline (`expand`) are modelled as explicit `Option`s so rendering code never
//! depends on runtime-tolerant lookups.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Collection holding blog articles.
pub const ARTICLES: &str = "articles";
/// Auth collection holding registered users.
pub const USERS: &str = "users";

/// A blog article as returned by the `articles` collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    /// Owning collection identifier, needed to build file URLs.
    pub collection_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Stored image filename; empty when no image was uploaded.
    #[serde(default)]
    pub image: String,
    /// Backend creation timestamp, e.g. `2024-03-05 14:22:01.123Z`.
    #[serde(default)]
    pub created: String,
    /// Author relation id; empty when unset.
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub expand: Option<ArticleExpand>,
}

impl Article {
    /// Display name of the expanded author, if the relation was inlined.
    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.expand
            .as_ref()
            .and_then(|e| e.user.as_ref())
            .map(|u| u.name.as_str())
    }
}

/// Relations inlined into an article by `expand=user`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleExpand {
    #[serde(default)]
    pub user: Option<Author>,
}

/// Subset of a user record exposed as an article's author.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A record from the `users` auth collection. The password is never read back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One page of a record listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub page: u32,
    pub per_page: u32,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Successful response of `auth-with-password`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub record: UserRecord,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: std::collections::BTreeMap<String, FieldError>,
}

/// Per-field validation failure inside an [`ErrorBody`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
