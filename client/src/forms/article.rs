//! Add-article form model.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use crate::config::AuthorPolicy;
use crate::net::client::{FormPayload, Upload};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArticleInvalid {
    #[error("Enter your name")]
    MissingAuthorName,
    #[error("Title is required")]
    MissingTitle,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleForm {
    /// Only collected under [`AuthorPolicy::NameLookup`].
    pub author_name: String,
    pub title: String,
    pub description: String,
    pub image: Option<Upload>,
}

impl ArticleForm {
    /// # Errors
    ///
    /// Returns the first missing required field for `policy`.
    pub fn validate(&self, policy: AuthorPolicy) -> Result<(), ArticleInvalid> {
        if policy == AuthorPolicy::NameLookup && self.author_name.trim().is_empty() {
            return Err(ArticleInvalid::MissingAuthorName);
        }
        if self.title.trim().is_empty() {
            return Err(ArticleInvalid::MissingTitle);
        }
        Ok(())
    }

    /// Multipart fields for creating the article, authored by `user_id`.
    #[must_use]
    pub fn to_payload(&self, user_id: &str) -> FormPayload {
        FormPayload::new()
            .text("title", self.title.trim())
            .text("description", self.description.trim())
            .text("user", user_id)
            .file("image", self.image.clone())
    }
}
