//! Article-feed state for the blog section.
//!
//! DESIGN
//! ======
//! The feed is a single fetch result mapped into an explicit view state, so a
//! failed request renders as an error instead of an empty list. `FeedRevision`
//! is bumped after a successful submission to trigger a refetch.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::net::error::ApiError;
use crate::net::types::Article;

/// Monotonic counter the blog section tracks to know when to refetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedRevision(pub u32);

impl FeedRevision {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What the blog section should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedState {
    Loading,
    Loaded(Vec<Article>),
    Failed(String),
}

impl FeedState {
    /// Map a pending (`None`) or finished fetch into a view state.
    #[must_use]
    pub fn from_fetch(result: Option<Result<Vec<Article>, ApiError>>) -> Self {
        match result {
            None => Self::Loading,
            Some(Ok(articles)) => Self::Loaded(articles),
            Some(Err(err)) => Self::Failed(format!("Could not load articles: {err}")),
        }
    }
}
