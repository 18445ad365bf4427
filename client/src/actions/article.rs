//! Article submission.
//!
//! Under [`AuthorPolicy::Session`] the session is checked before anything
//! else, so a signed-out user never reaches the create call. Under
//! [`AuthorPolicy::NameLookup`] the author is resolved by display name instead.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use crate::config::AuthorPolicy;
use crate::forms::article::{ArticleForm, ArticleInvalid};
use crate::net::api;
use crate::net::client::RecordClient;
use crate::net::error::ApiError;
use crate::net::types::Article;
use crate::state::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitArticleError {
    #[error("Log in to add an article")]
    NotAuthenticated,
    #[error(transparent)]
    Invalid(#[from] ArticleInvalid),
    #[error("User does not exist!")]
    AuthorNotFound,
    #[error("Could not add article. Please try again.")]
    Failed(ApiError),
}

/// Resolve the author id for this submission according to `policy`.
async fn resolve_author<C: RecordClient + ?Sized>(
    client: &C,
    session: &SessionState,
    policy: AuthorPolicy,
    form: &ArticleForm,
) -> Result<String, SubmitArticleError> {
    match policy {
        AuthorPolicy::Session => session
            .user_id()
            .map(str::to_owned)
            .ok_or(SubmitArticleError::NotAuthenticated),
        AuthorPolicy::NameLookup => match api::find_user_by_name(client, form.author_name.trim()).await {
            Ok(user) => Ok(user.id),
            Err(ApiError::NotFound) => {
                leptos::logging::log!("user not found: {}", form.author_name.trim());
                Err(SubmitArticleError::AuthorNotFound)
            }
            Err(err) => {
                leptos::logging::error!("error looking up author: {err}");
                Err(SubmitArticleError::Failed(err))
            }
        },
    }
}

/// Validate, authorize and create an article record.
///
/// # Errors
///
/// See [`SubmitArticleError`]; every variant except `Failed` is raised before
/// the create request.
pub async fn submit_article<C: RecordClient + ?Sized>(
    client: &C,
    session: &SessionState,
    policy: AuthorPolicy,
    form: &ArticleForm,
) -> Result<Article, SubmitArticleError> {
    if policy == AuthorPolicy::Session && !session.is_authenticated() {
        return Err(SubmitArticleError::NotAuthenticated);
    }
    form.validate(policy)?;
    let author_id = resolve_author(client, session, policy, form).await?;

    api::create_article(client, form.to_payload(&author_id)).await.map_err(|err| {
        leptos::logging::error!("error adding article: {err}");
        SubmitArticleError::Failed(err)
    })
}
