//! Blog feed: fetches every article once and renders a card per record.

#[cfg(test)]
#[path = "blog_section_test.rs"]
mod blog_section_test;

use leptos::prelude::*;

use crate::components::blog_card::{BlogCard, CardView};
use crate::net::api;
use crate::net::pocketbase::PocketBase;
use crate::net::types::Article;
use crate::state::articles::{FeedRevision, FeedState};

/// One card view per article, in the order received.
#[must_use]
pub fn feed_cards(articles: &[Article], api_base: &str) -> Vec<CardView> {
    articles.iter().map(|a| CardView::from_article(a, api_base)).collect()
}

/// Article feed. Refetches when the shared [`FeedRevision`] changes.
#[component]
pub fn BlogSection() -> impl IntoView {
    let client = expect_context::<PocketBase>();
    let revision = expect_context::<RwSignal<FeedRevision>>();
    let api_base = client.base_url().to_owned();

    let articles = LocalResource::new(move || {
        revision.track();
        let client = client.clone();
        async move { api::fetch_articles(&client).await }
    });

    view! {
        <section class="blog-section">
            {move || match FeedState::from_fetch(articles.get()) {
                FeedState::Loading => {
                    view! { <p class="blog-section__status">"Loading articles..."</p> }.into_any()
                }
                FeedState::Failed(message) => {
                    view! { <p class="blog-section__status blog-section__status--error">{message}</p> }
                        .into_any()
                }
                FeedState::Loaded(list) => {
                    feed_cards(&list, &api_base)
                        .into_iter()
                        .map(|card| view! { <BlogCard card=card/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}
        </section>
    }
}
