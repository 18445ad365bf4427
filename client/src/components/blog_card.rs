//! Card rendering one article in the blog feed.
//!
//! DESIGN
//! ======
//! All derivation (image URL, author fallback, date formatting) happens in
//! `CardView::from_article`; the component only lays the values out.

#[cfg(test)]
#[path = "blog_card_test.rs"]
mod blog_card_test;

use leptos::prelude::*;

use crate::net::pocketbase::file_url;
use crate::net::types::Article;
use crate::util::date::format_created;

/// Display-ready values for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub key: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
    /// Expanded author name, or `""` when the relation was not inlined.
    pub author: String,
    /// `DD Month YYYY`, or `""` when the timestamp does not parse.
    pub date: String,
}

impl CardView {
    #[must_use]
    pub fn from_article(article: &Article, api_base: &str) -> Self {
        Self {
            key: article.id.clone(),
            image_url: file_url(api_base, &article.collection_id, &article.id, &article.image),
            title: article.title.clone(),
            description: article.description.clone(),
            author: article.author_name().unwrap_or_default().to_owned(),
            date: format_created(&article.created).unwrap_or_default(),
        }
    }
}

/// One card per article: image, title, description, author and date.
#[component]
pub fn BlogCard(card: CardView) -> impl IntoView {
    let CardView { image_url, title, description, author, date, .. } = card;

    view! {
        <article class="blog-card">
            <img class="blog-card__image" src=image_url alt=title.clone()/>
            <div class="blog-card__content">
                <h3 class="blog-card__title">{title}</h3>
                <p class="blog-card__description">{description}</p>
                <div class="blog-card__info">
                    <span class="blog-card__author">{author}</span>
                    " | "
                    <span class="blog-card__date">{date}</span>
                </div>
            </div>
        </article>
    }
}
