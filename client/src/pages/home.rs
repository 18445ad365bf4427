//! Home page: the article feed.

use leptos::prelude::*;

use crate::components::blog_section::BlogSection;

/// Served at both `/` and `/blogs`.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <BlogSection/>
        </section>
    }
}
