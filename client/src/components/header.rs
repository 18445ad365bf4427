//! Top bar: brand, navigation, theme toggle, session controls and modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header owns the modal open-state and every modal's field signals, so a
//! dialog closed mid-edit reopens with its input intact. A successful article
//! submission bumps the shared [`FeedRevision`] so the feed refetches.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::actions::auth::logout;
use crate::components::add_article_modal::{AddArticleModal, ArticleFields};
use crate::components::login_modal::{LoginFields, LoginModal};
use crate::components::notification::{Notification, Tone};
use crate::components::register_modal::{RegisterFields, RegisterModal};
use crate::config::{AuthorPolicy, ClientConfig};
use crate::net::pocketbase::PocketBase;
use crate::state::articles::FeedRevision;
use crate::state::modals::{Modal, ModalState};
use crate::state::session::SessionState;
use crate::util::theme::{ColorScheme, Theme, toggle};

pub const ARTICLE_ADDED_MESSAGE: &str = "Article added successfully!";
pub const SUCCESS_TOAST_MS: u64 = 3_000;

/// Greeting shown next to the session controls.
#[must_use]
pub fn greeting(session: &SessionState) -> String {
    format!("Hi, {}", session.display_name())
}

/// Whether the "ADD ARTICLE" button is offered.
#[must_use]
pub fn can_add_article(policy: AuthorPolicy, session: &SessionState) -> bool {
    match policy {
        AuthorPolicy::Session => session.is_authenticated(),
        AuthorPolicy::NameLookup => true,
    }
}

#[must_use]
pub fn theme_toggle_label(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Light => "Dark mode",
        ColorScheme::Dark => "Light mode",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let client = expect_context::<PocketBase>();
    let session = expect_context::<RwSignal<SessionState>>();
    let revision = expect_context::<RwSignal<FeedRevision>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let policy = expect_context::<ClientConfig>().author_policy;

    let modals = RwSignal::new(ModalState::default());
    let article_fields = ArticleFields::new();
    let login_fields = LoginFields::new();
    let register_fields = RegisterFields::new();
    let toast = RwSignal::new(false);

    let close = move |modal: Modal| Callback::new(move |()| modals.update(|m| m.close(modal)));

    let on_article_added = Callback::new(move |()| {
        modals.update(|m| m.close(Modal::AddArticle));
        revision.update(|r| *r = r.next());
        toast.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SUCCESS_TOAST_MS)).await;
            toast.set(false);
        });
    });

    let on_logout = Callback::new(move |()| {
        let mut next = session.get_untracked();
        logout(&client, &mut next);
        session.set(next);
        leptos::logging::log!("signed out");
    });

    let on_theme = move |_| {
        theme.update(|t| t.scheme = toggle(t.scheme));
    };

    view! {
        <header class="header">
            <div class="header__brand">
                <img class="header__avatar" src="/images/dp.jpeg" alt="Profile"/>
                <span class="header__title">"PHOTOGRAPHY BLOG"</span>
            </div>

            <nav class="header__nav">
                <A href="/">"Home"</A>
                <A href="/blogs">"Blogs"</A>
            </nav>

            <div class="header__actions">
                <Show when=move || can_add_article(policy, &session.get())>
                    <button class="btn btn--primary" on:click=move |_| modals.update(|m| m.open(Modal::AddArticle))>
                        "ADD ARTICLE"
                    </button>
                </Show>
                <button class="btn btn--ghost" on:click=on_theme>
                    {move || theme_toggle_label(theme.get().scheme)}
                </button>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=move |_| modals.update(|m| m.open(Modal::Login))>
                                "LOGIN"
                            </button>
                            <button class="btn" on:click=move |_| modals.update(|m| m.open(Modal::Register))>
                                "REGISTER"
                            </button>
                        }
                    }
                >
                    <span class="header__greeting">{move || greeting(&session.get())}</span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "LOGOUT"
                    </button>
                </Show>
            </div>
        </header>

        <Show when=move || toast.get()>
            <div class="toast">
                <Notification
                    tone=Tone::Success
                    message=ARTICLE_ADDED_MESSAGE
                    on_close=Callback::new(move |()| toast.set(false))
                />
            </div>
        </Show>

        <Show when=move || modals.get().is_open(Modal::AddArticle)>
            <AddArticleModal fields=article_fields on_close=close(Modal::AddArticle) on_added=on_article_added/>
        </Show>
        <Show when=move || modals.get().is_open(Modal::Login)>
            <LoginModal fields=login_fields on_close=close(Modal::Login) on_success=close(Modal::Login)/>
        </Show>
        <Show when=move || modals.get().is_open(Modal::Register)>
            <RegisterModal fields=register_fields on_close=close(Modal::Register)/>
        </Show>
    }
}
