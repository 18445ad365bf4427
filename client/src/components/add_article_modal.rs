//! Add-article dialog.
//!
//! The author field is only shown under the name-lookup policy; otherwise the
//! signed-in user authors the article.

use leptos::prelude::*;

use crate::actions::article::submit_article;
use crate::components::fields::{ImageField, TextField};
use crate::components::modal_frame::ModalFrame;
use crate::components::notification::InlineError;
use crate::config::{AuthorPolicy, ClientConfig};
use crate::forms::article::ArticleForm;
use crate::net::client::Upload;
use crate::net::pocketbase::PocketBase;
use crate::state::session::SessionState;

#[derive(Clone, Copy)]
pub struct ArticleFields {
    pub author_name: RwSignal<String>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub image: RwSignal<Option<Upload>>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl ArticleFields {
    #[must_use]
    pub fn new() -> Self {
        Self {
            author_name: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            image: RwSignal::new(None),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    fn snapshot(self) -> ArticleForm {
        ArticleForm {
            author_name: self.author_name.get_untracked(),
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            image: self.image.get_untracked(),
        }
    }

    fn reset(self) {
        self.author_name.set(String::new());
        self.title.set(String::new());
        self.description.set(String::new());
        self.image.set(None);
        self.error.set(None);
    }
}

impl Default for ArticleFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AddArticleModal(fields: ArticleFields, on_close: Callback<()>, on_added: Callback<()>) -> impl IntoView {
    let client = expect_context::<PocketBase>();
    let session = expect_context::<RwSignal<SessionState>>();
    let policy = expect_context::<ClientConfig>().author_policy;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if fields.submitting.get_untracked() {
            return;
        }
        let form = fields.snapshot();
        let current = session.get_untracked();
        let client = client.clone();
        fields.submitting.set(true);
        fields.error.set(None);
        leptos::task::spawn_local(async move {
            let result = submit_article(&client, &current, policy, &form).await;
            fields.submitting.set(false);
            match result {
                Ok(article) => {
                    leptos::logging::log!("article {} added", article.id);
                    fields.reset();
                    on_added.run(());
                }
                Err(err) => fields.error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <ModalFrame title="Add Article" on_close=on_close>
            <form class="dialog__form" novalidate=true on:submit=on_submit>
                <Show when=move || policy == AuthorPolicy::NameLookup>
                    <TextField label="Your name" placeholder="Name of a registered user" value=fields.author_name/>
                </Show>
                <TextField label="Title" placeholder="Article title" value=fields.title/>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="field__input field__input--area"
                        placeholder="What is this photo about?"
                        rows="4"
                        prop:value=move || fields.description.get()
                        on:input=move |ev| fields.description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <ImageField label="Image" value=fields.image/>
                <InlineError error=fields.error on_close=Callback::new(move |()| fields.error.set(None))/>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || fields.submitting.get()>
                        {move || if fields.submitting.get() { "Adding…" } else { "Add Article" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
