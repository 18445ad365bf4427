//! Email + password login dialog.

use leptos::prelude::*;

use crate::actions::auth::{LoginError, login};
use crate::components::fields::{PasswordField, TextField};
use crate::components::modal_frame::ModalFrame;
use crate::components::notification::InlineError;
use crate::forms::login::LoginForm;
use crate::net::pocketbase::PocketBase;
use crate::state::session::SessionState;
use crate::util::browser::alert;

/// Field signals owned by the header so they survive the dialog closing.
#[derive(Clone, Copy)]
pub struct LoginFields {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl LoginFields {
    #[must_use]
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    fn snapshot(self) -> LoginForm {
        LoginForm { email: self.email.get_untracked(), password: self.password.get_untracked() }
    }

    fn reset(self) {
        self.email.set(String::new());
        self.password.set(String::new());
        self.error.set(None);
    }
}

impl Default for LoginFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LoginModal(fields: LoginFields, on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let client = expect_context::<PocketBase>();
    let session = expect_context::<RwSignal<SessionState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if fields.submitting.get_untracked() {
            return;
        }
        let form = fields.snapshot();
        let client = client.clone();
        fields.submitting.set(true);
        fields.error.set(None);
        leptos::task::spawn_local(async move {
            let mut next = session.get_untracked();
            let result = login(&client, &mut next, &form).await;
            fields.submitting.set(false);
            match result {
                Ok(()) => {
                    session.set(next);
                    fields.reset();
                    on_success.run(());
                }
                Err(err @ LoginError::Rejected(_)) => {
                    alert(&err.to_string());
                    fields.error.set(Some(err.to_string()));
                }
                Err(err) => fields.error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <ModalFrame title="Login" on_close=on_close>
            <form class="dialog__form" novalidate=true on:submit=on_submit>
                <TextField label="Email" placeholder="you@example.com" value=fields.email input_type="email"/>
                <PasswordField label="Password" placeholder="Your password" value=fields.password/>
                <InlineError error=fields.error on_close=Callback::new(move |()| fields.error.set(None))/>
                <div class="dialog__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || fields.submitting.get()>
                        {move || if fields.submitting.get() { "Logging in…" } else { "Login" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
