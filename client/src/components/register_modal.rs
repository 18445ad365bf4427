//! Account registration dialog with per-field validation messages.

use leptos::prelude::*;

use crate::actions::auth::{RegisterError, register};
use crate::components::fields::{ImageField, PasswordField, TextField};
use crate::components::modal_frame::ModalFrame;
use crate::components::notification::InlineError;
use crate::forms::register::{RegisterField, RegisterForm};
use crate::net::client::Upload;
use crate::net::pocketbase::PocketBase;
use crate::util::browser::alert;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

#[derive(Clone, Copy)]
pub struct RegisterFields {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub avatar: RwSignal<Option<Upload>>,
    pub error: RwSignal<Option<RegisterError>>,
    pub submitting: RwSignal<bool>,
}

impl RegisterFields {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            avatar: RwSignal::new(None),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    fn snapshot(self) -> RegisterForm {
        RegisterForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            avatar: self.avatar.get_untracked(),
        }
    }

    fn reset(self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.confirm_password.set(String::new());
        self.avatar.set(None);
        self.error.set(None);
    }

    /// Message for `field`, or for the form as a whole when `field` is `None`.
    fn message_for(self, field: Option<RegisterField>) -> Signal<Option<String>> {
        let error = self.error;
        Signal::derive(move || {
            error.with(|e| e.as_ref().filter(|e| e.field() == field).map(ToString::to_string))
        })
    }
}

impl Default for RegisterFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn RegisterModal(fields: RegisterFields, on_close: Callback<()>) -> impl IntoView {
    let client = expect_context::<PocketBase>();

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
            let result = register(&client, &form).await;
            fields.submitting.set(false);
            match result {
                Ok(user) => {
                    leptos::logging::log!("registered user {}", user.id);
                    alert(REGISTERED_MESSAGE);
                    fields.reset();
                    on_close.run(());
                }
                Err(err) => fields.error.set(Some(err)),
            }
        });
    };

    let dismiss = Callback::new(move |()| fields.error.set(None));

    view! {
        <ModalFrame title="Register" on_close=on_close>
            <form class="dialog__form" novalidate=true on:submit=on_submit>
                <TextField label="Name" placeholder="Your name" value=fields.name/>
                <TextField label="Email" placeholder="you@example.com" value=fields.email input_type="email"/>
                <InlineError error=fields.message_for(Some(RegisterField::Email)) on_close=dismiss/>
                <PasswordField label="Password" placeholder="At least 8 characters" value=fields.password/>
                <InlineError error=fields.message_for(Some(RegisterField::Password)) on_close=dismiss/>
                <PasswordField label="Confirm password" placeholder="Repeat password" value=fields.confirm_password/>
                <InlineError error=fields.message_for(Some(RegisterField::ConfirmPassword)) on_close=dismiss/>
                <ImageField label="Avatar" value=fields.avatar/>
                <InlineError error=fields.message_for(None) on_close=dismiss/>
                <div class="dialog__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || fields.submitting.get()>
                        {move || if fields.submitting.get() { "Registering…" } else { "Register" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
