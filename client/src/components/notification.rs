//! Dismissible notification used for inline errors and the success toast.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification--success",
            Self::Error => "notification notification--error",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

#[component]
pub fn Notification(tone: Tone, #[prop(into)] message: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class=tone.class() role="alert">
            <div class="notification__body">
                <strong class="notification__title">{tone.title()}</strong>
                <span class="notification__message">{message}</span>
            </div>
            <button type="button" class="notification__close" on:click=move |_| on_close.run(()) title="Dismiss">
                "✕"
            </button>
        </div>
    }
}

/// Inline error bound to an optional message signal; renders nothing when `None`.
#[component]
pub fn InlineError(#[prop(into)] error: Signal<Option<String>>, on_close: Callback<()>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! { <Notification tone=Tone::Error message=message on_close=on_close/> }
        })
    }
}
