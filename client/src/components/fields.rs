//! Labelled form inputs: text, password with visibility toggle, image picker.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::net::client::Upload;
use crate::util::browser::accept_attr;

/// Input `type` for a password field with the given visibility.
#[must_use]
pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[must_use]
pub fn visibility_label(visible: bool) -> &'static str {
    if visible { "Hide password" } else { "Show password" }
}

#[component]
pub fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Password input whose visibility toggles independently of any other field.
/// Toggling only changes the input type; the value is untouched.
#[component]
pub fn PasswordField(label: &'static str, placeholder: &'static str, value: RwSignal<String>) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <span class="field__password">
                <input
                    class="field__input"
                    type=move || password_input_type(visible.get())
                    placeholder=placeholder
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="field__toggle"
                    class:field__toggle--on=move || visible.get()
                    title=move || visibility_label(visible.get())
                    aria-label=move || visibility_label(visible.get())
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    <svg class="field__toggle-icon" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M1 12s4-7 11-7 11 7 11 7-4 7-11 7S1 12 1 12z"></path>
                        <circle cx="12" cy="12" r="3"></circle>
                    </svg>
                </button>
            </span>
        </label>
    }
}

/// File input for png/jpeg images. The picked file is read into memory.
#[component]
pub fn ImageField(label: &'static str, value: RwSignal<Option<Upload>>) -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::browser::read_selected_file(&input).await {
                    Ok(upload) => {
                        error.set(None);
                        value.set(upload);
                    }
                    Err(e) => {
                        leptos::logging::warn!("image pick failed: {e}");
                        error.set(Some(e));
                        value.set(None);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input class="field__input field__input--file" type="file" accept=accept_attr() on:change=on_change/>
            <span class="field__hint">
                {move || value.with(|v| v.as_ref().map(|u| u.file_name.clone()).unwrap_or_default())}
            </span>
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
