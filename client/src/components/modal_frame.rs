//! Backdrop + dialog chrome shared by the header's modals.

#[cfg(test)]
#[path = "modal_frame_test.rs"]
mod modal_frame_test;

use leptos::prelude::*;

/// Keys that dismiss an open dialog.
#[must_use]
pub fn is_close_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Dialog with a title bar. Closes on backdrop click, the close button, or Escape.
#[component]
pub fn ModalFrame(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    // Focus on mount so keyboard dismissal works without a click first.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog"
                node_ref=dialog_ref
                role="dialog"
                aria-label=title
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button type="button" class="dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
