//! Toast Stack Component
//!
//! Renders the notifications held in the UI store. Each toast removes
//! itself after its timeout; the × button dismisses it early. Error toasts
//! can be expanded to show the most recent log lines.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_ui_store, Toast, UiStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let details = (!toast.details.is_empty()).then(|| {
                        let lines = toast.details.join("\n");
                        view! {
                            <details class="toast-details">
                                <summary>"Details"</summary>
                                <pre>{lines}</pre>
                            </details>
                        }
                    });
                    view! {
                        <div class=toast.kind.css_class()>
                            <div class="toast-body">
                                <strong class="toast-title">{toast.title}</strong>
                                <p class="toast-description">{toast.description}</p>
                                {details}
                            </div>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| store_dismiss_toast(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
