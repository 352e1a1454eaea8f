//! Contact Form Component
//!
//! Shared by the add and edit pages. The parent owns the draft and the
//! validation errors; this component only renders and edits them.

use leptos::prelude::*;

use crate::validation::{ContactDraft, FormErrors};

fn error_line(message: Option<String>) -> impl IntoView {
    message.map(|m| view! { <p class="field-error">{m}</p> })
}

#[component]
pub fn ContactForm(
    draft: RwSignal<ContactDraft>,
    #[prop(into)] errors: Signal<Option<FormErrors>>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] submit_label: String,
    /// Show "Add another number" and per-row remove buttons
    #[prop(optional)]
    editable_phones: bool,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let first_name_error = move || {
        errors.with(|e| e.as_ref().and_then(|e| e.first_name.as_ref().map(ToString::to_string)))
    };
    let last_name_error = move || {
        errors.with(|e| e.as_ref().and_then(|e| e.last_name.as_ref().map(ToString::to_string)))
    };
    let phone_error = move |index: usize| {
        errors.with(|e| e.as_ref().and_then(|e| e.phone(index).map(ToString::to_string)))
    };

    view! {
        <form
            class="contact-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="form-field">
                <span class="field-label">"First name"</span>
                <input
                    type="text"
                    placeholder="First name"
                    prop:value=move || draft.with(|d| d.first_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.first_name = value);
                    }
                />
                {move || error_line(first_name_error())}
            </label>

            <label class="form-field">
                <span class="field-label">"Last name"</span>
                <input
                    type="text"
                    placeholder="Last name"
                    prop:value=move || draft.with(|d| d.last_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.last_name = value);
                    }
                />
                {move || error_line(last_name_error())}
            </label>

            <fieldset class="form-field phones">
                <legend class="field-label">"Phone numbers"</legend>
                // Rows are keyed by position and read their value reactively,
                // so typing never recreates the focused input
                <For
                    each=move || 0..draft.with(|d| d.phones.len())
                    key=|index| *index
                    children=move |index| view! {
                        <div class="phone-row">
                            <input
                                type="tel"
                                placeholder="Phone number"
                                prop:value=move || draft.with(|d| d.phones.get(index).cloned().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| {
                                        if let Some(slot) = d.phones.get_mut(index) {
                                            *slot = value;
                                        }
                                    });
                                }
                            />
                            <Show when=move || editable_phones && draft.with(|d| d.phones.len() > 1)>
                                <button
                                    type="button"
                                    class="icon-btn remove-phone-btn"
                                    title="Remove number"
                                    on:click=move |_| draft.update(|d| {
                                        if index < d.phones.len() {
                                            d.phones.remove(index);
                                        }
                                    })
                                >
                                    "×"
                                </button>
                            </Show>
                            {move || error_line(phone_error(index))}
                        </div>
                    }
                />
                <Show when=move || editable_phones>
                    <button
                        type="button"
                        class="link-btn add-phone-btn"
                        on:click=move |_| draft.update(|d| d.phones.push(String::new()))
                    >
                        "+ Add another number"
                    </button>
                </Show>
            </fieldset>

            <div class="form-actions">
                <button
                    type="button"
                    class="secondary-btn"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}
