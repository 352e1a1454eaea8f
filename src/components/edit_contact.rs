//! Edit Contact Page
//!
//! Loads the contact straight from the backend, then saves the names and
//! each changed phone number. The number of phones is fixed here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ContactForm;
use crate::context::AppContext;
use crate::error::ContactError;
use crate::models::Contact;
use crate::routes::Route;
use crate::store::{notify_error, notify_success, use_ui_store};
use crate::validation::{ContactDraft, FormErrors};

#[component]
pub fn EditContact(id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    let original = RwSignal::new(None::<Contact>);
    let draft = RwSignal::new(ContactDraft::default());
    let (load_failed, set_load_failed) = signal(false);
    let (errors, set_errors) = signal(None::<FormErrors>);
    let (submitting, set_submitting) = signal(false);

    spawn_local(async move {
        let vm = ctx.view_model();
        match vm.load_contact(id).await {
            Ok(contact) => {
                draft.set(ContactDraft::from(&contact));
                original.set(Some(contact));
            }
            Err(e) => {
                notify_error(&store, &e);
                set_load_failed.set(true);
            }
        }
    });

    let submit = Callback::new(move |_: ()| {
        if submitting.get_untracked() {
            return;
        }
        let Some(before) = original.get_untracked() else {
            return;
        };
        let current = draft.get_untracked();
        if let Err(field_errors) = current.validate() {
            set_errors.set(Some(field_errors));
            return;
        }
        set_errors.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let vm = ctx.view_model();
            let result = vm.update_contact(&before, &current).await;
            set_submitting.set(false);
            match result {
                Ok(contact) => {
                    notify_success(
                        &store,
                        "Contact Updated",
                        format!("{}'s contact has been updated.", contact.first_name),
                    );
                    ctx.changed();
                    ctx.navigate(Route::List);
                }
                Err(ContactError::Invalid(field_errors)) => set_errors.set(Some(field_errors)),
                Err(e) => {
                    // Steps that succeeded were already applied
                    notify_error(&store, &e);
                    ctx.changed();
                }
            }
        });
    });

    let back = move |_| ctx.navigate(Route::List);

    view! {
        <section class="form-page">
            <header class="page-header">
                <h1>"Edit Contact"</h1>
            </header>
            {move || {
                if load_failed.get() {
                    view! {
                        <div class="empty-state">
                            <p>{format!("Contact #{} could not be loaded.", id)}</p>
                            <button class="secondary-btn" on:click=back>"Back to contacts"</button>
                        </div>
                    }
                    .into_any()
                } else if original.with(Option::is_none) {
                    view! { <p class="loading-bar">"Loading contact..."</p> }.into_any()
                } else {
                    view! {
                        <ContactForm
                            draft=draft
                            errors=errors
                            submitting=submitting
                            submit_label="Update"
                            on_submit=submit
                            on_cancel=Callback::new(move |_: ()| ctx.navigate(Route::List))
                        />
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
