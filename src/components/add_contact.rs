//! Add Contact Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ContactForm;
use crate::context::AppContext;
use crate::error::ContactError;
use crate::routes::Route;
use crate::store::{notify_error, notify_success, use_ui_store};
use crate::validation::{ContactDraft, FormErrors};

#[component]
pub fn AddContact() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    let draft = RwSignal::new(ContactDraft::blank());
    let (errors, set_errors) = signal(None::<FormErrors>);
    let (submitting, set_submitting) = signal(false);

    let submit = Callback::new(move |_: ()| {
        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        // Validate locally first so field errors show without a round trip
        if let Err(field_errors) = current.validate() {
            set_errors.set(Some(field_errors));
            return;
        }
        set_errors.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let vm = ctx.view_model();
            let result = vm.create_contact(&current).await;
            set_submitting.set(false);
            match result {
                Ok(contact) => {
                    notify_success(
                        &store,
                        "Contact Added",
                        format!("{} has been added to your contacts.", contact.full_name()),
                    );
                    ctx.changed();
                    ctx.navigate(Route::List);
                }
                Err(ContactError::Invalid(field_errors)) => set_errors.set(Some(field_errors)),
                Err(e) => notify_error(&store, &e),
            }
        });
    });

    view! {
        <section class="form-page">
            <header class="page-header">
                <h1>"Add Contact"</h1>
            </header>
            <ContactForm
                draft=draft
                errors=errors
                submitting=submitting
                submit_label="Save"
                editable_phones=true
                on_submit=submit
                on_cancel=Callback::new(move |_: ()| ctx.navigate(Route::List))
            />
        </section>
    }
}
