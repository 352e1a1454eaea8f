//! Contact Delete Dialog Component
//!
//! Confirmation modal for the pending delete. Shown while the view-model
//! has a pending id; a failed delete keeps it open for a retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{notify_error, notify_success, use_ui_store};

#[component]
pub fn ContactDeleteDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();
    let (deleting, set_deleting) = signal(false);

    let cancel = move || {
        if !deleting.get_untracked() {
            ctx.update_vm(|vm| vm.cancel_delete());
        }
    };

    let confirm = move |_| {
        let Some(contact) = ctx.view_model().pending_delete_contact() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            let vm = ctx.view_model();
            let result = vm.confirm_delete(contact.id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => notify_success(
                    &store,
                    "Contact Deleted",
                    format!("{} has been removed from your contacts.", contact.full_name()),
                ),
                Err(e) => notify_error(&store, &e),
            }
            ctx.changed();
        });
    };

    view! {
        {move || ctx.with_vm(|vm| vm.pending_delete_contact()).map(|contact| view! {
            <div class="modal-backdrop" on:click=move |_| cancel()>
                <div
                    class="modal"
                    role="alertdialog"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="modal-title">{format!("Delete {}'s contact ?", contact.first_name)}</h2>
                    <p class="modal-body">"Are you sure? You can't undo this action afterwards."</p>
                    <div class="modal-actions">
                        <button
                            class="secondary-btn"
                            disabled=move || deleting.get()
                            on:click=move |_| cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="danger-btn"
                            disabled=move || deleting.get()
                            on:click=confirm
                        >
                            {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
