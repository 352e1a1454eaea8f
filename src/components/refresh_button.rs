//! Refresh Button Component
//!
//! Re-fetches the list from the backend, bypassing the cache.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{notify_error, use_ui_store};
use crate::view_model::LoadSource;

#[component]
pub fn RefreshButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    let refresh = move |_| {
        if ctx.loading.get_untracked() {
            return;
        }
        spawn_local(async move {
            ctx.set_loading(true);
            let vm = ctx.view_model();
            match vm.refresh().await {
                Ok(LoadSource::Superseded) => log::debug!("[APP] Refresh superseded"),
                Ok(_) => log::info!("[APP] Refreshed {} contacts", vm.contacts().len()),
                Err(e) => notify_error(&store, &e),
            }
            ctx.set_loading(false);
            ctx.changed();
        });
    };

    view! {
        <button
            class="secondary-btn refresh-btn"
            disabled=move || ctx.loading.get()
            on:click=refresh
        >
            {move || if ctx.loading.get() { "Refreshing..." } else { "Refresh" }}
        </button>
    }
}
