//! Search Bar Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Filters both tables by name or phone number as the user types
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let query = move || ctx.with_vm(|vm| vm.search_query());

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search by name or phone number..."
                prop:value=query
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.update_vm(|vm| vm.set_search_query(value));
                }
            />
            <Show when=move || !query().is_empty()>
                <button
                    class="clear-btn"
                    title="Clear search"
                    on:click=move |_| ctx.update_vm(|vm| vm.set_search_query(""))
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
