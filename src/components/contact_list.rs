//! Contact List Page
//!
//! Header actions, search, the favorites table and the all-contacts
//! table, each with its own pagination.

use leptos::prelude::*;

use crate::components::{ContactDeleteDialog, ContactTable, Pagination, RefreshButton, SearchBar};
use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn ContactList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Favorites
    let favorites = Signal::derive(move || ctx.with_vm(|vm| vm.favorite_page_of_contacts()));
    let favorite_page = Signal::derive(move || ctx.with_vm(|vm| vm.favorite_page()));
    let favorite_total = Signal::derive(move || ctx.with_vm(|vm| vm.favorite_total_pages()));

    // All contacts
    let contacts = Signal::derive(move || ctx.with_vm(|vm| vm.page_of_contacts()));
    let page = Signal::derive(move || ctx.with_vm(|vm| vm.page()));
    let total = Signal::derive(move || ctx.with_vm(|vm| vm.total_pages()));

    let empty_message = move || {
        if ctx.loading.get() {
            "Loading contacts..."
        } else if ctx.with_vm(|vm| vm.is_empty()) {
            "No contacts yet. Add one to get started."
        } else {
            "No contacts match your search."
        }
    };

    view! {
        <section class="contact-list-page">
            <header class="page-header">
                <h1>"Phone Book"</h1>
                <div class="header-actions">
                    <RefreshButton />
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Route::AddContact)>
                        "Add Contact"
                    </button>
                </div>
            </header>

            <SearchBar />

            <Show when=move || ctx.loading.get()>
                <div class="loading-bar">"Loading..."</div>
            </Show>

            <Show when=move || !favorites.with(Vec::is_empty)>
                <section class="contact-section favorites">
                    <h2>"Favorites"</h2>
                    <ContactTable contacts=favorites />
                    <Pagination
                        current=favorite_page
                        total=favorite_total
                        on_change=Callback::new(move |n: usize| ctx.update_vm(|vm| vm.set_favorite_page(n)))
                    />
                </section>
            </Show>

            <section class="contact-section all-contacts">
                <h2>"All Contacts"</h2>
                <Show
                    when=move || !contacts.with(Vec::is_empty)
                    fallback=move || view! { <p class="empty-state">{empty_message}</p> }
                >
                    <ContactTable contacts=contacts />
                    <Pagination
                        current=page
                        total=total
                        on_change=Callback::new(move |n: usize| ctx.update_vm(|vm| vm.set_page(n)))
                    />
                </Show>
            </section>

            <ContactDeleteDialog />
        </section>
    }
}
