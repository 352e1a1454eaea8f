//! Phonebook App
//!
//! Root component: wires configuration, cache and repository into the
//! view-model, then switches between the list, add and edit pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::cache::{BrowserStorage, JsonCache, KeyValueStore, MemoryStore};
use crate::components::{AddContact, ContactList, EditContact, ToastStack};
use crate::config::AppConfig;
use crate::context::{AppContext, AppViewModel};
use crate::repository::GraphqlContactRepository;
use crate::routes::Route;
use crate::store::{notify_error, UiState};
use crate::view_model::ContactListViewModel;

fn build_view_model(config: &AppConfig) -> AppViewModel {
    let store: Box<dyn KeyValueStore> = match BrowserStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("[APP] localStorage unavailable, cache will not survive reloads");
            Box::new(MemoryStore::new())
        }
    };
    let cache = JsonCache::with_config(store, config);
    let repo = GraphqlContactRepository::from_config(config);
    ContactListViewModel::new(repo, cache, config.page_size)
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("[APP] Using GraphQL endpoint {}", config.graphql_endpoint);

    // State
    let (route, set_route) = signal(Route::current());
    let (loading, set_loading) = signal(false);
    let ctx = AppContext::new(build_view_model(&config), (route, set_route), (loading, set_loading));
    let ui = Store::new(UiState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(ui);

    // Back/forward and typed URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| ctx.follow_location());

    // Load contacts on mount (cache first)
    Effect::new(move |_| {
        spawn_local(async move {
            let vm = ctx.view_model();
            ctx.set_loading(true);
            match vm.initialize().await {
                Ok(source) => log::info!("[APP] Contacts loaded ({:?})", source),
                Err(e) => notify_error(&ui, &e),
            }
            ctx.set_loading(false);
            ctx.changed();
        });
    });

    view! {
        <div class="app-layout">
            <ToastStack />
            <main class="main-content">
                {move || match route.get() {
                    Route::List => view! { <ContactList /> }.into_any(),
                    Route::AddContact => view! { <AddContact /> }.into_any(),
                    Route::EditContact(id) => view! { <EditContact id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
