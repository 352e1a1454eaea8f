//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::cache::{JsonCache, KeyValueStore};
use crate::repository::GraphqlContactRepository;
use crate::routes::Route;
use crate::view_model::ContactListViewModel;

pub type AppViewModel = ContactListViewModel<GraphqlContactRepository, JsonCache<Box<dyn KeyValueStore>>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The view-model; not `Send`, so kept in thread-local storage
    view_model: StoredValue<Rc<AppViewModel>, LocalStorage>,
    /// Bumped after every view-model mutation - read
    pub revision: ReadSignal<u32>,
    /// Bumped after every view-model mutation - write
    set_revision: WriteSignal<u32>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// A list fetch is in flight - read
    pub loading: ReadSignal<bool>,
    /// A list fetch is in flight - write
    set_loading: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        view_model: AppViewModel,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        let (revision, set_revision) = signal(0u32);
        Self {
            view_model: StoredValue::new_local(Rc::new(view_model)),
            revision,
            set_revision,
            route: route.0,
            set_route: route.1,
            loading: loading.0,
            set_loading: loading.1,
        }
    }

    /// Untracked handle, for async actions
    pub fn view_model(&self) -> Rc<AppViewModel> {
        self.view_model.get_value()
    }

    /// Tracked read: re-runs the caller whenever the view-model changes
    pub fn with_vm<T>(&self, f: impl FnOnce(&AppViewModel) -> T) -> T {
        self.revision.get();
        f(&self.view_model())
    }

    /// Mutate the view-model and notify readers
    pub fn update_vm<T>(&self, f: impl FnOnce(&AppViewModel) -> T) -> T {
        let result = f(&self.view_model());
        self.changed();
        result
    }

    /// Notify readers after an async mutation finished
    pub fn changed(&self) {
        self.set_revision.update(|v| *v += 1);
    }

    pub fn set_loading(&self, loading: bool) {
        self.set_loading.set(loading);
    }

    /// Show a page and mirror it into the URL hash
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.to_hash());
        }
    }

    /// Sync with a hash changed by the browser (back/forward, typed URL)
    pub fn follow_location(&self) {
        let route = Route::current();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}
