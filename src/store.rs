//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! toast notifications; contact data lives in the view-model.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::error::ContactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// How long the toast stays on screen
    pub fn duration_ms(self) -> u32 {
        match self {
            ToastKind::Success => 3_500,
            ToastKind::Warning | ToastKind::Error => 4_000,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Warning => "toast warning",
            ToastKind::Error => "toast error",
        }
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    /// Recent log lines attached to error toasts
    pub details: Vec<String>,
}

impl Toast {
    pub fn new(id: u32, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            details: Vec::new(),
        }
    }

    pub fn from_error(id: u32, err: &ContactError) -> Self {
        let kind = if err.is_warning() { ToastKind::Warning } else { ToastKind::Error };
        Self::new(id, kind, err.title(), err.to_string())
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last issued toast id
    pub last_toast_id: u32,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Log lines shown under an error toast
const ERROR_DETAIL_LINES: usize = 5;

fn next_toast_id(store: &UiStore) -> u32 {
    let field = store.last_toast_id();
    let mut last = field.write();
    *last += 1;
    *last
}

/// Show a toast and schedule its removal
pub fn store_push_toast(store: &UiStore, toast: Toast) {
    let id = toast.id;
    let duration = toast.kind.duration_ms();
    store.toasts().write().push(toast);

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(duration).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

pub fn notify_success(store: &UiStore, title: &str, description: impl Into<String>) {
    let id = next_toast_id(store);
    store_push_toast(store, Toast::new(id, ToastKind::Success, title, description));
}

pub fn notify_error(store: &UiStore, err: &ContactError) {
    log::warn!("[APP] {}", err);
    let id = next_toast_id(store);
    let details = rolling_logger::recent_lines(ERROR_DETAIL_LINES)
        .iter()
        .map(ToString::to_string)
        .collect();
    store_push_toast(store, Toast::from_error(id, err).with_details(details));
}
