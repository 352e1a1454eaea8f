//! Pagination Component

use leptos::prelude::*;

/// Prev/next controls with a "Page x of y" indicator.
///
/// Hidden when everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || (total.get() > 1)>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || current.get() <= 1
                    on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                <span class="page-indicator">
                    {move || format!("Page {} of {}", current.get(), total.get())}
                </span>
                <button
                    class="page-btn"
                    disabled=move || current.get() >= total.get()
                    on:click=move |_| on_change.run(current.get_untracked() + 1)
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
