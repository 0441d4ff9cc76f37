//! Previous/next pager shared by paginated views.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// "Showing N of M books".
#[must_use]
pub fn showing_label(shown: usize, total: u64) -> String {
    let noun = if total == 1 { "book" } else { "books" };
    format!("Showing {shown} of {total} {noun}")
}

/// "Page x of y" with a one-based page number; `None` when there is at most
/// one page.
#[must_use]
pub fn page_label(page: u32, total_pages: u32) -> Option<String> {
    (total_pages > 1).then(|| format!("Page {} of {total_pages}", page + 1))
}

#[must_use]
pub const fn can_go_back(page: u32) -> bool {
    page > 0
}

#[must_use]
pub const fn can_go_forward(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] busy: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let can_back = move || can_go_back(page.get()) && !busy.get();
    let can_forward = move || can_go_forward(page.get(), total_pages.get()) && !busy.get();

    view! {
        <Show when=move || page_label(page.get(), total_pages.get()).is_some()>
            <div class="pagination">
                <button
                    class="pagination__button"
                    disabled=move || !can_back()
                    on:click=move |_| {
                        if can_back() {
                            on_page.run(page.get() - 1);
                        }
                    }
                >
                    "Previous"
                </button>
                <span class="pagination__label">
                    {move || page_label(page.get(), total_pages.get()).unwrap_or_default()}
                </span>
                <button
                    class="pagination__button"
                    disabled=move || !can_forward()
                    on:click=move |_| {
                        if can_forward() {
                            on_page.run(page.get() + 1);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
