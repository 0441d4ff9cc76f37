//! Catalog view with search, subject/status filters and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every filter change or page move asks the list for a ticket and spawns
//! one fetch for it. Responses are offered back through the same list, which
//! drops any that a newer ticket superseded. The controls edit a draft of the
//! filters; the list only adopts them once the server answers, and a failed
//! load puts the controls back on the filters still shown.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::pagination::{Pagination, showing_label};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{BOOK_SUBJECTS, Book, BookFilters};
use crate::state::listing::{ApplyOutcome, FetchTicket, ListState};
use crate::state::notice::NoticeState;

pub type CatalogList = ListState<Book, BookFilters>;

const LOAD_FAILED: &str = "Failed to load books. Please try again.";

/// Headline under the page title for the current filters.
#[must_use]
pub fn empty_message(filters: &BookFilters) -> &'static str {
    if filters.is_empty() {
        "Check back later for new additions to our library."
    } else {
        "No books match these filters. Try a different search, subject or status."
    }
}

fn spawn_fetch(
    api: ApiClient,
    list: RwSignal<CatalogList>,
    draft: RwSignal<BookFilters>,
    notices: RwSignal<NoticeState>,
    ticket: FetchTicket<BookFilters>,
) {
    leptos::task::spawn_local(async move {
        let result = api.list_books(&ticket.filters, ticket.page, ticket.size).await;
        match list.try_update(|l| l.apply(&ticket, result)) {
            Some(ApplyOutcome::Failed(err)) => {
                leptos::logging::warn!("catalog load failed: {err}");
                draft.set(list.with_untracked(|l| l.filters.clone()));
                notices.update(|n| {
                    n.report(&err, LOAD_FAILED);
                });
            }
            Some(ApplyOutcome::Stale) => leptos::logging::log!("dropped stale catalog page {}", ticket.page),
            _ => {}
        }
    });
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();

    let list = RwSignal::new(CatalogList::new(config.with_value(|c| c.browse_page_size)));
    let draft = RwSignal::new(BookFilters::default());
    let search_text = RwSignal::new(String::new());
    let fetch = move |ticket: FetchTicket<BookFilters>| spawn_fetch(api, list, draft, notices, ticket);

    if let Some(ticket) = list.try_update(ListState::refresh) {
        fetch(ticket);
    }

    let apply_filters = move |filters: BookFilters| {
        draft.set(filters.clone());
        if let Some(ticket) = list.try_update(|l| l.set_filters(filters)) {
            fetch(ticket);
        }
    };
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        apply_filters(draft.get_untracked().with_search(&search_text.get_untracked()));
    };
    let on_subject = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        apply_filters(draft.get_untracked().with_subject(&raw));
    };
    let on_status = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        apply_filters(draft.get_untracked().with_status(&raw));
    };
    Effect::new(move || {
        search_text.set(draft.with(|d| d.search.clone().unwrap_or_default()));
    });
    let on_page = Callback::new(move |page: u32| {
        if let Some(ticket) = list.try_update(|l| l.goto_page(page)).flatten() {
            fetch(ticket);
        }
    });

    let first_load = move || list.with(|l| l.loading && !l.loaded);
    let is_empty = move || list.with(|l| l.loaded && l.items.is_empty());

    view! {
        <div class="browse-page">
            <header class="page-header">
                <h1>"Available Books"</h1>
                <p class="page-header__subtitle">"Browse through our collection of shared books"</p>
            </header>
            <div class="browse-filters">
                <form class="browse-filters__search" on:submit=on_search>
                    <input
                        type="search"
                        class="browse-filters__input"
                        placeholder="Search by title or author"
                        aria-label="Search"
                        prop:value=move || search_text.get()
                        on:input=move |ev| search_text.set(event_target_value(&ev))
                    />
                    <button type="submit" class="browse-filters__button">
                        "Search"
                    </button>
                </form>
                <select
                    class="browse-filters__select"
                    aria-label="Subject"
                    prop:value=move || draft.with(|d| d.subject.clone().unwrap_or_else(|| "all".to_owned()))
                    on:change=on_subject
                >
                    <option value="all">"All subjects"</option>
                    {BOOK_SUBJECTS
                        .iter()
                        .map(|subject| view! { <option value=*subject>{*subject}</option> })
                        .collect_view()}
                </select>
                <select
                    class="browse-filters__select"
                    aria-label="Status"
                    prop:value=move || draft.with(|d| d.status.map_or("all", |s| s.as_str()).to_owned())
                    on:change=on_status
                >
                    <option value="all">"Any status"</option>
                    <option value="AVAILABLE">"Available"</option>
                    <option value="BORROWED">"Borrowed"</option>
                </select>
            </div>
            <Show when=move || !first_load() fallback=|| view! { <div class="spinner"></div> }>
                <Show
                    when=move || !is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <h3>"No books available"</h3>
                                <p>{move || list.with(|l| empty_message(&l.filters))}</p>
                            </div>
                        }
                    }
                >
                    <div class="book-grid" class:book-grid--loading=move || list.with(|l| l.loading)>
                        <For
                            each=move || list.with(|l| l.items.clone())
                            key=|book| book.id
                            children=|book| view! { <BookCard book=book/> }
                        />
                    </div>
                    <div class="browse-footer">
                        <span class="browse-footer__count">
                            {move || list.with(|l| showing_label(l.items.len(), l.total_elements))}
                        </span>
                        <Pagination
                            page=Signal::derive(move || list.with(|l| l.page))
                            total_pages=Signal::derive(move || list.with(|l| l.total_pages))
                            busy=Signal::derive(move || list.with(|l| l.loading))
                            on_page=on_page
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
