//! Owner dashboard listing the signed-in user's books with row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Listings live in the app-wide
//! `MyBooks` signal, which the edit form also reads; it is loaded once per
//! identity and patched in place after confirmed status changes and deletes.

use leptos::prelude::*;

use crate::components::book_card::{BookCard, OwnerActions};
use crate::net::api::ApiClient;
use crate::net::types::Book;
use crate::state::dashboard::{MyBooks, SortOrder, delete_prompt, finish_delete, finish_status_change, sorted, stats};
use crate::state::listing::ApplyOutcome;
use crate::state::notice::NoticeState;
use crate::state::session::SessionContext;
use crate::util::route::ADD_BOOK_PATH;

/// Keep the owner's listings loaded for the current identity.
///
/// Tracks the session epoch and the list's load flags, so it reloads after an
/// identity change invalidates the list. A failed load is recorded against
/// its epoch and not retried until the identity changes again; the returned
/// signal holds that epoch.
pub(crate) fn install_my_books_loader(
    api: ApiClient,
    session: SessionContext,
    my_books: RwSignal<MyBooks>,
    notices: RwSignal<NoticeState>,
) -> RwSignal<Option<u64>> {
    let failed_epoch = RwSignal::new(None::<u64>);
    Effect::new(move || {
        let epoch = session.epoch();
        let Some(user) = session.session() else {
            return;
        };
        let idle = my_books.with(|l| !l.loaded && !l.loading);
        if !idle || failed_epoch.get_untracked() == Some(epoch) {
            return;
        }
        let Some(ticket) = my_books.try_update(MyBooks::refresh) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api.list_user_books(user.id, ticket.page, ticket.size).await;
            if let Some(ApplyOutcome::Failed(err)) = my_books.try_update(|l| l.apply(&ticket, result)) {
                leptos::logging::warn!("listing load failed for user {}: {err}", user.id);
                failed_epoch.set(Some(epoch));
                notices.update(|n| {
                    n.report(&err, "Failed to load your books. Please try again.");
                });
            }
        });
    });
    failed_epoch
}

fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let my_books = expect_context::<RwSignal<MyBooks>>();

    let sort = RwSignal::new(SortOrder::default());
    // Id of the row whose action is awaiting the server.
    let busy = RwSignal::new(None::<i64>);

    let failed_epoch = install_my_books_loader(api, session, my_books, notices);

    let on_toggle = Callback::new(move |book: Book| {
        if busy.get_untracked().is_some() {
            return;
        }
        let next = book.status.toggled();
        busy.set(Some(book.id));
        leptos::task::spawn_local(async move {
            let result = api.set_book_status(book.id, next).await;
            my_books.update(|l| notices.update(|n| finish_status_change(l, n, book.id, &book.title, next, result)));
            busy.set(None);
        });
    });

    let on_delete = Callback::new(move |book: Book| {
        if busy.get_untracked().is_some() || !confirm(&delete_prompt(&book.title)) {
            return;
        }
        busy.set(Some(book.id));
        leptos::task::spawn_local(async move {
            let result = api.delete_book(book.id).await;
            my_books.update(|l| notices.update(|n| finish_delete(l, n, book.id, &book.title, result)));
            busy.set(None);
        });
    });

    let on_sort = move |ev: leptos::ev::Event| sort.set(SortOrder::parse(&event_target_value(&ev)));

    let rows = move || my_books.with(|l| sorted(&l.items, sort.get()));
    let counts = move || my_books.with(|l| stats(&l.items));
    let first_load = move || !my_books.with(|l| l.loaded) && failed_epoch.get() != Some(session.epoch());

    view! {
        <div class="dashboard-page">
            <header class="page-header page-header--split">
                <div>
                    <h1>"My Book Dashboard"</h1>
                    <p class="page-header__subtitle">"Manage your book listings and track their status"</p>
                </div>
                <div class="page-header__actions">
                    <select class="dashboard-sort" aria-label="Sort by" on:change=on_sort>
                        {SortOrder::ALL
                            .into_iter()
                            .map(|order| {
                                view! {
                                    <option value=order.as_str() selected=move || sort.get() == order>
                                        {order.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <a href=ADD_BOOK_PATH class="button button--primary">
                        "Add New Book"
                    </a>
                </div>
            </header>

            <section class="dashboard-stats">
                <div class="stat-card">
                    <span class="stat-card__label">"Total Books"</span>
                    <span class="stat-card__value">{move || counts().total}</span>
                    <span class="stat-card__hint">"Books in your collection"</span>
                </div>
                <div class="stat-card stat-card--available">
                    <span class="stat-card__label">"Available"</span>
                    <span class="stat-card__value">{move || counts().available}</span>
                    <span class="stat-card__hint">"Ready for borrowing"</span>
                </div>
                <div class="stat-card stat-card--borrowed">
                    <span class="stat-card__label">"Borrowed"</span>
                    <span class="stat-card__value">{move || counts().borrowed}</span>
                    <span class="stat-card__hint">"Currently on loan"</span>
                </div>
            </section>

            <section class="dashboard-listings">
                <h2>"Your Book Listings"</h2>
                <Show when=move || !first_load() fallback=|| view! { <div class="spinner"></div> }>
                    <Show
                        when=move || !rows().is_empty()
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <h3>"No books yet"</h3>
                                    <p>"Start sharing by adding your first book to the collection."</p>
                                    <a href=ADD_BOOK_PATH class="button button--primary">
                                        "Add Your First Book"
                                    </a>
                                </div>
                            }
                        }
                    >
                        <div class="book-list">
                            <For
                                each=rows
                                key=|book| (book.id, book.status)
                                children=move |book| {
                                    let id = book.id;
                                    let actions = OwnerActions {
                                        on_toggle,
                                        on_delete,
                                        busy: Signal::derive(move || busy.get() == Some(id)),
                                    };
                                    view! { <BookCard book=book actions=actions/> }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
