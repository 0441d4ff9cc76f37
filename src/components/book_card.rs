//! Card presenting one catalog listing.
//!
//! DESIGN
//! ======
//! Browse renders read-only cards; the dashboard passes owner actions, which
//! appear as a footer with edit, status toggle and delete controls.

use leptos::prelude::*;

use crate::net::types::{Book, BookStatus};
use crate::util::route::edit_book_path;

fn status_class(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Available => "book-card__status--available",
        BookStatus::Borrowed => "book-card__status--borrowed",
    }
}

/// Owner controls for a card on the dashboard.
#[derive(Clone, Copy)]
pub struct OwnerActions {
    pub on_toggle: Callback<Book>,
    pub on_delete: Callback<Book>,
    /// Whether this card's row action is awaiting the server.
    pub busy: Signal<bool>,
}

#[component]
pub fn BookCard(book: Book, #[prop(optional)] actions: Option<OwnerActions>) -> impl IntoView {
    let status = book.status;
    let mailto = format!("mailto:{}?subject={}", book.contact_email, urlencoding::encode(&book.title));
    let description = book.description.clone();

    let footer = actions.map(|actions| {
        let edit_href = edit_book_path(book.id);
        let toggle_book = book.clone();
        let delete_book = book.clone();
        let toggle_label = match status.toggled() {
            BookStatus::Available => "Mark available",
            BookStatus::Borrowed => "Mark borrowed",
        };
        view! {
            <div class="book-card__actions">
                <a href=edit_href class="book-card__action">
                    "Edit"
                </a>
                <button
                    class="book-card__action"
                    disabled=move || actions.busy.get()
                    on:click=move |_| actions.on_toggle.run(toggle_book.clone())
                >
                    {toggle_label}
                </button>
                <button
                    class="book-card__action book-card__action--danger"
                    disabled=move || actions.busy.get()
                    on:click=move |_| actions.on_delete.run(delete_book.clone())
                >
                    "Delete"
                </button>
            </div>
        }
    });

    view! {
        <article class="book-card">
            <header class="book-card__header">
                <h3 class="book-card__title">{book.title}</h3>
                <span class=format!("book-card__status {}", status_class(status))>{status.label()}</span>
            </header>
            <p class="book-card__author">"by " {book.author}</p>
            <p class="book-card__subject">{book.subject}</p>
            {description.map(|d| view! { <p class="book-card__description">{d}</p> })}
            <a class="book-card__contact" href=mailto>
                {book.contact_email}
            </a>
            {footer}
        </article>
    }
}
