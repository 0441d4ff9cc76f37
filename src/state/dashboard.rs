//! Owner dashboard view model: sorting, statistics and row actions.
//!
//! DESIGN
//! ======
//! The dashboard mutates its listings only after the server confirms an
//! action. Each `finish_*` function takes the action result, patches the list
//! on success, and pushes exactly one notice either way, so a failed delete or
//! status change leaves the list untouched and triggers no refetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::cmp::Reverse;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{Book, BookStatus};
use crate::state::listing::ListState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionContext;

/// Listings owned by the signed-in user; unfiltered.
pub type MyBooks = ListState<Book, ()>;

/// Drop the cached listings whenever the signed-in identity changes, so no
/// user ever sees another user's rows.
pub fn install_listing_reset(session: SessionContext, my_books: RwSignal<MyBooks>) {
    Effect::new(move |prev: Option<u64>| {
        let epoch = session.epoch();
        if epoch_changed(prev, epoch) {
            my_books.update(MyBooks::invalidate);
        }
        epoch
    });
}

/// True once the epoch moves past the one the listings were last seen under.
#[must_use]
pub fn epoch_changed(prev: Option<u64>, epoch: u64) -> bool {
    prev.is_some_and(|p| p != epoch)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Title,
    Status,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Title, Self::Status];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Title => "title",
            Self::Status => "status",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Title => "Title",
            Self::Status => "Status",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "title" => Self::Title,
            "status" => Self::Status,
            _ => Self::Newest,
        }
    }
}

/// Books in display order.
#[must_use]
pub fn sorted(books: &[Book], order: SortOrder) -> Vec<Book> {
    let mut out = books.to_vec();
    match order {
        SortOrder::Newest => out.sort_by_key(|b| Reverse(b.id)),
        SortOrder::Title => out.sort_by_cached_key(|b| b.title.to_lowercase()),
        SortOrder::Status => out.sort_by_key(|b| b.status.as_str()),
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookStats {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

#[must_use]
pub fn stats(books: &[Book]) -> BookStats {
    let available = books.iter().filter(|b| b.status == BookStatus::Available).count();
    BookStats { total: books.len(), available, borrowed: books.len() - available }
}

/// Confirmation prompt shown before deleting.
#[must_use]
pub fn delete_prompt(title: &str) -> String {
    format!("Are you sure you want to delete \"{title}\"? This action cannot be undone.")
}

/// Apply the outcome of `DELETE /books/{id}`.
pub fn finish_delete(list: &mut MyBooks, notices: &mut NoticeState, id: i64, title: &str, result: Result<(), ApiError>) {
    match result {
        Ok(()) => {
            list.remove(|b| b.id == id);
            notices.success("Book deleted", format!("\"{title}\" has been removed from your listings."));
        }
        Err(err) => {
            notices.report(&err, "Failed to delete book. Please try again.");
        }
    }
}

/// Apply the outcome of `PUT /books/{id}/status`.
pub fn finish_status_change(
    list: &mut MyBooks,
    notices: &mut NoticeState,
    id: i64,
    title: &str,
    status: BookStatus,
    result: Result<(), ApiError>,
) {
    match result {
        Ok(()) => {
            list.update(|b| b.id == id, |b| b.status = status);
            notices.success(
                "Status updated",
                format!("\"{title}\" is now {}.", status.label().to_lowercase()),
            );
        }
        Err(err) => {
            notices.report(&err, "Failed to update book status. Please try again.");
        }
    }
}
