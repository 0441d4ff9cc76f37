//! Paginated, filterable list state shared by the browse and dashboard views.
//!
//! DESIGN
//! ======
//! Every fetch is issued through a [`FetchTicket`] stamped with the list's
//! current generation. Starting a new fetch bumps the generation, so a slow
//! response for an older filter or page is recognised as stale and dropped
//! no matter which response arrives first. The filters and page a ticket asks
//! for are only committed once its response is applied, so a failed request
//! leaves the list describing the rows it still shows.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::api::ApiError;
use crate::net::types::Page;

/// Proof that a fetch was requested, carrying what to ask the server for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket<F> {
    pub generation: u64,
    pub filters: F,
    pub page: u32,
    pub size: u32,
}

/// Result of offering a response to the list.
#[derive(Debug, PartialEq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request superseded this one; nothing changed.
    Stale,
    /// The latest request failed; previous items are kept.
    Failed(ApiError),
}

#[derive(Clone, Debug)]
pub struct ListState<T, F> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub page_size: u32,
    pub filters: F,
    pub loading: bool,
    /// A response has been applied since creation or the last invalidation.
    pub loaded: bool,
    generation: u64,
}

impl<T, F: Default> ListState<T, F> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            total_pages: 0,
            total_elements: 0,
            page_size,
            filters: F::default(),
            loading: false,
            loaded: false,
            generation: 0,
        }
    }
}

impl<T, F: Clone + PartialEq> ListState<T, F> {
    /// Fetch the first page under `filters`.
    pub fn set_filters(&mut self, filters: F) -> FetchTicket<F> {
        self.issue(filters, 0)
    }

    /// Move to `page` when it exists.
    pub fn goto_page(&mut self, page: u32) -> Option<FetchTicket<F>> {
        (page < self.total_pages).then(|| self.issue(self.filters.clone(), page))
    }

    /// Refetch the current page with the current filters.
    pub fn refresh(&mut self) -> FetchTicket<F> {
        self.issue(self.filters.clone(), self.page)
    }

    fn issue(&mut self, filters: F, page: u32) -> FetchTicket<F> {
        self.generation += 1;
        self.loading = true;
        FetchTicket { generation: self.generation, filters, page, size: self.page_size }
    }

    /// Offer a server response for `ticket`.
    pub fn apply(&mut self, ticket: &FetchTicket<F>, result: Result<Page<T>, ApiError>) -> ApplyOutcome {
        if ticket.generation != self.generation {
            return ApplyOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.filters = ticket.filters.clone();
                self.items = page.content;
                self.page = page.number;
                self.total_pages = page.total_pages;
                self.total_elements = page.total_elements;
                if page.size > 0 {
                    self.page_size = page.size;
                }
                self.loaded = true;
                ApplyOutcome::Applied
            }
            Err(err) => ApplyOutcome::Failed(err),
        }
    }

    /// Forget loaded items and orphan any in-flight request.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.page = 0;
        self.total_pages = 0;
        self.total_elements = 0;
        self.loading = false;
        self.loaded = false;
    }

    /// Drop items matching `pred` after a confirmed server-side delete.
    pub fn remove(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        let removed = before - self.items.len();
        self.total_elements = self.total_elements.saturating_sub(removed as u64);
        removed
    }

    /// Patch items matching `pred` after a confirmed server-side update.
    pub fn update(&mut self, pred: impl Fn(&T) -> bool, mut patch: impl FnMut(&mut T)) -> usize {
        let mut touched = 0;
        for item in &mut self.items {
            if pred(&*item) {
                patch(item);
                touched += 1;
            }
        }
        touched
    }
}
