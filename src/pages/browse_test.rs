use super::*;
use crate::net::api::parse_page;
use crate::net::types::BookStatus;
use crate::test_support::catalog_page_json;

fn page_of(total: usize, page: usize, size: usize) -> crate::net::types::Page<Book> {
    parse_page(&catalog_page_json(total, page, size).to_string()).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}

#[test]
fn browsing_thirty_books_by_twelve_walks_three_pages() {
    let mut list = CatalogList::new(12);
    let ticket = list.refresh();
    assert_eq!(list.apply(&ticket, Ok(page_of(30, 0, 12))), ApplyOutcome::Applied);
    assert_eq!(showing_label(list.items.len(), list.total_elements), "Showing 12 of 30 books");

    let last = list.goto_page(2).unwrap_or_else(|| panic!("page 2 should exist"));
    list.apply(&last, Ok(page_of(30, 2, 12)));
    assert_eq!(list.items.len(), 6);
    assert!(list.goto_page(3).is_none());
}

#[test]
fn filter_change_supersedes_in_flight_page() {
    let mut list = CatalogList::new(12);
    let first = list.refresh();
    list.apply(&first, Ok(page_of(30, 0, 12)));

    let paging = list.goto_page(1).unwrap_or_else(|| panic!("page 1 should exist"));
    let filtered = list.set_filters(BookFilters::default().with_status("BORROWED"));
    assert_eq!(filtered.filters.status, Some(BookStatus::Borrowed));
    assert_eq!(filtered.page, 0);

    assert_eq!(list.apply(&paging, Ok(page_of(30, 1, 12))), ApplyOutcome::Stale);
    assert_eq!(list.page, 0);
}

#[test]
fn empty_message_depends_on_filters() {
    assert_eq!(empty_message(&BookFilters::default()), "Check back later for new additions to our library.");
    let filtered = BookFilters::default().with_subject("Physics");
    assert!(empty_message(&filtered).starts_with("No books match"));
    let searched = BookFilters::default().with_search("dune");
    assert!(empty_message(&searched).starts_with("No books match"));
}

#[test]
fn search_reaches_the_ticket_and_commits_with_the_response() {
    let mut list = CatalogList::new(12);
    let first = list.refresh();
    list.apply(&first, Ok(page_of(30, 0, 12)));

    let searched = list.filters.clone().with_search("Book 1");
    let ticket = list.set_filters(searched);
    assert_eq!(ticket.filters.search.as_deref(), Some("Book 1"));
    assert_eq!(list.filters.search, None);

    list.apply(&ticket, Ok(page_of(3, 0, 12)));
    assert_eq!(list.filters.search.as_deref(), Some("Book 1"));
    assert_eq!(list.total_elements, 3);
}
