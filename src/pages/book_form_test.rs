use super::*;
use crate::net::types::BookStatus;
use crate::test_support::book;

#[test]
fn new_book_fields_default_contact_to_owner() {
    let session = Session { email: "owner@example.com".to_owned(), id: 7 };
    let fields = new_book_fields(Some(&session));
    assert_eq!(fields.contact_email, "owner@example.com");
    assert_eq!(fields.owner_id, Some(7));
    assert!(fields.title.is_empty());

    assert_eq!(new_book_fields(None), BookFields::default());
}

#[test]
fn subject_options_keep_unlisted_current_value_first() {
    let listed = subject_options(BOOK_SUBJECTS[0]);
    assert_eq!(listed.len(), BOOK_SUBJECTS.len());

    let legacy = subject_options("Alchemy");
    assert_eq!(legacy.first().map(String::as_str), Some("Alchemy"));
    assert_eq!(legacy.len(), BOOK_SUBJECTS.len() + 1);

    assert_eq!(subject_options("").len(), BOOK_SUBJECTS.len());
}

#[test]
fn apply_edit_copies_fields_but_keeps_identity_and_status() {
    let mut listing = book(4, "Old title", BookStatus::Borrowed);
    let fields = BookFields {
        title: "New title".to_owned(),
        author: "New author".to_owned(),
        subject: "Physics".to_owned(),
        description: Some("Annotated".to_owned()),
        contact_email: "new@example.com".to_owned(),
        owner_id: Some(7),
    };
    apply_edit(&mut listing, &fields);
    assert_eq!(listing.title, "New title");
    assert_eq!(listing.description.as_deref(), Some("Annotated"));
    assert_eq!(listing.contact_email, "new@example.com");
    assert_eq!(listing.id, 4);
    assert_eq!(listing.status, BookStatus::Borrowed);
}
