use super::*;

#[test]
fn showing_label_pluralizes() {
    assert_eq!(showing_label(12, 30), "Showing 12 of 30 books");
    assert_eq!(showing_label(1, 1), "Showing 1 of 1 book");
    assert_eq!(showing_label(0, 0), "Showing 0 of 0 books");
}

#[test]
fn page_label_is_one_based() {
    assert_eq!(page_label(0, 3).as_deref(), Some("Page 1 of 3"));
    assert_eq!(page_label(2, 3).as_deref(), Some("Page 3 of 3"));
}

#[test]
fn page_label_hidden_for_single_page() {
    assert_eq!(page_label(0, 1), None);
    assert_eq!(page_label(0, 0), None);
}

#[test]
fn pager_bounds_follow_page_and_total() {
    assert!(!can_go_back(0));
    assert!(can_go_back(2));
    assert!(can_go_forward(0, 3));
    assert!(!can_go_forward(2, 3));
    assert!(!can_go_forward(0, 0));
}
