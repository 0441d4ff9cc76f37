use super::*;
use crate::test_support::catalog_page_json;
use serde_json::json;

// =============================================================
// Outgoing transform
// =============================================================

#[test]
fn bearer_header_present_only_with_credential() {
    assert_eq!(bearer_header(Some("a.b.c")).as_deref(), Some("Bearer a.b.c"));
    assert_eq!(bearer_header(Some("   ")), None);
    assert_eq!(bearer_header(None), None);
}

// =============================================================
// Incoming transform
// =============================================================

#[test]
fn unauthorized_status_maps_to_global_variant() {
    assert_eq!(error_from_response(401, "", false), ApiError::Unauthorized);
    assert!(error_from_response(401, "", false).is_unauthorized());
}

#[test]
fn unauthorized_on_auth_endpoints_keeps_server_message() {
    assert_eq!(
        error_from_response(401, "Invalid email or password", true),
        ApiError::Status { status: 401, message: "Invalid email or password".to_owned() }
    );
}

#[test]
fn error_message_prefers_json_message_field() {
    let err = error_from_response(400, r#"{"message":"Email is already in use","status":400}"#, false);
    assert_eq!(err.to_string(), "Email is already in use");
}

#[test]
fn error_message_reads_plain_and_json_string_bodies() {
    assert_eq!(message_from_body("Passwords do not match").as_deref(), Some("Passwords do not match"));
    assert_eq!(message_from_body(r#""Unauthorized""#).as_deref(), Some("Unauthorized"));
    assert_eq!(message_from_body(r#"{"error":"Forbidden"}"#).as_deref(), Some("Forbidden"));
}

#[test]
fn error_message_falls_back_for_empty_or_html_bodies() {
    assert_eq!(message_from_body("  "), None);
    assert_eq!(message_from_body("<html><body>502</body></html>"), None);
    assert_eq!(message_from_body(r#"{"status":500}"#), None);
    assert_eq!(error_from_response(500, "", false).to_string(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn user_message_shows_server_text_or_caller_fallback() {
    let server = error_from_response(400, "Email is already in use", true);
    assert_eq!(server.user_message("Registration failed"), "Email is already in use");
    assert_eq!(error_from_response(500, "", false).user_message("Try again."), "Try again.");
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Try again."), "Try again.");
}

#[test]
fn transport_error_uses_fallback_for_blank_message() {
    assert_eq!(transport_error("NetworkError"), ApiError::Transport("NetworkError".to_owned()));
    assert_eq!(transport_error(""), ApiError::Transport(FALLBACK_ERROR_MESSAGE.to_owned()));
}

#[test]
fn parse_page_validates_envelope() {
    let page: Page<Book> = parse_page(&catalog_page_json(30, 1, 12).to_string()).unwrap();
    assert_eq!(page.number, 1);
    assert_eq!(page.content.len(), 12);

    let bad = json!({ "content": [], "number": 4, "totalPages": 1, "totalElements": 3, "size": 12 }).to_string();
    assert!(matches!(parse_page::<Book>(&bad), Err(ApiError::Decode(_))));
    assert!(matches!(parse_page::<Book>("not json"), Err(ApiError::Decode(_))));
}

// =============================================================
// Request shapes
// =============================================================

#[test]
fn auth_requests_are_exempt_from_global_401_handling() {
    let login = login_request(&LoginRequest { email: "a@b.co".to_owned(), password: "pw".to_owned() }).unwrap();
    assert_eq!(login.method, Method::Post);
    assert_eq!(login.path, "/auth/login");
    assert!(login.auth_exempt);
    assert_eq!(login.body, Some(json!({ "email": "a@b.co", "password": "pw" })));

    let register = register_request(&RegisterRequest {
        email: "a@b.co".to_owned(),
        name: "Ada".to_owned(),
        password: "password1".to_owned(),
        confirm_password: "password1".to_owned(),
    })
    .unwrap();
    assert_eq!(register.path, "/auth/register");
    assert!(register.auth_exempt);
}

#[test]
fn list_books_request_includes_only_active_filters() {
    let req = list_books_request(&BookFilters::default(), 0, 12);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/books");
    assert_eq!(req.query, vec![("page", "0".to_owned()), ("size", "12".to_owned())]);
    assert!(!req.auth_exempt);

    let filters = BookFilters {
        search: Some("knuth".to_owned()),
        subject: Some("Computer Science".to_owned()),
        status: Some(BookStatus::Borrowed),
    };
    let req = list_books_request(&filters, 2, 12);
    assert_eq!(
        req.query,
        vec![
            ("search", "knuth".to_owned()),
            ("subject", "Computer Science".to_owned()),
            ("status", "BORROWED".to_owned()),
            ("page", "2".to_owned()),
            ("size", "12".to_owned()),
        ]
    );
}

#[test]
fn book_mutation_requests_target_expected_paths() {
    let fields = BookFields {
        title: "Dune".to_owned(),
        author: "Herbert".to_owned(),
        subject: "Literature".to_owned(),
        description: None,
        contact_email: "o@example.com".to_owned(),
        owner_id: Some(3),
    };
    let create = create_book_request(&fields).unwrap();
    assert_eq!((create.method, create.path.as_str()), (Method::Post, "/books"));
    assert_eq!(create.body.as_ref().and_then(|b| b.get("ownerId")), Some(&json!(3)));

    let update = update_book_request(8, &fields).unwrap();
    assert_eq!((update.method, update.path.as_str()), (Method::Put, "/books/8"));

    let status = set_book_status_request(8, BookStatus::Borrowed);
    assert_eq!((status.method, status.path.as_str()), (Method::Put, "/books/8/status"));
    assert_eq!(status.body, Some(json!({ "status": "BORROWED" })));

    let delete = delete_book_request(8);
    assert_eq!((delete.method, delete.path.as_str()), (Method::Delete, "/books/8"));
    assert_eq!(delete.body, None);
}

#[test]
fn list_user_books_request_pages_by_owner() {
    let req = list_user_books_request(5, 0, 100);
    assert_eq!(req.path, "/users/5/books");
    assert_eq!(req.query, vec![("page", "0".to_owned()), ("size", "100".to_owned())]);
}
