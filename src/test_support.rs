//! Shared fixtures for unit tests.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::{Book, BookStatus};

pub const NOW_MS: i64 = 1_700_000_000_000;
pub const HOUR_SECS: i64 = 3_600;

/// Build an unsigned credential around an arbitrary JSON payload.
pub fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

/// Credential for `sub`/`id` expiring at `exp` (epoch seconds).
pub fn token_for(sub: &str, id: i64, exp: i64) -> String {
    token_with_payload(&serde_json::json!({ "sub": sub, "id": id, "exp": exp, "iat": exp - HOUR_SECS }))
}

pub fn valid_token(sub: &str, id: i64) -> String {
    token_for(sub, id, NOW_MS / 1000 + HOUR_SECS)
}

pub fn expired_token(sub: &str, id: i64) -> String {
    token_for(sub, id, NOW_MS / 1000 - HOUR_SECS)
}

pub fn book(id: i64, title: &str, status: BookStatus) -> Book {
    Book {
        id,
        title: title.to_owned(),
        author: format!("Author {id}"),
        subject: "Mathematics".to_owned(),
        description: None,
        contact_email: "owner@example.com".to_owned(),
        status,
        owner_id: Some(7),
    }
}

/// Serve one page of a `total`-book catalog shaped like the server's page
/// envelope, newest first.
pub fn catalog_page_json(total: usize, page: usize, size: usize) -> serde_json::Value {
    let books: Vec<serde_json::Value> = (1..=total)
        .rev()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Book {id}"),
                "author": format!("Author {id}"),
                "subject": if id % 2 == 0 { "Physics" } else { "History" },
                "description": null,
                "contactEmail": "owner@example.com",
                "status": if id % 3 == 0 { "BORROWED" } else { "AVAILABLE" },
                "owner": { "id": 7, "email": "owner@example.com" }
            })
        })
        .collect();
    let content: Vec<serde_json::Value> = books.into_iter().skip(page * size).take(size).collect();
    serde_json::json!({
        "content": content,
        "number": page,
        "size": size,
        "totalElements": total,
        "totalPages": total.div_ceil(size),
        "first": page == 0,
        "last": (page + 1) * size >= total
    })
}
