//! REST gateway for the Book Swap API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to [`ApiError::Unavailable`] since the
//! endpoints are only reachable from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! All requests pass through [`ApiClient::send`], the single place that
//! attaches the bearer credential and the single place that reacts to 401:
//! the session is cleared and the router is asked to show the login view.
//! Request shapes are built by pure functions so they can be checked without
//! a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success response becomes an [`ApiError`] carrying a readable
//! message: the body's `message`, a plain-text body, the transport error, or
//! a generic fallback, in that order.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{AuthResponse, Book, BookFields, BookFilters, BookStatus, LoginRequest, Page, PageEnvelope, RegisterRequest};
use crate::config::ClientConfig;
use crate::state::session::SessionContext;

pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("unexpected response from server: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// A 401 already handled globally (session cleared, login shown); callers
    /// must not raise a second notice for it.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Server-provided message when there is one worth showing, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } if message != FALLBACK_ERROR_MESSAGE => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request before transport: path relative to the API root.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    /// 401 means "bad credentials" here, not "session gone".
    pub auth_exempt: bool,
}

impl RequestSpec {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, auth_exempt: false }
    }

    fn with_body<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }

    fn with_page(mut self, page: u32, size: u32) -> Self {
        self.query.push(("page", page.to_string()));
        self.query.push(("size", size.to_string()));
        self
    }
}

/// `Authorization` header value for a persisted credential.
#[must_use]
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(str::trim).filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Human-readable message carried by an error response body.
#[must_use]
pub fn message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let message = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        Ok(Value::String(text)) => Some(text),
        Ok(_) => None,
        // Error pages are not messages.
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_owned()),
    };
    message.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty())
}

/// Normalize a non-success HTTP response.
#[must_use]
pub fn error_from_response(status: u16, body: &str, auth_exempt: bool) -> ApiError {
    if status == 401 && !auth_exempt {
        return ApiError::Unauthorized;
    }
    ApiError::Status { status, message: message_from_body(body).unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned()) }
}

/// Normalize a failure that never produced a response.
#[must_use]
pub fn transport_error(message: &str) -> ApiError {
    let message = message.trim();
    if message.is_empty() {
        ApiError::Transport(FALLBACK_ERROR_MESSAGE.to_owned())
    } else {
        ApiError::Transport(message.to_owned())
    }
}

/// Parse and validate a page envelope body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for malformed JSON or inconsistent counters.
pub fn parse_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, ApiError> {
    let raw: PageEnvelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Page::try_from(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// # Errors
///
/// Fails only if the payload cannot be encoded.
pub fn register_request(req: &RegisterRequest) -> Result<RequestSpec, ApiError> {
    let mut spec = RequestSpec::new(Method::Post, "/auth/register").with_body(req)?;
    spec.auth_exempt = true;
    Ok(spec)
}

/// # Errors
///
/// Fails only if the payload cannot be encoded.
pub fn login_request(req: &LoginRequest) -> Result<RequestSpec, ApiError> {
    let mut spec = RequestSpec::new(Method::Post, "/auth/login").with_body(req)?;
    spec.auth_exempt = true;
    Ok(spec)
}

#[must_use]
pub fn list_books_request(filters: &BookFilters, page: u32, size: u32) -> RequestSpec {
    let mut spec = RequestSpec::new(Method::Get, "/books");
    if let Some(search) = &filters.search {
        spec.query.push(("search", search.clone()));
    }
    if let Some(subject) = &filters.subject {
        spec.query.push(("subject", subject.clone()));
    }
    if let Some(status) = filters.status {
        spec.query.push(("status", status.as_str().to_owned()));
    }
    spec.with_page(page, size)
}

/// # Errors
///
/// Fails only if the payload cannot be encoded.
pub fn create_book_request(fields: &BookFields) -> Result<RequestSpec, ApiError> {
    RequestSpec::new(Method::Post, "/books").with_body(fields)
}

/// # Errors
///
/// Fails only if the payload cannot be encoded.
pub fn update_book_request(id: i64, fields: &BookFields) -> Result<RequestSpec, ApiError> {
    RequestSpec::new(Method::Put, format!("/books/{id}")).with_body(fields)
}

#[must_use]
pub fn set_book_status_request(id: i64, status: BookStatus) -> RequestSpec {
    let mut spec = RequestSpec::new(Method::Put, format!("/books/{id}/status"));
    spec.body = Some(serde_json::json!({ "status": status.as_str() }));
    spec
}

#[must_use]
pub fn delete_book_request(id: i64) -> RequestSpec {
    RequestSpec::new(Method::Delete, format!("/books/{id}"))
}

#[must_use]
pub fn list_user_books_request(user_id: i64, page: u32, size: u32) -> RequestSpec {
    RequestSpec::new(Method::Get, format!("/users/{user_id}/books")).with_page(page, size)
}

/// Handle to the gateway, provided through Leptos context.
#[derive(Clone, Copy)]
pub struct ApiClient {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    config: StoredValue<ClientConfig>,
    session: SessionContext,
    login_requested: RwSignal<bool>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionContext) -> Self {
        Self { config: StoredValue::new(config), session, login_requested: RwSignal::new(false) }
    }

    /// Whether the 401 handler asked for the login view (tracked); the router
    /// shell consumes it.
    pub fn login_requested(self) -> bool {
        self.login_requested.get()
    }

    pub fn clear_login_request(self) {
        self.login_requested.set(false);
    }

    /// # Errors
    ///
    /// See [`ApiError`]; a 401 carries the server's message.
    pub async fn register(self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = self.send(register_request(req)?).await?;
        decode_json(&body)
    }

    /// # Errors
    ///
    /// See [`ApiError`]; a 401 carries the server's message.
    pub async fn login(self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = self.send(login_request(req)?).await?;
        decode_json(&body)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_books(self, filters: &BookFilters, page: u32, size: u32) -> Result<Page<Book>, ApiError> {
        let body = self.send(list_books_request(filters, page, size)).await?;
        parse_page(&body)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_book(self, fields: &BookFields) -> Result<(), ApiError> {
        self.send(create_book_request(fields)?).await.map(drop)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_book(self, id: i64, fields: &BookFields) -> Result<(), ApiError> {
        self.send(update_book_request(id, fields)?).await.map(drop)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn set_book_status(self, id: i64, status: BookStatus) -> Result<(), ApiError> {
        self.send(set_book_status_request(id, status)).await.map(drop)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_book(self, id: i64) -> Result<(), ApiError> {
        self.send(delete_book_request(id)).await.map(drop)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_user_books(self, user_id: i64, page: u32, size: u32) -> Result<Page<Book>, ApiError> {
        let body = self.send(list_user_books_request(user_id, page, size)).await?;
        parse_page(&body)
    }

    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    fn on_unauthorized(self) {
        self.session.handle_unauthorized();
        self.login_requested.set(true);
    }

    async fn send(self, spec: RequestSpec) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.config.with_value(|c| c.endpoint(&spec.path));
            let mut builder = match spec.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if !spec.query.is_empty() {
                builder = builder.query(spec.query.iter().map(|(k, v)| (*k, v.as_str())));
            }
            if let Some(value) = bearer_header(self.session.bearer_token().as_deref()) {
                builder = builder.header("Authorization", &value);
            }
            log::debug!("api request: {} {}", spec.method.as_str(), spec.path);

            let request = match &spec.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| transport_error(&e.to_string()))?;
            let resp = request.send().await.map_err(|e| {
                leptos::logging::warn!("api transport error: {} {}: {e}", spec.method.as_str(), spec.path);
                transport_error(&e.to_string())
            })?;

            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::debug!("api response: {} {} -> {status}", spec.method.as_str(), spec.path);
            if resp.ok() {
                return Ok(text);
            }

            let err = error_from_response(status, &text, spec.auth_exempt);
            leptos::logging::warn!("api error: {} {} -> {status}: {err}", spec.method.as_str(), spec.path);
            if err.is_unauthorized() {
                self.on_unauthorized();
            }
            Err(err)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = spec;
            Err(ApiError::Unavailable)
        }
    }
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
