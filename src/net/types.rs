//! Wire DTOs for the Book Swap REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON so serde round-trips stay
//! lossless. The page envelope is deserialized into a raw shape first and only
//! becomes a [`Page`] after its counters pass validation, so list views never
//! trust an inconsistent envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Subjects offered by the add/edit form and the browse filter.
pub const BOOK_SUBJECTS: &[&str] = &[
    "Computer Science",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Engineering",
    "Economics",
    "History",
    "Literature",
    "Languages",
    "Other",
];

/// Lending status of a listed book.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl BookStatus {
    /// Wire value (`AVAILABLE` / `BORROWED`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Borrowed => "BORROWED",
        }
    }

    /// Human-readable badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Borrowed => "Borrowed",
        }
    }

    /// The status an owner toggles to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Available => Self::Borrowed,
            Self::Borrowed => Self::Available,
        }
    }

    /// Parse a wire or form value, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Some(Self::Available),
            "BORROWED" => Some(Self::Borrowed),
            _ => None,
        }
    }
}

/// A listed book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BookWire")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub subject: String,
    pub description: Option<String>,
    pub contact_email: String,
    pub status: BookStatus,
    /// Owning user; the server may send `ownerId` or an embedded `owner`.
    pub owner_id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookWire {
    id: i64,
    title: String,
    author: String,
    subject: String,
    #[serde(default)]
    description: Option<String>,
    contact_email: String,
    #[serde(default)]
    status: BookStatus,
    #[serde(default)]
    owner_id: Option<i64>,
    #[serde(default)]
    owner: Option<OwnerRef>,
}

#[derive(Deserialize)]
struct OwnerRef {
    id: i64,
}

impl From<BookWire> for Book {
    fn from(wire: BookWire) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            author: wire.author,
            subject: wire.subject,
            description: wire.description.filter(|d| !d.trim().is_empty()),
            contact_email: wire.contact_email,
            status: wire.status,
            owner_id: wire.owner_id.or(wire.owner.map(|o| o.id)),
        }
    }
}

/// Editable book fields sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}

impl BookFields {
    /// Prefill the form from an existing listing.
    #[must_use]
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            subject: book.subject.clone(),
            description: book.description.clone(),
            contact_email: book.contact_email.clone(),
            owner_id: book.owner_id,
        }
    }

    /// Trim every field and check the required ones.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form when a required field is
    /// blank or the contact email is not an address.
    pub fn validated(&self) -> Result<Self, &'static str> {
        let title = self.title.trim();
        let author = self.author.trim();
        let subject = self.subject.trim();
        let contact_email = self.contact_email.trim();
        if title.is_empty() || author.is_empty() || subject.is_empty() {
            return Err("Title, author and subject are required.");
        }
        if !looks_like_email(contact_email) {
            return Err("Enter a valid contact email.");
        }
        Ok(Self {
            title: title.to_owned(),
            author: author.to_owned(),
            subject: subject.to_owned(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            contact_email: contact_email.to_owned(),
            owner_id: self.owner_id,
        })
    }
}

/// Minimal shape check: `local@domain.tld` without whitespace.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !raw.chars().any(char::is_whitespace)
        && domain.split_once('.').is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Catalog filters for the browse view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BookFilters {
    /// Free text matched by the server against title and author.
    pub search: Option<String>,
    pub subject: Option<String>,
    pub status: Option<BookStatus>,
}

impl BookFilters {
    /// Normalize the search box; surrounding whitespace is dropped and blank
    /// text clears the search.
    #[must_use]
    pub fn with_search(mut self, raw: &str) -> Self {
        let raw = raw.trim();
        self.search = (!raw.is_empty()).then(|| raw.to_owned());
        self
    }

    /// Normalize a subject select value; blank or `all` clears the filter.
    #[must_use]
    pub fn with_subject(mut self, raw: &str) -> Self {
        let raw = raw.trim();
        self.subject = (!raw.is_empty() && !raw.eq_ignore_ascii_case("all")).then(|| raw.to_owned());
        self
    }

    /// Normalize a status select value; anything unrecognized clears the filter.
    #[must_use]
    pub fn with_status(mut self, raw: &str) -> Self {
        self.status = BookStatus::parse(raw);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.subject.is_none() && self.status.is_none()
    }
}

/// A validated zero-indexed page window over a server-side collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
}

/// Page envelope exactly as the server sends it, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    pub number: i64,
    pub total_pages: i64,
    pub total_elements: i64,
    pub size: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("page envelope field `{0}` is negative or too large")]
    OutOfRange(&'static str),
    #[error("page number {number} is outside 0..{total_pages}")]
    PageOutOfBounds { number: u32, total_pages: u32 },
    #[error("page holds {len} items but declares size {size}")]
    Overfull { len: usize, size: u32 },
    #[error("empty collection returned {0} items")]
    PhantomContent(usize),
}

impl<T> TryFrom<PageEnvelope<T>> for Page<T> {
    type Error = EnvelopeError;

    fn try_from(raw: PageEnvelope<T>) -> Result<Self, Self::Error> {
        let number = u32::try_from(raw.number).map_err(|_| EnvelopeError::OutOfRange("number"))?;
        let total_pages = u32::try_from(raw.total_pages).map_err(|_| EnvelopeError::OutOfRange("totalPages"))?;
        let total_elements =
            u64::try_from(raw.total_elements).map_err(|_| EnvelopeError::OutOfRange("totalElements"))?;
        let size = u32::try_from(raw.size).map_err(|_| EnvelopeError::OutOfRange("size"))?;

        if total_elements > 0 && number >= total_pages {
            return Err(EnvelopeError::PageOutOfBounds { number, total_pages });
        }
        if total_elements == 0 && !raw.content.is_empty() {
            return Err(EnvelopeError::PhantomContent(raw.content.len()));
        }
        if size > 0 && raw.content.len() > size as usize {
            return Err(EnvelopeError::Overfull { len: raw.content.len(), size });
        }
        Ok(Self { content: raw.content, number, total_pages, total_elements, size })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}
