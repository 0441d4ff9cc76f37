//! Transient user-visible notices (toasts).
//!
//! DESIGN
//! ======
//! Every failure path and every confirmed action reports through this queue,
//! so "exactly one notice per event" is checked in one place: callers push
//! once, the stack renders, and entries expire or are dismissed by id.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::net::api::ApiError;

/// Maximum number of notices kept on screen; the oldest is dropped first.
pub const NOTICE_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.items.len() >= NOTICE_LIMIT {
            self.items.remove(0);
        }
        self.items.push(Notice { id, kind, title: title.into(), message: message.into() });
        id
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, title, message)
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, title, message)
    }

    /// One error notice for a failed request. A 401 was already reported by
    /// the session, so it adds nothing here.
    pub fn report(&mut self, err: &ApiError, fallback: &str) -> Option<u64> {
        if err.is_unauthorized() {
            return None;
        }
        Some(self.error("Error", err.user_message(fallback)))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
