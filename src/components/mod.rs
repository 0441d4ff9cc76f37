//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome (header, notices, pagination) and
//! book presentation while reading shared state from Leptos context.

pub mod book_card;
pub mod header;
pub mod notice_stack;
pub mod pagination;
pub mod route_gate;
