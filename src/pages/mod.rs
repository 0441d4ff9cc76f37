//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, fetch tickets,
//! navigation) and delegates rendering details to `components`.

pub mod book_form;
pub mod browse;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;
