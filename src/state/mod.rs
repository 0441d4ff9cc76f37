//! Application state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module keeps its transitions as plain methods on plain structs so
//! they run under native unit tests; the reactive wrappers only hold those
//! structs in signals.

pub mod dashboard;
pub mod listing;
pub mod notice;
pub mod session;
