//! Networking modules for the Book Swap REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gateway every view calls through, and `types` defines the
//! wire schema it speaks.

pub mod api;
pub mod types;
