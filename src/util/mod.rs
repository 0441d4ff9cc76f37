//! Browser-agnostic helpers: credential decoding, persistence, routing rules.

pub mod auth;
pub mod clock;
pub mod route;
pub mod storage;
pub mod token;
