//! Wire types and the HTTP client for the analysis backend.

pub mod api;
pub mod types;
