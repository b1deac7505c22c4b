//! HTTP middleware for request processing.
//!
//! Provides CORS and observability layers. There is no authentication or
//! rate limiting: the API is open by design.

pub mod cors;
pub mod trace;
