//! HTTP request handlers for API endpoints.

pub mod classify;

pub use classify::classify_number_handler;
