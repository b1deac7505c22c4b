//! # Number Classifier
//!
//! A tiny, stateless HTTP service that classifies an integer by its
//! arithmetic properties, built with Axum.
//!
//! ## Architecture
//!
//! This crate keeps a clear layer separation even though the service is
//! small:
//!
//! - **Domain Layer** ([`domain`]) - Pure classification functions
//! - **API Layer** ([`api`]) - The REST handler, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Lenient number parsing
//!
//! ## The Endpoint
//!
//! `GET /api/classify-number?number=153` returns
//!
//! ```json
//! {
//!   "number": 153,
//!   "is_prime": false,
//!   "is_perfect": false,
//!   "properties": ["odd", "armstrong"],
//!   "digit_sum": 9,
//!   "fun_fact": "153 is an interesting number!"
//! }
//! ```
//!
//! Missing or unparsable input yields `400` with
//! `{"number": "<raw input>", "error": true}`.
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional
//! export LISTEN="0.0.0.0:8000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used items to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::classification::{
        Parity, digit_sum, is_armstrong, is_perfect, is_prime,
    };
    pub use crate::error::AppError;
    pub use crate::utils::number_parser::parse_number;
}
