//! API route configuration.
//!
//! Every endpoint is public; there is no authentication layer.

use crate::api::handlers::classify_number_handler;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /classify-number` - Classify an integer by arithmetic properties
///
/// Only `GET` is routed; other methods on the path are answered with
/// `405 Method Not Allowed`.
pub fn public_routes() -> Router {
    Router::new().route("/classify-number", get(classify_number_handler))
}
