//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*` - REST API (public, CORS-open)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - All origins permitted (open, public API)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, trace};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The router carries no state: classification is a pure function of the
/// request, so handlers need nothing injected.
pub fn app_router() -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api::routes::public_routes())
        .layer(cors::layer())
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
