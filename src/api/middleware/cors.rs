//! Permissive CORS middleware.

use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer that permits every origin.
///
/// The classification API is a public, credential-free endpoint, so the
/// layer allows any origin, any method, and any request header. Responses
/// carry `Access-Control-Allow-Origin: *`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(cors::layer());
/// ```
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
