#![allow(dead_code)]

use axum::Router;
use number_classifier::api::middleware::cors;
use number_classifier::api::routes::public_routes;

pub fn create_test_app() -> Router {
    Router::new()
        .nest("/api", public_routes())
        .layer(cors::layer())
}
