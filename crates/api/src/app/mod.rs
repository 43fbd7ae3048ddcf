//! HTTP API application wiring (Axum router).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use axum::{middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let routes = Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .nest("/clean", routes::clean::router())
        .fallback(routes::system::not_found);

    with_service_layers(routes)
}

/// Wrap a router in the request-id/logging middleware and the global panic handler.
pub fn with_service_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(middleware::request_context))
            .layer(CatchPanicLayer::custom(errors::panic_to_response)),
    )
}
