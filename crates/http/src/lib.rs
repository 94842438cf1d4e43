//! HTTP API server for plant-catalog.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod blocking;
mod handlers;
mod query_types;
mod response_types;
#[cfg(test)]
mod tests;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use plant_catalog_service::{AdminService, CatalogService};
use plant_catalog_storage::Storage;

pub use api_error::ApiError;
pub use response_types::{ActionEntry, ActionsResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Listing and detail lookups
    pub catalog_service: Arc<CatalogService>,
    /// Registered bulk actions
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    /// Builds both services over one storage handle with the default registry.
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(Arc::clone(&storage))),
            admin_service: Arc::new(AdminService::new(storage)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/plants", get(handlers::plants::list_plants))
        .route("/api/plants/{id}", get(handlers::plants::get_plant))
        .route("/api/links", get(handlers::catalog::list_links))
        .route("/api/nurseries", get(handlers::catalog::list_nurseries))
        .route("/api/schema", get(handlers::catalog::schema_status))
        .route("/api/admin/actions", get(handlers::admin::list_actions))
        .route("/api/admin/{entity}/{action}", post(handlers::admin::run_action))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
