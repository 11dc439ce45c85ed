//! HTTP application wiring (Axum router + store wiring).
//!
//! - `routes/`: HTTP handlers, one file per area
//! - `dto.rs`: request bodies and query strings
//! - `errors.rs`: consistent `{"error": ...}` responses
//! - `extract.rs`: JSON body extractor whose rejections use that shape

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use ledger_accounts::AccountStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Handle to the account store shared by every handler.
pub type SharedStore = Arc<dyn AccountStore>;

/// Build the full HTTP router around an explicitly owned store.
pub fn build_app(store: SharedStore) -> Router {
    let identity = middleware::IdentityState {
        store: store.clone(),
    };

    // Routes that require the caller's `cpf` header.
    let identified = routes::identified_router().route_layer(
        axum::middleware::from_fn_with_state(identity, middleware::identity_middleware),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(identified)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(store)),
        )
}
