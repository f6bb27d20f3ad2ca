//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: controller wiring (KPI source + controller)
//! - `route_table.rs`: explicit route registry built at startup
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query/response DTOs and mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod route_table;
pub mod routes;
pub mod services;

use route_table::RouteTable;
use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig, services: AppServices) -> Router {
    let jwt = Arc::new(printerp_auth::Hs256JwtValidator::new(
        config.jwt_secret.clone().into_bytes(),
    ));
    let auth_state = middleware::AuthState { jwt };

    let mut table = RouteTable::new();
    routes::bind_protected(&mut table, &services);
    for binding in table.bindings() {
        tracing::info!(
            method = %binding.method,
            path = %binding.path,
            capability = binding.capability,
            "route bound"
        );
    }

    // Protected routes: require auth + tenant context.
    let protected = table.into_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/version", get(routes::system::version))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
