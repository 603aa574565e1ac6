// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::routing::get;
use axum::Router;
use domain::ProcessIdentity;
use handlers::{health_check, root_handler, stats_handler};
use std::sync::atomic::Ordering;
use std::sync::Arc;

// Public exports (visible outside this module)
pub mod domain;
pub mod stats;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

pub use config::*;

// Publicly expose the infrastructure creation function
pub use infrastructure::{create_memory_registry, MemoryRegistry};

/// Build the HTTP router with a memory-backed stats registry.
pub fn create_router() -> Result<Router> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt::try_init().ok(); // ignores if already initialized

    let registry = create_memory_registry()?;

    // Counter fed by the request-counting layer below; everything else in
    // the process registers its own counters the same way.
    let served = registry.counter("num_http_requests");

    let identity = ProcessIdentity {
        local_ip: config.identity.local_ip.clone(),
        port: config.identity.port,
        role: config.identity.role.clone(),
    };

    // Build application state with all dependencies
    let app_state = AppState::new(registry, identity);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/stats", get(stats_handler))
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            let served = Arc::clone(&served);
            async move {
                served.fetch_add(1, Ordering::Relaxed);
                next.run(req).await
            }
        }))
        .with_state(app_state);

    Ok(router)
}
