//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` holds the stats
//! registry handle and the process identity the monitoring formatter reports
//! under.
//!
//! The state is designed to be cheaply cloneable (using `Arc` internally
//! where needed) so it can be passed efficiently to each request handler
//! without expensive copying of resources.

use crate::domain::{ProcessIdentity, RegistryPtr};

/// Shared application state passed to all Axum handlers.
///
/// Built once at startup, attached to the router via `.with_state()`, and
/// cloned by Axum for each incoming request. Handlers only read from it; all
/// per-request state lives inside the handler call and is released when the
/// call returns.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Read-only handle to the process-wide stats registry.
    ///
    /// The registry synchronizes itself; concurrent requests read it freely.
    registry: RegistryPtr,

    /// Reporting identity (advertised host, service port, role name).
    ///
    /// Sourced from configuration exactly once at startup and passed into
    /// the monitoring formatter as a value, never read from globals.
    identity: ProcessIdentity,
}

impl AppState {
    // ---

    pub fn new(registry: RegistryPtr, identity: ProcessIdentity) -> Self {
        AppState { registry, identity }
    }

    /// Get a reference to the stats registry.
    pub(crate) fn registry(&self) -> &RegistryPtr {
        // ---
        &self.registry
    }

    /// Get the process identity used for monitoring output.
    pub(crate) fn identity(&self) -> &ProcessIdentity {
        // ---
        &self.identity
    }
}
