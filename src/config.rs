// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
///
/// Missing configuration is treated as a deployment error,
/// not a recoverable runtime condition.
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All required configuration is validated eagerly during initialization.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub identity: identity::IdentityConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            identity: identity::IdentityConfig::from_env()?,
        })
    }
}

// ============================================================
// Reporting identity configuration
// ============================================================

mod identity {
    // ---
    use super::*;

    /// Reporting-identity configuration derived from environment variables.
    ///
    /// These values name this process toward the push-monitoring pipeline:
    /// the advertised host, the advertised service port, and the role the
    /// process plays in the cluster.
    #[derive(Debug, Clone)]
    pub struct IdentityConfig {
        /// Advertised IP or hostname. Unset or empty means "resolve the
        /// machine hostname at format time".
        pub local_ip: Option<String>,

        /// Advertised service port. Defaults to 19779.
        pub port: u16,

        /// Role name of this process (e.g. `graphd`).
        pub role: String,
    }

    impl IdentityConfig {
        /// Builds an [`IdentityConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if required configuration is missing.
        /// Startup will fail fast rather than continuing with incomplete
        /// or invalid configuration.
        pub fn from_env() -> Result<Self> {
            // ---
            let role = required_env!("STATS_ROLE");
            let port = optional_env_parse!("STATS_PORT", u16, 19779);

            // An explicitly empty STATS_LOCAL_IP behaves like an unset one.
            let local_ip = std::env::var("STATS_LOCAL_IP")
                .ok()
                .filter(|ip| !ip.is_empty());

            Ok(Self {
                local_ip,
                port,
                role,
            })
        }
    }
}
pub use identity::IdentityConfig;

// ============================================================
// Tests
// ============================================================
