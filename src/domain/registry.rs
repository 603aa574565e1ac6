use anyhow::Result;
use std::sync::Arc;

/// Read-only view of the process-wide stats registry.
///
/// The registry owns its internal synchronization; reads must be cheap,
/// in-memory, and safe under arbitrary concurrent access. This endpoint
/// never writes through this trait.
pub trait StatsRegistry: Send + Sync + 'static {
    /// All current (name, value) pairs, in the registry's enumeration order.
    fn read_all(&self) -> Vec<(String, i64)>;

    /// Current value of one named stat.
    ///
    /// # Errors
    /// Returns an error whose display text is the human-readable failure
    /// message for the lookup (e.g. the name is not registered).
    fn read_value(&self, name: &str) -> Result<i64>;
}

/// Type alias for any backend that implements StatsRegistry.
pub type RegistryPtr = Arc<dyn StatsRegistry>;
