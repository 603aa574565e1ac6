//! In-memory stats registry backed by atomic counters.
//!
//! Counters are registered once and then updated lock-free through the
//! returned handles by whatever part of the process owns them. The endpoint
//! only ever reads through the `StatsRegistry` trait.

use crate::domain::StatsRegistry;
use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// Memory-backed registry of named counters/gauges.
///
/// Enumeration is name-ordered, so repeated reads of an unchanged registry
/// list stats in a stable order.
pub struct MemoryRegistry {
    counters: RwLock<BTreeMap<String, Arc<AtomicI64>>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        MemoryRegistry {
            counters: RwLock::new(BTreeMap::new()),
        }
    }

    /// Register the named counter, or fetch its handle if already present.
    pub fn counter(&self, name: &str) -> Arc<AtomicI64> {
        if let Some(counter) = self
            .counters
            .read()
            .expect("stats registry lock poisoned")
            .get(name)
        {
            return Arc::clone(counter);
        }
        let mut counters = self.counters.write().expect("stats registry lock poisoned");
        Arc::clone(
            counters
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(AtomicI64::new(0))),
        )
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsRegistry for MemoryRegistry {
    fn read_all(&self) -> Vec<(String, i64)> {
        self.counters
            .read()
            .expect("stats registry lock poisoned")
            .iter()
            .map(|(name, counter)| (name.clone(), counter.load(Ordering::Relaxed)))
            .collect()
    }

    fn read_value(&self, name: &str) -> Result<i64> {
        match self
            .counters
            .read()
            .expect("stats registry lock poisoned")
            .get(name)
        {
            Some(counter) => Ok(counter.load(Ordering::Relaxed)),
            None => bail!("stat '{name}' is not registered"),
        }
    }
}

/// Create a memory-backed registry.
pub fn create() -> Result<Arc<MemoryRegistry>> {
    tracing::info!("Creating in-memory stats registry");
    Ok(Arc::new(MemoryRegistry::new()))
}
