use crate::domain::{StatSample, StatsRegistry};

/// Resolve the requested stat names against the registry.
///
/// An empty filter means "all stats", in the registry's enumeration order.
/// Otherwise one lookup is performed per name, in filter order; a failed
/// lookup becomes an error outcome for that name and never aborts the rest
/// of the batch.
pub fn resolve(registry: &dyn StatsRegistry, filter: &[String]) -> Vec<StatSample> {
    if filter.is_empty() {
        return registry
            .read_all()
            .into_iter()
            .map(|(name, value)| StatSample::value(name, value))
            .collect();
    }

    filter
        .iter()
        .map(|name| match registry.read_value(name) {
            Ok(value) => StatSample::value(name.clone(), value),
            Err(err) => StatSample::error(name.clone(), err.to_string()),
        })
        .collect()
}
