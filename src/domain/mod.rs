mod identity;
mod registry;
mod sample;

// Publicly expose the registry abstraction
pub use registry::{RegistryPtr, StatsRegistry};

// Publicly expose the value types shared across resolver and formatters
pub use identity::{validate_host_or_ip, ProcessIdentity};
pub use sample::{SampleOutcome, StatSample};
