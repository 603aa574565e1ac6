// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod health;
mod root;
mod stats;

// Core handlers
pub use health::health_check;
pub use root::root_handler;
pub use stats::stats_handler;
