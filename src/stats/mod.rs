// Pure request-to-body core: resolution and the three output encodings.
// Handlers glue these to the HTTP surface.

mod format;
mod resolver;

pub use format::{render_json, render_monitor, render_plain};
pub use resolver::resolve;
