mod memory_registry;

// Re-export the factory function for easy access
pub use memory_registry::create as create_memory_registry;
pub use memory_registry::MemoryRegistry;
