pub mod document;
pub mod loader;
pub mod resolver;

// Re-exports for convenience
pub use document::{StyleDocument, StyleSource};
pub use loader::StyleLoader;
pub use resolver::{resolve_tile_endpoint, ResolverOptions};
