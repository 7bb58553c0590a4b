pub mod css;
pub mod scale;

// Re-exports for convenience
pub use css::Color;
pub use scale::{LinearScale, ValueShader};
