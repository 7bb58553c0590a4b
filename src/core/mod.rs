pub mod constants;
pub mod geo;

pub use geo::TileCoord;
