//! Tile pixel grids and the rasterization primitives shared by pattern
//! generation and the editors

/// Pixel editing operations and the single-tile editor
pub mod editor;
/// Line, shape and flood fill rasterization
pub mod primitives;
/// Fixed-size tile pixel grid
pub mod tile;

pub use tile::Tile;
