//! Procedural 16×16 pixel tiles from words
//!
//! A word selects a four-color palette, optionally shifted in HSV space, and a
//! named pattern paints a tile from it. Tiles can be edited pixel by pixel,
//! arranged on a map with undo history, quantized to a Game Boy palette and
//! exported as PNG.

#![forbid(unsafe_code)]

/// Colors, palettes, the word dictionary and color quantization
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Map grid, map editor and snapshot history
pub mod map;
/// Pattern functions, their registry and the tile generator
pub mod pattern;
/// Tile pixel grid, rasterization primitives and the pixel editor
pub mod raster;
/// Editing tools, recent tiles and word navigation
pub mod session;

pub use io::error::{Result, WordTileError};
