//! Tile, map and editor constants shared across the crate

use crate::color::palette::Color;

/// Edge length of a tile in pixels
pub const TILE_SIZE: usize = 16;

// Map dimensions are measured in tiles
/// Smallest allowed map width or height
pub const MIN_MAP_DIMENSION: usize = 4;
/// Largest allowed map width or height
pub const MAX_MAP_DIMENSION: usize = 500;
/// Map width and height at startup
pub const DEFAULT_MAP_DIMENSION: usize = 16;

/// Smallest brush stroke width
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Largest brush stroke width
pub const MAX_STROKE_WIDTH: u32 = 10;

/// Number of recently generated tiles kept for hotkey selection
pub const RECENT_TILE_CAPACITY: usize = 10;
/// Dictionary entries skipped by a page step during word navigation
pub const WORD_PAGE_STEP: usize = 10;

/// Word used when a lookup misses the dictionary
pub const DEFAULT_WORD: &str = "grass";
/// Pattern used when a lookup misses the registry
pub const DEFAULT_PATTERN: &str = "solid";

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Color written by the pixel eraser
pub const ERASE_COLOR: Color = Color::rgb(255, 255, 255);

// Game Boy style quantization targets
/// Target colors for map quantization (#071821, #86c06c, #e0f8cf)
pub const GAMEBOY_PALETTE: [Color; 3] = [
    Color::rgb(7, 24, 33),
    Color::rgb(134, 192, 108),
    Color::rgb(224, 248, 207),
];
/// Marker color that pure black and pure white quantize to (#65ff00)
pub const GAMEBOY_TRANSPARENT_MARKER: Color = Color::rgb(101, 255, 0);

// Output settings
/// Default directory for exported tiles
pub const DEFAULT_OUTPUT_DIR: &str = "tiles";
/// Extension of every exported image
pub const OUTPUT_EXTENSION: &str = "png";
/// Largest nearest-neighbour upscale factor accepted on export
pub const MAX_EXPORT_SCALE: u32 = 32;
/// Widest sheet map built from a batch, in tiles
pub const MAX_SHEET_WIDTH: usize = 16;

/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
