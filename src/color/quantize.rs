//! Game Boy style quantization to a fixed three-color palette

use crate::color::palette::Color;
use crate::io::configuration::{GAMEBOY_PALETTE, GAMEBOY_TRANSPARENT_MARKER};
use crate::raster::tile::Tile;

/// Map a color to its Game Boy target
///
/// Pure black and pure white always become the transparent marker color,
/// bypassing the nearest-distance search.
pub fn nearest_gameboy(color: Color) -> Color {
    if color == Color::BLACK || color == Color::WHITE {
        return GAMEBOY_TRANSPARENT_MARKER;
    }

    nearest_in(color, &GAMEBOY_PALETTE).unwrap_or(GAMEBOY_TRANSPARENT_MARKER)
}

/// Nearest candidate by squared RGB distance; ties keep the earliest
pub fn nearest_in(color: Color, candidates: &[Color]) -> Option<Color> {
    candidates
        .iter()
        .copied()
        .min_by_key(|candidate| candidate.distance_squared(color))
}

/// Quantize every pixel of a tile, returning a new tile
pub fn gameboyize_tile(tile: &Tile) -> Tile {
    tile.map_pixels(nearest_gameboy)
}
