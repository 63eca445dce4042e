//! Scattered and randomized fills
//!
//! Every pattern here consumes the random source; with a seeded generator
//! the output is reproducible.

use crate::color::palette::Palette;
use crate::pattern::registry::PatternFn;
use crate::raster::primitives;
use crate::raster::tile::{TILE_EXTENT, Tile};
use rand::{Rng, RngCore};

/// Patterns provided by this module
pub const PATTERNS: &[(&str, PatternFn)] = &[
    ("dots", dots),
    ("random_specks", random_specks),
    ("sprinkle", sprinkle),
    ("random_lines", random_lines),
    ("maze", maze),
    ("grain", grain),
    ("stars", stars),
    ("barcode", barcode),
    ("plaid", plaid),
    ("stipple", stipple),
    ("clouds_8bit", clouds_8bit),
];

const DOT_COUNT: usize = 10;
const SPECK_COUNT: usize = 50;
const SPRINKLE_COUNT: usize = 30;
const LINE_COUNT: usize = 10;
const STAR_COUNT: usize = 10;
const PLAID_SPACING: usize = 4;
const CLOUD_BLOCK: i32 = 4;

fn random_cell(rng: &mut dyn RngCore) -> (i32, i32) {
    (
        rng.random_range(0..TILE_EXTENT),
        rng.random_range(0..TILE_EXTENT),
    )
}

fn scatter(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore, count: usize) {
    for _ in 0..count {
        let (x, y) = random_cell(rng);
        let color = palette.choose(rng);
        tile.plot(x, y, color);
    }
}

/// Ten filled disks of random radius 1 to 3
pub fn dots(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for _ in 0..DOT_COUNT {
        let (cx, cy) = random_cell(rng);
        let radius: i32 = rng.random_range(1..=3);
        let color = palette.choose(rng);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    tile.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }
}

/// Fifty single-pixel specks
pub fn random_specks(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    scatter(tile, palette, rng, SPECK_COUNT);
}

/// Thirty single-pixel specks
pub fn sprinkle(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    scatter(tile, palette, rng, SPRINKLE_COUNT);
}

/// Ten one-pixel lines between random endpoints
pub fn random_lines(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for _ in 0..LINE_COUNT {
        let color = palette.choose(rng);
        let from = random_cell(rng);
        let to = random_cell(rng);
        primitives::line(from, to, |x, y| {
            tile.plot(x, y, color);
        });
    }
}

/// Two-pixel segments from every cell, randomly horizontal or vertical
///
/// Cells on the last column that roll horizontal fall back to vertical, and
/// the bottom-right cell may stay unpainted.
pub fn maze(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    let last = TILE_EXTENT - 1;
    for y in 0..TILE_EXTENT {
        for x in 0..TILE_EXTENT {
            let color = palette.choose(rng);
            let horizontal = rng.random_bool(0.5);
            if horizontal && x < last {
                tile.plot(x, y, color);
                tile.plot(x + 1, y, color);
            } else if y < last {
                tile.plot(x, y, color);
                tile.plot(x, y + 1, color);
            }
        }
    }
}

/// Each column a random palette color
pub fn grain(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for x in 0..TILE_EXTENT {
        let color = palette.choose(rng);
        for y in 0..TILE_EXTENT {
            tile.plot(x, y, color);
        }
    }
}

/// Ten plus-shaped stars kept clear of the tile edge
pub fn stars(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for _ in 0..STAR_COUNT {
        let x = rng.random_range(1..TILE_EXTENT - 1);
        let y = rng.random_range(1..TILE_EXTENT - 1);
        let color = palette.choose(rng);
        for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
            tile.plot(x + dx, y + dy, color);
        }
    }
}

/// Full-height bars of random width 1 to 4 from left to right
pub fn barcode(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    let mut x = 0;
    while x < TILE_EXTENT {
        let width: i32 = rng.random_range(1..=4);
        let color = palette.choose(rng);
        for column in x..(x + width).min(TILE_EXTENT) {
            for y in 0..TILE_EXTENT {
                tile.plot(column, y, color);
            }
        }
        x += width;
    }
}

/// First-color base crossed by random-colored lines every fourth row and
/// column
pub fn plaid(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    tile.fill(palette.first());

    for y in (0..TILE_EXTENT).step_by(PLAID_SPACING) {
        let color = palette.choose(rng);
        for x in 0..TILE_EXTENT {
            tile.plot(x, y, color);
        }
    }
    for x in (0..TILE_EXTENT).step_by(PLAID_SPACING) {
        let color = palette.choose(rng);
        for y in 0..TILE_EXTENT {
            tile.plot(x, y, color);
        }
    }
}

/// Each pixel painted a random color with probability one half
pub fn stipple(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for y in 0..TILE_EXTENT {
        for x in 0..TILE_EXTENT {
            if rng.random_bool(0.5) {
                let color = palette.choose(rng);
                tile.plot(x, y, color);
            }
        }
    }
}

/// Four-row bands of blocks, each band one random color shifted
/// horizontally by up to two pixels with wraparound
pub fn clouds_8bit(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for band in (0..TILE_EXTENT).step_by(CLOUD_BLOCK as usize) {
        let offset: i32 = rng.random_range(-2..=2);
        let color = palette.choose(rng);
        for block_x in (0..TILE_EXTENT).step_by(CLOUD_BLOCK as usize) {
            for y in band..band + CLOUD_BLOCK {
                for x in block_x..block_x + CLOUD_BLOCK {
                    tile.plot((x + offset).rem_euclid(TILE_EXTENT), y, color);
                }
            }
        }
    }
}
