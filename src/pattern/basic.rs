//! Patterns that assign every pixel of the tile

use crate::color::palette::{Color, Palette};
use crate::pattern::registry::PatternFn;
use crate::raster::tile::{TILE_EXTENT, Tile};
use rand::RngCore;

/// Patterns provided by this module
pub const PATTERNS: &[(&str, PatternFn)] = &[
    ("solid", solid),
    ("stripes_horizontal", stripes_horizontal),
    ("stripes_vertical", stripes_vertical),
    ("checkerboard", checkerboard),
    ("chessboard_small", chessboard_small),
    ("gradient", gradient),
    ("random_blocks", random_blocks),
    ("triangles", triangles),
    ("border", border),
    ("diagonal_stripes_large", diagonal_stripes_large),
    ("bricks", bricks),
];

const STRIPE_BAND: i32 = 2;
const BLOCK_SIZE: i32 = 4;
const LARGE_STRIPE_WIDTH: i32 = 4;
const BRICK_HEIGHT: i32 = 4;
const BRICK_WIDTH: i32 = 4;

fn fill_with(tile: &mut Tile, mut color_at: impl FnMut(i32, i32) -> Color) {
    for y in 0..TILE_EXTENT {
        for x in 0..TILE_EXTENT {
            tile.plot(x, y, color_at(x, y));
        }
    }
}

/// Independent random palette pick for every pixel
pub fn solid(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    fill_with(tile, |_, _| palette.choose(rng));
}

/// Two-pixel horizontal bands cycling through the palette, starting at the
/// second color
pub fn stripes_horizontal(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    fill_with(tile, |_, y| palette.cycle((y / STRIPE_BAND) as usize + 1));
}

/// Two-pixel vertical bands cycling through the palette, starting at the
/// second color
pub fn stripes_vertical(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    fill_with(tile, |x, _| palette.cycle((x / STRIPE_BAND) as usize + 1));
}

/// 2×2 checker cells over a shuffled copy of the palette
pub fn checkerboard(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    let shuffled = palette.shuffled(rng);
    fill_with(tile, |x, y| shuffled.cycle((x / 2 + y / 2) as usize));
}

/// Single-pixel checker of the first two colors
pub fn chessboard_small(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    let (even, odd) = (palette.first(), palette.clamped(1));
    fill_with(tile, |x, y| if (x + y) % 2 == 0 { even } else { odd });
}

/// Top-to-bottom blend from the first to the last color
pub fn gradient(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    let (top, bottom) = (palette.first(), palette.last());
    let span = f64::from(TILE_EXTENT - 1);
    fill_with(tile, |_, y| top.lerp(bottom, f64::from(y) / span));
}

/// 4×4 blocks each painted one random color
pub fn random_blocks(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for block_y in (0..TILE_EXTENT).step_by(BLOCK_SIZE as usize) {
        for block_x in (0..TILE_EXTENT).step_by(BLOCK_SIZE as usize) {
            let color = palette.choose(rng);
            for y in block_y..block_y + BLOCK_SIZE {
                for x in block_x..block_x + BLOCK_SIZE {
                    tile.plot(x, y, color);
                }
            }
        }
    }
}

/// Anti-diagonal bands two pixels wide
pub fn triangles(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    fill_with(tile, |x, y| palette.cycle(((x + y) / 2) as usize));
}

/// One-pixel frame of the first color around a field of the second
pub fn border(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    let (frame, field) = (palette.first(), palette.clamped(1));
    let edge = TILE_EXTENT - 1;
    fill_with(tile, |x, y| {
        if x == 0 || y == 0 || x == edge || y == edge {
            frame
        } else {
            field
        }
    });
}

/// Diagonal bands four pixels wide running top-left to bottom-right
pub fn diagonal_stripes_large(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    fill_with(tile, |x, y| palette.wrap((x - y).div_euclid(LARGE_STRIPE_WIDTH)));
}

/// Courses of 4×4 bricks, every other course offset by one color
pub fn bricks(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    fill_with(tile, |x, y| {
        let course = y / BRICK_HEIGHT;
        palette.cycle((x / BRICK_WIDTH + course % 2) as usize)
    });
}
