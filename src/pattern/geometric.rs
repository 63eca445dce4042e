//! Geometric figures: diagonals, rings, outlines and waves
//!
//! Most of these only paint the pixels on their figure and leave the rest of
//! the tile as it was.

use crate::color::palette::Palette;
use crate::pattern::registry::PatternFn;
use crate::raster::primitives;
use crate::raster::tile::{TILE_EXTENT, Tile};
use rand::RngCore;

/// Patterns provided by this module
pub const PATTERNS: &[(&str, PatternFn)] = &[
    ("diagonal_lines", diagonal_lines),
    ("rings", rings),
    ("squares", squares),
    ("zigzag", zigzag),
    ("shaded_circle", shaded_circle),
    ("concentric_circles", concentric_circles),
    ("x_cross", x_cross),
    ("crosshatch", crosshatch),
    ("circles_in_cells", circles_in_cells),
    ("honeycomb", honeycomb),
    ("wave", wave),
];

const CENTER: primitives::Point = (TILE_EXTENT / 2, TILE_EXTENT / 2);
const MAX_RING_RADIUS: i32 = 8;
const CELL_SIZE: i32 = 4;

/// One-pixel diagonals, each successive diagonal the next palette color
pub fn diagonal_lines(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    for (index, offset) in (-(TILE_EXTENT - 1)..TILE_EXTENT).enumerate() {
        let color = palette.cycle(index);
        for x in 0..TILE_EXTENT {
            tile.plot(x, x - offset, color);
        }
    }
}

/// Rings of radius 8 down to 1 around the center, outermost first
pub fn rings(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    for (index, radius) in (1..=MAX_RING_RADIUS).rev().enumerate() {
        let color = palette.cycle(index);
        primitives::ring(CENTER, radius, |x, y| {
            tile.plot(x, y, color);
        });
    }
}

/// Nested square outlines stepping inward two pixels at a time
pub fn squares(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    for (index, size) in (1..=TILE_EXTENT / 2).rev().map(|half| half * 2).enumerate() {
        let color = palette.cycle(index);
        let offset = (TILE_EXTENT - size) / 2;
        let far = offset + size - 1;
        primitives::rect_outline((offset, offset), (far, far), 1, |x, y| {
            tile.plot(x, y, color);
        });
    }
}

/// Rows painted alternately left-to-right and right-to-left, one palette
/// color per row
pub fn zigzag(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    for y in 0..TILE_EXTENT {
        let color = palette.cycle(y as usize);
        let forward = (y / 2) % 2 == 0;
        let (start, end) = if forward {
            (0, TILE_EXTENT - 1)
        } else {
            (TILE_EXTENT - 1, 0)
        };
        primitives::line((start, y), (end, y), |x, row| {
            tile.plot(x, row, color);
        });
    }
}

/// Disk of radius 8 shaded from the first color at the center to the last at
/// the rim by squared distance
pub fn shaded_circle(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    let (inner, outer) = (palette.first(), palette.last());
    let max_distance = MAX_RING_RADIUS * MAX_RING_RADIUS;

    for y in 0..TILE_EXTENT {
        for x in 0..TILE_EXTENT {
            let (dx, dy) = (x - CENTER.0, y - CENTER.1);
            let distance = dx * dx + dy * dy;
            if distance <= max_distance {
                let t = f64::from(distance) / f64::from(max_distance);
                tile.plot(x, y, inner.lerp(outer, t));
            }
        }
    }
}

/// Rings of radius 1, 3, 5 and 7, innermost first
pub fn concentric_circles(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    for (index, radius) in (1..=MAX_RING_RADIUS).step_by(2).enumerate() {
        let color = palette.cycle(index);
        primitives::ring(CENTER, radius, |x, y| {
            tile.plot(x, y, color);
        });
    }
}

/// Both main diagonals, each in its own random color
pub fn x_cross(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    let falling = palette.choose(rng);
    let rising = palette.choose(rng);
    for i in 0..TILE_EXTENT {
        tile.plot(i, i, falling);
        tile.plot(TILE_EXTENT - 1 - i, i, rising);
    }
}

/// Even rows, then even columns, then both diagonals, each layer in a random
/// color
pub fn crosshatch(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    let rows = palette.choose(rng);
    let columns = palette.choose(rng);
    let diagonals = palette.choose(rng);

    for y in (0..TILE_EXTENT).step_by(2) {
        for x in 0..TILE_EXTENT {
            tile.plot(x, y, rows);
        }
    }
    for x in (0..TILE_EXTENT).step_by(2) {
        for y in 0..TILE_EXTENT {
            tile.plot(x, y, columns);
        }
    }
    for i in 0..TILE_EXTENT {
        tile.plot(i, i, diagonals);
        tile.plot(TILE_EXTENT - 1 - i, i, diagonals);
    }
}

/// Radius-1 ring centered in each 4×4 cell, cells colored in sequence
pub fn circles_in_cells(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    let cells_per_side = TILE_EXTENT / CELL_SIZE;
    for cell_y in 0..cells_per_side {
        for cell_x in 0..cells_per_side {
            let color = palette.cycle((cell_y * cells_per_side + cell_x) as usize);
            let center = (
                cell_x * CELL_SIZE + CELL_SIZE / 2,
                cell_y * CELL_SIZE + CELL_SIZE / 2,
            );
            primitives::ring(center, 1, |x, y| {
                tile.plot(x, y, color);
            });
        }
    }
}

/// Hexagonal rings on staggered rows
pub fn honeycomb(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    const HEX: [(i32, i32); 6] = [(0, 0), (1, 1), (1, 2), (0, 3), (-1, 2), (-1, 1)];

    let mut index = 0;
    for y in (0..TILE_EXTENT).step_by(2) {
        let shift = (y / 2) % 2;
        for x in (0..TILE_EXTENT).step_by(3) {
            let color = palette.cycle(index);
            index += 1;
            for (dx, dy) in HEX {
                tile.plot(x + shift + dx, y + dy, color);
            }
        }
    }
}

/// Each row displaced vertically along a sine wave, wrapping at the bottom
pub fn wave(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for y in 0..TILE_EXTENT {
        let color = palette.choose(rng);
        for x in 0..TILE_EXTENT {
            let offset = (2.0 * (f64::from(x) / 2.0).sin()) as i32;
            tile.plot(x, (y + offset).rem_euclid(TILE_EXTENT), color);
        }
    }
}
