//! Patterns whose edges line up when tiles are laid side by side

use crate::color::palette::Palette;
use crate::pattern::registry::PatternFn;
use crate::raster::tile::{TILE_EXTENT, Tile};
use ndarray::Array2;
use rand::{Rng, RngCore};

/// Patterns provided by this module
pub const PATTERNS: &[(&str, PatternFn)] = &[
    ("tessellated_mirror", tessellated_mirror),
    ("tileable_noise", tileable_noise),
    ("tessellated_stripes", tessellated_stripes),
    ("tileable_voronoi", tileable_voronoi),
];

const QUADRANT: i32 = TILE_EXTENT / 2;
const STRIPE_WIDTH: i32 = 4;
const VORONOI_SEEDS: usize = 6;
const WRAP_OFFSETS: [i32; 3] = [0, TILE_EXTENT, -TILE_EXTENT];

/// Random 8×8 quadrant reflected into all four quadrants
pub fn tessellated_mirror(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    for y in 0..QUADRANT {
        for x in 0..QUADRANT {
            let color = palette.choose(rng);
            let far_x = TILE_EXTENT - 1 - x;
            let far_y = TILE_EXTENT - 1 - y;
            for (px, py) in [(x, y), (far_x, y), (x, far_y), (far_x, far_y)] {
                tile.plot(px, py, color);
            }
        }
    }
}

/// Uniform noise quantized into palette bands
///
/// The noise field is one sample larger than the tile in each direction with
/// the last row and column copied from the first.
pub fn tileable_noise(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    let side = TILE_EXTENT as usize + 1;
    let mut noise = Array2::from_shape_fn((side, side), |_| rng.random::<f64>());
    let first_column = noise.column(0).to_owned();
    noise.column_mut(side - 1).assign(&first_column);
    let first_row = noise.row(0).to_owned();
    noise.row_mut(side - 1).assign(&first_row);

    let bands = palette.len();
    let step = 1.0 / bands as f64;
    for y in 0..TILE_EXTENT {
        for x in 0..TILE_EXTENT {
            let value = noise.get((y as usize, x as usize)).copied().unwrap_or(0.0);
            let index = ((value / step) as usize).min(bands - 1);
            tile.plot(x, y, palette.clamped(index));
        }
    }
}

/// Diagonal bands four pixels wide cycling through the palette
pub fn tessellated_stripes(tile: &mut Tile, palette: &Palette, _rng: &mut dyn RngCore) {
    for y in 0..TILE_EXTENT {
        for x in 0..TILE_EXTENT {
            tile.plot(x, y, palette.cycle(((x + y) / STRIPE_WIDTH) as usize));
        }
    }
}

/// Six-seed Voronoi cells with every seed copied one tile away in each
/// direction
///
/// Ties on distance go to the seed copy generated first.
pub fn tileable_voronoi(tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
    let mut seeds = Vec::with_capacity(VORONOI_SEEDS * WRAP_OFFSETS.len().pow(2));
    for _ in 0..VORONOI_SEEDS {
        let sx = rng.random_range(0..TILE_EXTENT);
        let sy = rng.random_range(0..TILE_EXTENT);
        for dx in WRAP_OFFSETS {
            for dy in WRAP_OFFSETS {
                seeds.push((sx + dx, sy + dy));
            }
        }
    }

    let copies = WRAP_OFFSETS.len().pow(2);
    for y in 0..TILE_EXTENT {
        for x in 0..TILE_EXTENT {
            let nearest = seeds
                .iter()
                .enumerate()
                .min_by_key(|&(index, &(sx, sy))| {
                    let (dx, dy) = (x - sx, y - sy);
                    (dx * dx + dy * dy, index)
                })
                .map_or(0, |(index, _)| index);
            tile.plot(x, y, palette.cycle(nearest / copies));
        }
    }
}
