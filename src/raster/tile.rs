//! Fixed 16×16 pixel grid
//!
//! Coordinates are `(x, y)` with `x` the column and `y` the row, origin at the
//! top-left. Plotting outside the grid is silently clipped, so generators and
//! editors never need to bounds-check before writing.

use crate::color::palette::Color;
use crate::io::configuration::TILE_SIZE;

/// Tile edge length as a signed coordinate bound
pub const TILE_EXTENT: i32 = TILE_SIZE as i32;

/// 16×16 grid of RGB pixels stored row-major
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    pixels: [[Color; TILE_SIZE]; TILE_SIZE],
}

impl Default for Tile {
    fn default() -> Self {
        Self::blank()
    }
}

impl Tile {
    /// Tile with every pixel black
    pub const fn blank() -> Self {
        Self::filled(Color::BLACK)
    }

    /// Tile with every pixel set to `color`
    pub const fn filled(color: Color) -> Self {
        Self {
            pixels: [[color; TILE_SIZE]; TILE_SIZE],
        }
    }

    /// Check whether a signed coordinate lies on the tile
    pub const fn contains(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < TILE_EXTENT && y < TILE_EXTENT
    }

    /// Read a pixel, `None` when outside the tile
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if !Self::contains(x, y) {
            return None;
        }
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Write a pixel, ignoring coordinates outside the tile
    ///
    /// Returns whether the pixel was written.
    pub fn plot(&mut self, x: i32, y: i32, color: Color) -> bool {
        if !Self::contains(x, y) {
            return false;
        }
        match self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Color) {
        for row in &mut self.pixels {
            row.fill(color);
        }
    }

    /// Rows of pixels from top to bottom
    pub const fn rows(&self) -> &[[Color; TILE_SIZE]; TILE_SIZE] {
        &self.pixels
    }

    /// Every pixel with its `(x, y)` coordinate in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.pixels.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &color)| (x, y, color))
        })
    }

    /// New tile with `f` applied to every pixel
    #[must_use]
    pub fn map_pixels(&self, f: impl Fn(Color) -> Color) -> Self {
        let mut mapped = self.clone();
        for row in &mut mapped.pixels {
            for pixel in row.iter_mut() {
                *pixel = f(*pixel);
            }
        }
        mapped
    }
}
