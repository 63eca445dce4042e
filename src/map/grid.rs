//! Resizable grid of optional tile placements
//!
//! Cells hold reference-counted tiles, so cloning a grid for an undo snapshot
//! copies pointers rather than pixels. Two cells match when their tiles have
//! equal pixels, whether or not they share an allocation.
//!
//! Coordinates are `(x, y)` cell positions with `x` the column. Writes outside
//! the grid are clipped without error.

use crate::color::quantize::gameboyize_tile;
use crate::io::error::{Result, validate_map_dimension};
use crate::raster::primitives::{self, Point};
use crate::raster::tile::Tile;
use crate::session::tool::StrokeWidth;
use log::debug;
use ndarray::Array2;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared tile stored in map cells
pub type TileRef = Rc<Tile>;

/// Cell match used by flood fill: shared allocation first, then pixels
fn same_tile(cell: Option<&TileRef>, other: Option<&TileRef>) -> bool {
    match (cell, other) {
        (Some(left), Some(right)) => Rc::ptr_eq(left, right) || left == right,
        (None, None) => true,
        (Some(_), None) | (None, Some(_)) => false,
    }
}

/// Map of optional tiles stored as a `(height, width)` array
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    cells: Array2<Option<TileRef>>,
}

impl MapGrid {
    /// Create an empty map
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension lies outside the
    /// allowed map bounds
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let width = validate_map_dimension("width", width)?;
        let height = validate_map_dimension("height", height)?;
        Ok(Self {
            cells: Array2::from_elem((height, width), None),
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check whether a signed cell coordinate lies on the map
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let row = usize::try_from(y).ok()?;
        let col = usize::try_from(x).ok()?;
        (row < self.height() && col < self.width()).then_some((row, col))
    }

    /// Tile placed at `(x, y)`, if any
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&TileRef> {
        self.index(x, y)
            .and_then(|idx| self.cells.get(idx))
            .and_then(Option::as_ref)
    }

    /// Overwrite one cell, returning whether it lay on the map
    pub fn set(&mut self, x: i32, y: i32, tile: Option<TileRef>) -> bool {
        match self.index(x, y).and_then(|idx| self.cells.get_mut(idx)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Place `tile` under a square brush centered on `(x, y)`
    pub fn place(&mut self, x: i32, y: i32, tile: &TileRef, stroke: StrokeWidth) {
        primitives::stamp(x, y, stroke.radius(), |cx, cy| {
            self.set(cx, cy, Some(Rc::clone(tile)));
        });
    }

    /// Empty every cell under a square brush centered on `(x, y)`
    pub fn clear(&mut self, x: i32, y: i32, stroke: StrokeWidth) {
        primitives::stamp(x, y, stroke.radius(), |cx, cy| {
            self.set(cx, cy, None);
        });
    }

    /// Replace the 4-connected region matching the cell at `(x, y)`
    ///
    /// Empty cells match other empty cells. No-op when the start lies off the
    /// map or already holds an equal tile. Returns the number of cells
    /// changed.
    pub fn flood_fill(&mut self, x: i32, y: i32, tile: &TileRef) -> usize {
        let Some((row, col)) = self.index(x, y) else {
            return 0;
        };
        let origin = self.cells.get((row, col)).cloned().flatten();
        if same_tile(origin.as_ref(), Some(tile)) {
            return 0;
        }

        let cells = &self.cells;
        let region = primitives::flood_region(self.width(), self.height(), (col, row), |cx, cy| {
            cells
                .get((cy, cx))
                .is_some_and(|cell| same_tile(cell.as_ref(), origin.as_ref()))
        });

        for &(cx, cy) in &region {
            if let Some(cell) = self.cells.get_mut((cy, cx)) {
                *cell = Some(Rc::clone(tile));
            }
        }
        debug!("flood filled {} cells from ({x}, {y})", region.len());
        region.len()
    }

    /// Place `tile` along a line of cells
    pub fn place_line(&mut self, from: Point, to: Point, tile: &TileRef, stroke: StrokeWidth) {
        primitives::thick_line(from, to, stroke.get(), |cx, cy| {
            self.set(cx, cy, Some(Rc::clone(tile)));
        });
    }

    /// Place `tile` around the rectangle spanned by two corner cells
    pub fn place_rect(&mut self, from: Point, to: Point, tile: &TileRef, stroke: StrokeWidth) {
        primitives::rect_outline(from, to, stroke.get(), |cx, cy| {
            self.set(cx, cy, Some(Rc::clone(tile)));
        });
    }

    /// Place `tile` around the ellipse inscribed in the box spanned by two
    /// corner cells
    pub fn place_circle(&mut self, from: Point, to: Point, tile: &TileRef, stroke: StrokeWidth) {
        primitives::ellipse_outline(from, to, stroke.get(), |cx, cy| {
            self.set(cx, cy, Some(Rc::clone(tile)));
        });
    }

    /// Change the map dimensions
    ///
    /// Tiles inside both the old and new bounds keep their position; the rest
    /// are discarded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension lies outside the
    /// allowed map bounds, leaving the map unchanged
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        let mut resized = Self::new(width, height)?;
        for ((row, col), cell) in self.cells.indexed_iter() {
            if let Some(target) = resized.cells.get_mut((row, col)) {
                target.clone_from(cell);
            }
        }
        debug!(
            "map resized from {}x{} to {width}x{height}",
            self.width(),
            self.height()
        );
        *self = resized;
        Ok(())
    }

    /// Move the tiles in `cells` by `offset`
    ///
    /// All source cells are emptied before any tile is written back, so moves
    /// onto overlapping cells are safe. Tiles landing off the map are
    /// dropped and empty source cells move nothing. Returns the destination
    /// cells that received a tile.
    pub fn relocate(&mut self, cells: &[Point], offset: Point) -> Vec<Point> {
        let mut lifted: HashMap<Point, TileRef> = HashMap::new();
        for &(x, y) in cells {
            if let Some(tile) = self.tile_at(x, y).cloned() {
                lifted.insert((x, y), tile);
                self.set(x, y, None);
            }
        }

        let mut landed: Vec<Point> = lifted
            .into_iter()
            .filter_map(|((x, y), tile)| {
                let target = (x + offset.0, y + offset.1);
                self.set(target.0, target.1, Some(tile)).then_some(target)
            })
            .collect();
        landed.sort_unstable();
        landed
    }

    /// Quantize every placed tile to the Gameboy palette
    ///
    /// Cells sharing a tile keep sharing the quantized copy.
    pub fn gameboyize(&mut self) {
        let mut converted: HashMap<Tile, TileRef> = HashMap::new();
        for cell in self.cells.iter_mut().flatten() {
            let quantized = converted
                .entry((**cell).clone())
                .or_insert_with_key(|tile| Rc::new(gameboyize_tile(tile)));
            *cell = Rc::clone(quantized);
        }
    }

    /// Occupied cells with their tiles in row-major order
    pub fn placed(&self) -> impl Iterator<Item = (Point, &TileRef)> + '_ {
        self.cells.indexed_iter().filter_map(|((row, col), cell)| {
            cell.as_ref().map(|tile| ((col as i32, row as i32), tile))
        })
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}
