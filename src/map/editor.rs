//! Tool dispatch over a map grid
//!
//! Every discrete edit (a click, a finished shape, a relocation, a resize,
//! a delete or a quantization pass) records one snapshot. Drags extend the
//! edit started by their press without recording.

use crate::io::error::{Result, WordTileError};
use crate::map::grid::{MapGrid, TileRef};
use crate::map::history::History;
use crate::raster::primitives::Point;
use crate::session::recent::RecentTiles;
use crate::session::tool::{StrokeWidth, Tool};
use log::debug;
use std::collections::BTreeSet;

/// Keyboard modifiers held during pointer actions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl toggles cells in and out of the selection
    pub ctrl: bool,
    /// Shift with the select tool drags the whole selection
    pub shift: bool,
}

/// Interactive map editor with undo history
#[derive(Debug, Clone)]
pub struct MapEditor {
    grid: MapGrid,
    history: History<MapGrid>,
    brush: Option<TileRef>,
    recent: RecentTiles,
    tool: Tool,
    stroke: StrokeWidth,
    modifiers: Modifiers,
    selection: BTreeSet<Point>,
    shape_start: Option<Point>,
    move_origin: Option<Point>,
    last_cell: Option<Point>,
}

impl MapEditor {
    /// Editor over an empty map
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension lies outside the
    /// allowed map bounds
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let grid = MapGrid::new(width, height)?;
        Ok(Self {
            history: History::new(grid.clone()),
            grid,
            brush: None,
            recent: RecentTiles::default(),
            tool: Tool::Paint,
            stroke: StrokeWidth::THIN,
            modifiers: Modifiers::default(),
            selection: BTreeSet::new(),
            shape_start: None,
            move_origin: None,
            last_cell: None,
        })
    }

    /// Current map
    pub const fn grid(&self) -> &MapGrid {
        &self.grid
    }

    /// Snapshot history
    pub const fn history(&self) -> &History<MapGrid> {
        &self.history
    }

    /// Active tool
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools
    ///
    /// Leaving the select tool clears the selection. Any pending shape
    /// anchor is dropped.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != Tool::Select {
            self.selection.clear();
        }
        self.tool = tool;
        self.shape_start = None;
    }

    /// Brush width in cells
    pub const fn stroke(&self) -> StrokeWidth {
        self.stroke
    }

    /// Change the brush width
    pub const fn set_stroke(&mut self, stroke: StrokeWidth) {
        self.stroke = stroke;
    }

    /// Update the held modifiers
    pub const fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Tile placed by paint, bucket and shape tools
    pub const fn brush(&self) -> Option<&TileRef> {
        self.brush.as_ref()
    }

    /// Recently generated or sampled tiles
    pub const fn recent(&self) -> &RecentTiles {
        &self.recent
    }

    /// Add a freshly generated tile to the recent list
    pub fn add_recent(&mut self, tile: TileRef) {
        self.recent.push(tile);
    }

    /// Use the recent tile at `index` as the brush
    ///
    /// Picking a tile while selecting switches to painting. Returns whether
    /// `index` held a tile.
    pub fn select_recent(&mut self, index: usize) -> bool {
        let Some(tile) = self.recent.select(index).cloned() else {
            return false;
        };
        self.brush = Some(tile);
        if self.tool == Tool::Select {
            self.set_tool(Tool::Paint);
        }
        true
    }

    /// Use the recent tile bound to a digit hotkey as the brush
    pub fn select_hotkey(&mut self, key: char) -> bool {
        crate::session::recent::hotkey_index(key).is_some_and(|index| self.select_recent(index))
    }

    /// Selected cells in row-major order
    pub fn selection(&self) -> impl Iterator<Item = Point> + '_ {
        let mut cells: Vec<Point> = self.selection.iter().copied().collect();
        cells.sort_unstable_by_key(|&(x, y)| (y, x));
        cells.into_iter()
    }

    /// Pointer pressed on cell `(x, y)`
    pub fn press(&mut self, x: i32, y: i32) {
        if self.tool.is_shape() {
            self.shape_start = Some((x, y));
            return;
        }
        if !self.grid.contains(x, y) {
            self.last_cell = None;
            return;
        }

        match self.tool {
            Tool::Select if self.modifiers.shift => {
                if !self.selection.is_empty() {
                    self.move_origin = Some((x, y));
                }
                return;
            }
            Tool::Sampler => {
                if let Some(tile) = self.grid.tile_at(x, y).cloned() {
                    self.recent.push(tile);
                }
                self.set_tool(Tool::Paint);
                return;
            }
            Tool::Paint
            | Tool::Erase
            | Tool::Select
            | Tool::Bucket
            | Tool::Line
            | Tool::Rect
            | Tool::Circle => self.apply(x, y, false),
        }
        self.last_cell = Some((x, y));
    }

    /// Pointer dragged onto cell `(x, y)`
    pub fn drag(&mut self, x: i32, y: i32) {
        if self.move_origin.is_some() || self.tool.is_shape() {
            return;
        }
        if self.grid.contains(x, y) && self.last_cell != Some((x, y)) {
            self.apply(x, y, true);
            self.last_cell = Some((x, y));
        }
    }

    /// Pointer released on cell `(x, y)`
    pub fn release(&mut self, x: i32, y: i32) {
        if let Some(origin) = self.move_origin.take() {
            let offset = (x - origin.0, y - origin.1);
            let cells: Vec<Point> = self.selection.iter().copied().collect();
            self.selection = self.grid.relocate(&cells, offset).into_iter().collect();
            debug!("moved {} cells by {offset:?}", self.selection.len());
            self.record();
        }

        if let Some(start) = self.shape_start.take() {
            self.draw_shape(start, (x, y));
            self.record();
        }
        self.last_cell = None;
    }

    fn apply(&mut self, x: i32, y: i32, dragging: bool) {
        match self.tool {
            Tool::Paint => {
                let Some(brush) = self.brush.clone() else {
                    return;
                };
                self.grid.place(x, y, &brush, self.stroke);
                if !dragging {
                    self.record();
                }
            }
            Tool::Erase => {
                self.grid.clear(x, y, self.stroke);
                if !dragging {
                    self.record();
                }
            }
            Tool::Select => self.select_cell(x, y),
            Tool::Bucket => {
                let Some(brush) = self.brush.clone() else {
                    return;
                };
                if !dragging {
                    self.grid.flood_fill(x, y, &brush);
                    self.record();
                }
            }
            Tool::Line | Tool::Rect | Tool::Circle | Tool::Sampler => {}
        }
    }

    fn select_cell(&mut self, x: i32, y: i32) {
        if self.modifiers.ctrl {
            if !self.selection.remove(&(x, y)) {
                self.selection.insert((x, y));
            }
        } else {
            self.selection.clear();
            self.selection.insert((x, y));
        }
    }

    fn draw_shape(&mut self, start: Point, end: Point) {
        let Some(brush) = &self.brush else {
            return;
        };
        match self.tool {
            Tool::Line => self.grid.place_line(start, end, brush, self.stroke),
            Tool::Rect => self.grid.place_rect(start, end, brush, self.stroke),
            Tool::Circle => self.grid.place_circle(start, end, brush, self.stroke),
            Tool::Paint | Tool::Erase | Tool::Select | Tool::Bucket | Tool::Sampler => {}
        }
    }

    /// Empty every selected cell and clear the selection
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        for &(x, y) in &self.selection {
            self.grid.set(x, y, None);
        }
        self.selection.clear();
        self.record();
    }

    /// Change the map dimensions, keeping tiles that remain in bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension lies outside the
    /// allowed map bounds, leaving the map and history unchanged
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.grid.resize(width, height)?;
        self.selection.clear();
        self.record();
        Ok(())
    }

    /// Quantize every placed tile to the Gameboy palette
    pub fn gameboyize(&mut self) {
        self.grid.gameboyize();
        self.record();
    }

    /// Tile in the first selected cell, for export or editing
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` when nothing is selected or the selected
    /// cell is empty
    pub fn selected_tile(&self) -> Result<&TileRef> {
        let (x, y) = self.selection().next().ok_or(WordTileError::EmptySelection {
            reason: "No cell selected.",
        })?;
        self.grid.tile_at(x, y).ok_or(WordTileError::EmptySelection {
            reason: "Selected cell has no tile.",
        })
    }

    /// Restore the previous snapshot
    ///
    /// # Errors
    ///
    /// Returns `HistoryExhausted` when there is nothing left to undo
    pub fn undo(&mut self) -> Result<()> {
        self.grid = self.history.undo()?.clone();
        self.forget_stale_cells();
        Ok(())
    }

    /// Re-apply the last undone snapshot
    ///
    /// # Errors
    ///
    /// Returns `HistoryExhausted` when there is nothing to redo
    pub fn redo(&mut self) -> Result<()> {
        self.grid = self.history.redo()?.clone();
        self.forget_stale_cells();
        Ok(())
    }

    fn forget_stale_cells(&mut self) {
        let grid = &self.grid;
        self.selection.retain(|&(x, y)| grid.contains(x, y));
    }

    fn record(&mut self) {
        self.history.record(self.grid.clone());
    }
}
