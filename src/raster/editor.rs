//! Pixel editing on a single tile
//!
//! The free functions mutate a tile in place and clip to its bounds. They are
//! the building blocks of [`TileEditor`], which adds tool dispatch, shape
//! anchoring and snapshot undo on top.

use crate::color::palette::Color;
use crate::io::configuration::ERASE_COLOR;
use crate::io::error::Result;
use crate::map::history::History;
use crate::raster::primitives::{self, Point};
use crate::raster::tile::{TILE_EXTENT, Tile};
use crate::session::tool::{StrokeWidth, Tool};
use log::debug;

/// Paint a square brush of `color` centered on `(x, y)`
pub fn paint_point(tile: &mut Tile, x: i32, y: i32, color: Color, stroke: StrokeWidth) {
    primitives::stamp(x, y, stroke.radius(), |px, py| {
        tile.plot(px, py, color);
    });
}

/// Reset a square brush centered on `(x, y)` to the erase color
pub fn erase_point(tile: &mut Tile, x: i32, y: i32, stroke: StrokeWidth) {
    paint_point(tile, x, y, ERASE_COLOR, stroke);
}

/// Flood fill the 4-connected region sharing the color at `(x, y)`
///
/// No-op when the start lies outside the tile or already has `color`.
/// Returns the number of pixels changed.
pub fn bucket_fill(tile: &mut Tile, x: i32, y: i32, color: Color) -> usize {
    let Some(origin) = tile.get(x, y) else {
        return 0;
    };
    if origin == color {
        return 0;
    }

    let extent = TILE_EXTENT as usize;
    let region = primitives::flood_region(extent, extent, (x as usize, y as usize), |cx, cy| {
        tile.get(cx as i32, cy as i32) == Some(origin)
    });

    for &(cx, cy) in &region {
        tile.plot(cx as i32, cy as i32, color);
    }
    region.len()
}

/// Draw a line between two pixels
pub fn draw_line(tile: &mut Tile, from: Point, to: Point, color: Color, stroke: StrokeWidth) {
    primitives::thick_line(from, to, stroke.get(), |x, y| {
        tile.plot(x, y, color);
    });
}

/// Draw the outline of the rectangle spanned by two corner pixels
pub fn draw_rect(tile: &mut Tile, from: Point, to: Point, color: Color, stroke: StrokeWidth) {
    primitives::rect_outline(from, to, stroke.get(), |x, y| {
        tile.plot(x, y, color);
    });
}

/// Draw the ellipse inscribed in the box spanned by two corner pixels
pub fn draw_circle(tile: &mut Tile, from: Point, to: Point, color: Color, stroke: StrokeWidth) {
    primitives::ellipse_outline(from, to, stroke.get(), |x, y| {
        tile.plot(x, y, color);
    });
}

/// Read the color under `(x, y)`
pub fn sample(tile: &Tile, x: i32, y: i32) -> Option<Color> {
    tile.get(x, y)
}

/// Interactive single-tile editor
///
/// Click-style actions (paint, erase, bucket) record one undo snapshot per
/// press; continued drags paint without recording. Shape tools anchor on
/// press and draw and record on release.
#[derive(Debug, Clone)]
pub struct TileEditor {
    tile: Tile,
    color: Color,
    tool: Tool,
    stroke: StrokeWidth,
    history: History<Tile>,
    shape_start: Option<Point>,
    last_cell: Option<Point>,
    selected: Option<Point>,
}

impl TileEditor {
    /// Open an editor on a copy of `tile`
    pub fn new(tile: Tile) -> Self {
        Self {
            history: History::new(tile.clone()),
            tile,
            color: Color::rgb(255, 0, 0),
            tool: Tool::Paint,
            stroke: StrokeWidth::THIN,
            shape_start: None,
            last_cell: None,
            selected: None,
        }
    }

    /// Tile being edited
    pub const fn tile(&self) -> &Tile {
        &self.tile
    }

    /// Color used by painting tools
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Change the painting color
    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Active tool
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools, dropping any pending shape anchor
    pub const fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.shape_start = None;
    }

    /// Brush width
    pub const fn stroke(&self) -> StrokeWidth {
        self.stroke
    }

    /// Change the brush width
    pub const fn set_stroke(&mut self, stroke: StrokeWidth) {
        self.stroke = stroke;
    }

    /// Pixel chosen with the select tool
    pub const fn selected(&self) -> Option<Point> {
        self.selected
    }

    /// Pointer pressed on pixel `(x, y)`
    pub fn press(&mut self, x: i32, y: i32) {
        if self.tool.is_shape() {
            self.shape_start = Some((x, y));
            return;
        }
        if !Tile::contains(x, y) {
            return;
        }

        match self.tool {
            Tool::Paint => {
                paint_point(&mut self.tile, x, y, self.color, self.stroke);
                self.record();
            }
            Tool::Erase => {
                erase_point(&mut self.tile, x, y, self.stroke);
                self.record();
            }
            Tool::Select => self.selected = Some((x, y)),
            Tool::Bucket => {
                bucket_fill(&mut self.tile, x, y, self.color);
                self.record();
            }
            Tool::Sampler => {
                if let Some(color) = sample(&self.tile, x, y) {
                    self.color = color;
                }
            }
            Tool::Line | Tool::Rect | Tool::Circle => {}
        }
        self.last_cell = Some((x, y));
    }

    /// Pointer dragged onto pixel `(x, y)`
    pub fn drag(&mut self, x: i32, y: i32) {
        if self.tool.is_shape() || !Tile::contains(x, y) || self.last_cell == Some((x, y)) {
            return;
        }

        match self.tool {
            Tool::Paint => paint_point(&mut self.tile, x, y, self.color, self.stroke),
            Tool::Erase => erase_point(&mut self.tile, x, y, self.stroke),
            Tool::Select
            | Tool::Bucket
            | Tool::Sampler
            | Tool::Line
            | Tool::Rect
            | Tool::Circle => {}
        }
        self.last_cell = Some((x, y));
    }

    /// Pointer released on pixel `(x, y)`
    pub fn release(&mut self, x: i32, y: i32) {
        if let Some(start) = self.shape_start.take() {
            let end = (x, y);
            match self.tool {
                Tool::Line => draw_line(&mut self.tile, start, end, self.color, self.stroke),
                Tool::Rect => draw_rect(&mut self.tile, start, end, self.color, self.stroke),
                Tool::Circle => draw_circle(&mut self.tile, start, end, self.color, self.stroke),
                Tool::Paint | Tool::Erase | Tool::Select | Tool::Bucket | Tool::Sampler => {}
            }
            debug!("{} drawn from {start:?} to {end:?}", self.tool);
            self.record();
        }
        self.last_cell = None;
    }

    /// Restore the previous snapshot
    ///
    /// # Errors
    ///
    /// Returns `HistoryExhausted` when there is nothing left to undo
    pub fn undo(&mut self) -> Result<()> {
        self.tile = self.history.undo()?.clone();
        Ok(())
    }

    /// Re-apply the last undone snapshot
    ///
    /// # Errors
    ///
    /// Returns `HistoryExhausted` when there is nothing to redo
    pub fn redo(&mut self) -> Result<()> {
        self.tile = self.history.redo()?.clone();
        Ok(())
    }

    /// Close the editor, returning the edited tile
    pub fn finish(self) -> Tile {
        self.tile
    }

    fn record(&mut self) {
        self.history.record(self.tile.clone());
    }
}
