//! Editing tools and brush stroke widths

use crate::io::configuration::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use crate::raster::primitives::stroke_radius;
use std::fmt;
use std::str::FromStr;

/// Active editing tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Paint with the selected color or tile
    #[default]
    Paint,
    /// Erase cells or pixels
    Erase,
    /// Select cells
    Select,
    /// Flood fill a contiguous region
    Bucket,
    /// Straight line between press and release
    Line,
    /// Rectangle outline between press and release
    Rect,
    /// Ellipse outline inscribed between press and release
    Circle,
    /// Pick up the color or tile under the cursor
    Sampler,
}

impl Tool {
    /// Every tool in toolbar order
    pub const ALL: [Self; 8] = [
        Self::Paint,
        Self::Erase,
        Self::Select,
        Self::Bucket,
        Self::Line,
        Self::Rect,
        Self::Circle,
        Self::Sampler,
    ];

    /// Tools that draw on release from a press anchor
    pub const fn is_shape(self) -> bool {
        matches!(self, Self::Line | Self::Rect | Self::Circle)
    }

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Paint => "paint",
            Self::Erase => "erase",
            Self::Select => "select",
            Self::Bucket => "bucket",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Sampler => "sampler",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = crate::io::error::WordTileError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| invalid_parameter("tool", &s, &"unknown tool"))
    }
}

/// Brush stroke width within `MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeWidth(u32);

impl StrokeWidth {
    /// Single-cell brush
    pub const THIN: Self = Self(MIN_STROKE_WIDTH);

    /// Clamp `width` into the allowed range
    pub fn clamped(width: u32) -> Self {
        Self(width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH))
    }

    /// Validate `width` against the allowed range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for widths outside the spinner range
    pub fn new(width: u32) -> Result<Self> {
        if (MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&width) {
            Ok(Self(width))
        } else {
            Err(invalid_parameter(
                "stroke_width",
                &width,
                &format!("must be between {MIN_STROKE_WIDTH} and {MAX_STROKE_WIDTH}"),
            ))
        }
    }

    /// Width in cells
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Brush radius, `(width - 1) / 2` rounded down
    pub const fn radius(self) -> i32 {
        stroke_radius(self.0)
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self::THIN
    }
}
