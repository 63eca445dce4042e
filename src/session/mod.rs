//! Editing session state shared by the tile and map editors

/// Word navigation over the sorted dictionary
pub mod navigator;
/// Most recently generated tiles
pub mod recent;
/// Editing tools and stroke widths
pub mod tool;

pub use tool::{StrokeWidth, Tool};
