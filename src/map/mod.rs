//! Map of placed tiles with editing and undo

/// Tool dispatch and selection over a map
pub mod editor;
/// Resizable grid of optional tiles
pub mod grid;
/// Snapshot undo and redo stacks
pub mod history;

pub use editor::{MapEditor, Modifiers};
pub use grid::{MapGrid, TileRef};
pub use history::History;
