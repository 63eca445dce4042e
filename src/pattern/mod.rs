//! Procedural pattern generation
//!
//! A pattern fills a 16×16 tile from a palette, drawing any randomness from
//! the generator passed in so results are reproducible under a fixed seed.

/// Whole-tile fills: stripes, checkers, gradients, bricks
pub mod basic;
/// Tile generation orchestration
pub mod generator;
/// Rings, outlines, lines and other geometric figures
pub mod geometric;
/// Name to pattern function mapping
pub mod registry;
/// Scattered and randomized fills
pub mod stochastic;
/// Patterns whose edges continue across tile repeats
pub mod tessellation;

pub use generator::TileGenerator;
pub use registry::{Pattern, PatternFn, PatternRegistry};
