/// Command-line front end for batch tile generation
pub mod cli;
/// Constants for tiles, maps, editors and output
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// PNG export of tiles and maps
pub mod image;
/// Batch progress display
pub mod progress;
