//! Colors, palettes and palette transformations

/// Hue/saturation/value palette adjustment
pub mod adjust;
/// Static word to palette dictionary
pub mod dictionary;
/// Color and palette value types
pub mod palette;
/// Game Boy style color quantization
pub mod quantize;

pub use palette::{Color, Palette};
