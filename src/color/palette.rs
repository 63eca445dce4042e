//! RGB colors and ordered, non-empty palettes

use rand::RngCore;
use rand::seq::{IndexedRandom, SliceRandom};

/// 8-bit RGB color without alpha
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black, the background of a freshly created tile
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array in RGB order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space
    pub fn distance_squared(self, other: Self) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(&a, b)| {
                let d = i32::from(a) - i32::from(b);
                d.unsigned_abs() * d.unsigned_abs()
            })
            .sum()
    }

    /// Linear interpolation per channel, truncating toward zero
    ///
    /// `t` is clamped into [0, 1].
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let a = f64::from(a);
            t.mul_add(f64::from(b) - a, a).clamp(0.0, 255.0) as u8
        };
        Self::rgb(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Ordered sequence of colors with at least one entry
///
/// The first and last entries anchor gradient-style patterns. Adjusting a
/// palette always yields a new value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: Vec<Color>,
}

impl From<[Color; 4]> for Palette {
    fn from(colors: [Color; 4]) -> Self {
        Self {
            colors: colors.to_vec(),
        }
    }
}

impl Palette {
    /// Build a palette, returning `None` when `colors` is empty
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        (!colors.is_empty()).then_some(Self { colors })
    }

    /// Number of colors, always at least one
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes are never empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in palette order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// First color
    pub fn first(&self) -> Color {
        self.colors.first().copied().unwrap_or_default()
    }

    /// Last color; equals `first` for single-color palettes
    pub fn last(&self) -> Color {
        self.colors.last().copied().unwrap_or_default()
    }

    /// Color at `index`, clamped to the last entry
    pub fn clamped(&self, index: usize) -> Color {
        self.colors
            .get(index.min(self.len().saturating_sub(1)))
            .copied()
            .unwrap_or_default()
    }

    /// Color at `index` modulo the palette length
    pub fn cycle(&self, index: usize) -> Color {
        self.colors
            .get(index % self.len().max(1))
            .copied()
            .unwrap_or_default()
    }

    /// Color at a signed `index` wrapped into the palette
    pub fn wrap(&self, index: i32) -> Color {
        let len = self.len().max(1) as i32;
        self.cycle(index.rem_euclid(len) as usize)
    }

    /// Uniformly random color from the palette
    pub fn choose(&self, rng: &mut dyn RngCore) -> Color {
        self.colors.choose(rng).copied().unwrap_or_default()
    }

    /// Copy of this palette in random order
    #[must_use]
    pub fn shuffled(&self, rng: &mut dyn RngCore) -> Self {
        let mut colors = self.colors.clone();
        colors.shuffle(rng);
        Self { colors }
    }

    /// Apply `f` to every color, preserving order
    #[must_use]
    pub fn map(&self, f: impl Fn(Color) -> Color) -> Self {
        Self {
            colors: self.colors.iter().copied().map(f).collect(),
        }
    }

    /// Check whether `color` is one of the palette entries
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}
