//! Word and pattern to tile
//!
//! The generator owns its random source, so successive calls on one
//! generator advance the same stream. Two generators built from the same
//! seed produce identical tile sequences.

use crate::color::adjust::{HsvAdjustment, adjust_palette};
use crate::color::dictionary::PaletteDictionary;
use crate::color::palette::Palette;
use crate::pattern::registry::PatternRegistry;
use crate::raster::tile::Tile;
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

/// Seeded tile generator over a palette dictionary and pattern registry
pub struct TileGenerator {
    registry: PatternRegistry,
    dictionary: &'static PaletteDictionary,
    rng: StdRng,
}

impl TileGenerator {
    /// Generator over the built-in words and patterns
    pub fn new(seed: u64) -> Self {
        Self::with_registry(PatternRegistry::builtin(), seed)
    }

    /// Generator over a custom pattern registry
    pub fn with_registry(registry: PatternRegistry, seed: u64) -> Self {
        Self::from_rng(registry, StdRng::seed_from_u64(seed))
    }

    /// Generator drawing from an existing random source
    pub fn from_rng(registry: PatternRegistry, rng: StdRng) -> Self {
        Self {
            registry,
            dictionary: PaletteDictionary::global(),
            rng,
        }
    }

    /// Patterns available to this generator
    pub const fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Words with a built-in palette
    pub const fn dictionary(&self) -> &'static PaletteDictionary {
        self.dictionary
    }

    /// Build a tile for `word` painted with `pattern`
    ///
    /// Unknown words use the default palette and unknown patterns fall back
    /// to a solid fill; neither is an error.
    pub fn generate(&mut self, word: &str, pattern: &str, adjustment: &HsvAdjustment) -> Tile {
        let palette = self.dictionary.lookup(word);
        debug!(
            "generating {pattern} for {word:?} (known word: {})",
            self.dictionary.contains(word)
        );
        self.generate_from_palette(&adjust_palette(&palette, adjustment), pattern)
    }

    /// Build a tile from an explicit palette
    ///
    /// The tile starts black, so partial-fill patterns show black where they
    /// do not paint.
    pub fn generate_from_palette(&mut self, palette: &Palette, pattern: &str) -> Tile {
        if !self.registry.contains(pattern) {
            debug!("pattern {pattern:?} unknown, falling back to solid");
        }
        let resolved = self.registry.resolve(pattern);
        let mut tile = Tile::blank();
        resolved.apply(&mut tile, palette, &mut self.rng);
        tile
    }
}
