//! Mapping from pattern name to pattern function
//!
//! Names are normalized to lowercase on both registration and lookup. A
//! lookup miss resolves to "solid" and never fails.

use crate::color::palette::Palette;
use crate::io::configuration::DEFAULT_PATTERN;
use crate::pattern::{basic, geometric, stochastic, tessellation};
use crate::raster::tile::Tile;
use rand::RngCore;
use std::borrow::Cow;
use std::collections::HashMap;

/// Fills a tile from a palette, drawing randomness from `rng`
pub type PatternFn = fn(&mut Tile, &Palette, &mut dyn RngCore);

/// Named pattern function
#[derive(Clone, Debug)]
pub struct Pattern {
    name: Cow<'static, str>,
    fill: PatternFn,
}

static SOLID_FALLBACK: Pattern = Pattern {
    name: Cow::Borrowed(DEFAULT_PATTERN),
    fill: basic::solid,
};

impl Pattern {
    /// Registered name, lowercase
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the pattern on `tile`
    pub fn apply(&self, tile: &mut Tile, palette: &Palette, rng: &mut dyn RngCore) {
        (self.fill)(tile, palette, rng);
    }
}

/// Every built-in pattern in registration order
pub fn builtin_patterns() -> impl Iterator<Item = (&'static str, PatternFn)> {
    basic::PATTERNS
        .iter()
        .chain(geometric::PATTERNS)
        .chain(stochastic::PATTERNS)
        .chain(tessellation::PATTERNS)
        .copied()
}

/// Registry of pattern functions keyed by lowercase name
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    patterns: HashMap<String, Pattern>,
}

impl PatternRegistry {
    /// Registry with no patterns; lookups resolve to the built-in solid fill
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in pattern
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, fill) in builtin_patterns() {
            registry.register(name, fill);
        }
        registry
    }

    /// Insert or replace the pattern registered under `name`
    pub fn register(&mut self, name: &str, fill: PatternFn) {
        let key = name.trim().to_lowercase();
        let pattern = Pattern {
            name: Cow::Owned(key.clone()),
            fill,
        };
        self.patterns.insert(key, pattern);
    }

    /// Look up a pattern case-insensitively, falling back to "solid"
    pub fn resolve(&self, name: &str) -> &Pattern {
        let key = name.trim().to_lowercase();
        self.patterns
            .get(&key)
            .or_else(|| self.patterns.get(DEFAULT_PATTERN))
            .unwrap_or(&SOLID_FALLBACK)
    }

    /// Check whether `name` has its own registration
    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(&name.trim().to_lowercase())
    }

    /// Registered names in ascending order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
