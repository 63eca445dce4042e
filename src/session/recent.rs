//! Most recently generated or sampled tiles
//!
//! Newest first, bounded in length. Hotkeys `1` to `9` pick the first nine
//! entries and `0` picks the tenth.

use crate::io::configuration::RECENT_TILE_CAPACITY;
use crate::map::grid::TileRef;
use std::collections::VecDeque;

/// Bounded newest-first list of tiles with an optional selection
#[derive(Clone, Debug)]
pub struct RecentTiles {
    tiles: VecDeque<TileRef>,
    capacity: usize,
    selected: Option<usize>,
}

impl Default for RecentTiles {
    fn default() -> Self {
        Self::new(RECENT_TILE_CAPACITY)
    }
}

impl RecentTiles {
    /// Empty list holding at most `capacity` tiles
    pub fn new(capacity: usize) -> Self {
        Self {
            tiles: VecDeque::with_capacity(capacity),
            capacity,
            selected: None,
        }
    }

    /// Insert `tile` at the front, dropping the oldest entry when full
    ///
    /// A selection follows its tile as it moves back and is cleared when
    /// that tile falls off the end.
    pub fn push(&mut self, tile: TileRef) {
        if self.capacity == 0 {
            return;
        }
        self.tiles.push_front(tile);
        self.tiles.truncate(self.capacity);
        self.selected = self
            .selected
            .map(|index| index + 1)
            .filter(|&index| index < self.tiles.len());
    }

    /// Tile at `index`, newest first
    pub fn get(&self, index: usize) -> Option<&TileRef> {
        self.tiles.get(index)
    }

    /// Overwrite the tile at `index`, as after editing it
    ///
    /// Returns whether `index` was occupied.
    pub fn replace(&mut self, index: usize, tile: TileRef) -> bool {
        match self.tiles.get_mut(index) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// Select the tile at `index`, returning it when present
    pub fn select(&mut self, index: usize) -> Option<&TileRef> {
        let tile = self.tiles.get(index)?;
        self.selected = Some(index);
        Some(tile)
    }

    /// Select the tile bound to a hotkey
    pub fn select_hotkey(&mut self, key: char) -> Option<&TileRef> {
        let index = hotkey_index(key)?;
        self.select(index)
    }

    /// Index of the selected tile
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selected tile
    pub fn selected(&self) -> Option<&TileRef> {
        self.selected.and_then(|index| self.tiles.get(index))
    }

    /// Tiles newest first
    pub fn iter(&self) -> impl Iterator<Item = &TileRef> + '_ {
        self.tiles.iter()
    }

    /// Number of stored tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether no tile is stored
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Position selected by a digit hotkey, `0` meaning the tenth
pub const fn hotkey_index(key: char) -> Option<usize> {
    match key {
        '1'..='9' => Some(key as usize - '1' as usize),
        '0' => Some(9),
        _ => None,
    }
}
