//! Stepping through the dictionary words
//!
//! Small steps move one word and page steps move ten, both wrapping around
//! the sorted word list.

use crate::color::dictionary::PaletteDictionary;
use crate::io::configuration::{DEFAULT_WORD, WORD_PAGE_STEP};

/// Cursor over the sorted dictionary words
#[derive(Clone, Copy, Debug)]
pub struct WordNavigator {
    dictionary: &'static PaletteDictionary,
    index: usize,
}

impl Default for WordNavigator {
    fn default() -> Self {
        Self::new(PaletteDictionary::global())
    }
}

impl WordNavigator {
    /// Cursor starting at the default word
    pub fn new(dictionary: &'static PaletteDictionary) -> Self {
        Self {
            dictionary,
            index: dictionary.index_of(DEFAULT_WORD).unwrap_or(0),
        }
    }

    /// Word under the cursor
    pub fn current(&self) -> &'static str {
        self.dictionary
            .words()
            .get(self.index)
            .copied()
            .unwrap_or(DEFAULT_WORD)
    }

    /// Position in the sorted word list
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move by `delta` words with wraparound and return the new word
    pub fn step(&mut self, delta: i64) -> &'static str {
        let len = self.dictionary.len();
        if len > 0 {
            let len = len as i64;
            self.index = (self.index as i64 + delta).rem_euclid(len) as usize;
        }
        self.current()
    }

    /// Next word
    pub fn forward(&mut self) -> &'static str {
        self.step(1)
    }

    /// Previous word
    pub fn back(&mut self) -> &'static str {
        self.step(-1)
    }

    /// Ten words forward
    pub fn page_forward(&mut self) -> &'static str {
        self.step(WORD_PAGE_STEP as i64)
    }

    /// Ten words back
    pub fn page_back(&mut self) -> &'static str {
        self.step(-(WORD_PAGE_STEP as i64))
    }

    /// Move the cursor to `word` if the dictionary knows it
    ///
    /// Unknown words leave the cursor where it was. Returns whether the
    /// cursor moved onto `word`.
    pub fn sync(&mut self, word: &str) -> bool {
        match self.dictionary.index_of(word) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}
