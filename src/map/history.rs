//! Snapshot-based undo and redo
//!
//! The undo stack always holds the current state on top, seeded with the
//! initial state. Recording a new state clears the redo stack.

use crate::io::error::{Result, WordTileError};

/// Undo/redo stacks of full state snapshots
#[derive(Debug, Clone)]
pub struct History<T> {
    undo_stack: Vec<T>,
    redo_stack: Vec<T>,
}

impl<T: Clone> History<T> {
    /// Start a history whose only entry is `initial`
    pub fn new(initial: T) -> Self {
        Self {
            undo_stack: vec![initial],
            redo_stack: Vec::new(),
        }
    }

    /// Record a new state after a discrete edit
    pub fn record(&mut self, state: T) {
        self.undo_stack.push(state);
        self.redo_stack.clear();
    }

    /// Step back to the previous snapshot
    ///
    /// # Errors
    ///
    /// Returns `HistoryExhausted` when only the initial snapshot remains
    pub fn undo(&mut self) -> Result<&T> {
        if self.undo_stack.len() <= 1 {
            return Err(WordTileError::HistoryExhausted { action: "undo" });
        }

        if let Some(state) = self.undo_stack.pop() {
            self.redo_stack.push(state);
        }
        self.undo_stack
            .last()
            .ok_or(WordTileError::HistoryExhausted { action: "undo" })
    }

    /// Re-apply the most recently undone snapshot
    ///
    /// # Errors
    ///
    /// Returns `HistoryExhausted` when nothing has been undone since the last
    /// recorded edit
    pub fn redo(&mut self) -> Result<&T> {
        let state = self
            .redo_stack
            .pop()
            .ok_or(WordTileError::HistoryExhausted { action: "redo" })?;
        self.undo_stack.push(state);
        self.undo_stack
            .last()
            .ok_or(WordTileError::HistoryExhausted { action: "redo" })
    }

    /// Snapshot on top of the undo stack
    pub fn current(&self) -> Option<&T> {
        self.undo_stack.last()
    }

    /// Check whether `undo` would succeed
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Check whether `redo` would succeed
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack, the current one included
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots waiting to be redone
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
