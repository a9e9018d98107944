//! Snapshot history: the undo/redo timeline.
//!
//! The timeline is a list of whole-canvas snapshots plus a cursor marking
//! the entry the live canvas currently reflects. Undo and redo only move
//! the cursor; committing while the cursor sits before the tail discards
//! the abandoned redo branch first (linear undo). Every entry is a value
//! copy taken at commit time, and undo/redo hand back borrowed entries the
//! caller clones into the live canvas, so no stored snapshot ever aliases
//! live data. That copy discipline is the invariant everything else in the
//! engine leans on, because the open stroke is mutated in place while a
//! gesture is live.

use crate::stroke::Stroke;

/// Maximum number of history entries to keep.
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo timeline of whole-canvas snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// Committed snapshots, oldest first. Never empty.
    entries: Vec<Vec<Stroke>>,
    /// Index of the entry the canvas currently reflects.
    cursor: usize,
}

impl History {
    /// Create a timeline holding a single entry: a copy of `initial`.
    ///
    /// An empty canvas is itself a valid zero-stroke entry, so the
    /// timeline is never empty and the cursor is always a valid index.
    pub fn new(initial: &[Stroke]) -> Self {
        Self {
            entries: vec![initial.to_vec()],
            cursor: 0,
        }
    }

    /// Commit a new snapshot after the current cursor position.
    ///
    /// Entries after the cursor (the redo branch) are discarded, a copy of
    /// `canvas` is appended, and the cursor moves to the new tail. When the
    /// timeline then exceeds [`MAX_HISTORY`] the oldest entries are dropped
    /// from the front and the cursor shifts with them.
    pub fn commit(&mut self, canvas: &[Stroke]) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(canvas.to_vec());
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > MAX_HISTORY {
            let overflow = self.entries.len() - MAX_HISTORY;
            self.entries.drain(0..overflow);
            self.cursor -= overflow;
        }
    }

    /// Step the cursor back and return the entry it lands on.
    /// Returns `None` at the oldest entry (boundary, not an error).
    pub fn undo(&mut self) -> Option<&[Stroke]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step the cursor forward and return the entry it lands on.
    /// Returns `None` at the newest entry (boundary, not an error).
    pub fn redo(&mut self) -> Option<&[Stroke]> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The entry the cursor currently points at.
    pub fn current(&self) -> &[Stroke] {
        &self.entries[self.cursor]
    }

    /// Number of entries in the timeline.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` after construction; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
