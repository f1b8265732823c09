// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the sequence generator.
//!
//! Pruning state is never copied on push. Instead every write to a trailed
//! slot records the word it overwrote, and rewinding to a checkpoint replays
//! those records in reverse. After a pop the pruning state is therefore exactly
//! what it was before the matching push.
//!
//! A checkpoint is simply the trail length at the time it was taken, so nested
//! checkpoints need no bookkeeping of their own.

pub mod trailed;

pub use trailed::{TrailValue, Trailed, TrailedArray, TrailedStore};

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailEntry {
    /// Slot that was overwritten
    pub(crate) id: usize,
    /// The word held by the slot before the change
    pub(crate) old_value: u64,
}

/// Receiver of restored words during a rewind.
///
/// Implemented by [`TrailedStore`]; the trail itself never owns the values it
/// protects.
pub trait TrailRestore {
    /// Put `old_value` back into slot `id`.
    fn restore(&mut self, id: usize, old_value: u64);
}

/// The trail: an undo log for pruning state.
///
/// Each generation run owns its own trail, so independent runs never observe
/// each other's changes.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Typical trail depth for the instantiations in this crate.
    const INITIAL_CAPACITY: usize = 256;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Take a checkpoint that can later be passed to [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    ///
    /// Rewinding to a checkpoint at or beyond the current length is a no-op.
    pub fn rewind_to<R: TrailRestore>(&mut self, checkpoint: usize, target: &mut R) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                target.restore(entry.id, entry.old_value);
            }
        }
    }

    /// Record a state change (internal use only).
    pub(crate) fn record_change(&mut self, id: usize, old_value: u64) {
        self.entries.push(TrailEntry { id, old_value });
    }

    /// Entries recorded after `checkpoint`, oldest first.
    #[cfg(test)]
    fn entries_since(&self, checkpoint: usize) -> &[TrailEntry] {
        &self.entries[checkpoint.min(self.entries.len())..]
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
