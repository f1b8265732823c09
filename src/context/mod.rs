// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation context: everything one run owns.
//!
//! The GenerationContext combines:
//! - The partial sequence, pushed and popped by the engine
//! - The constraint's trailed pruning state (registers + store)
//! - The trail that undoes pruning-state writes on backtrack
//! - Run statistics
//!
//! Nothing here is shared between runs, so independent generations never
//! contaminate each other and could run side by side.

use crate::engine::Constraint;
use crate::state::Statistics;
use crate::trail::{Trail, TrailValue, Trailed, TrailedStore};

/// Search context for one generation run.
///
/// # Memory Model
///
/// ```text
/// GenerationContext {
///     partial: Vec<Item>,        // O(N), pushed/popped, never copied
///     registers: C::Registers,   // handles into `store`
///     store: TrailedStore,       // pruning state words
///     trail: Trail,              // undo log for `store`
///     statistics: Statistics,
/// }
/// ```
///
/// # Example
///
/// ```
/// use seqgen::context::GenerationContext;
/// use seqgen::generators::Parentheses;
///
/// let mut ctx = GenerationContext::new(&Parentheses::new(2));
/// let open = ctx.registers.open;
///
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.set(open, 1);
/// assert_eq!(ctx.get(open), 1);
///
/// ctx.backtrack_to(checkpoint, 0);
/// assert_eq!(ctx.get(open), 0);
/// ```
#[derive(Debug)]
pub struct GenerationContext<C: Constraint> {
    /// Handles to the constraint's pruning slots
    pub registers: C::Registers,
    /// Trail for O(1) backtracking
    pub trail: Trail,
    /// Run counters
    pub statistics: Statistics,
    partial: Vec<C::Item>,
    store: TrailedStore,
}

impl<C: Constraint> GenerationContext<C> {
    /// Create a context with the constraint's pruning state freshly registered.
    pub fn new(constraint: &C) -> Self {
        let mut store = TrailedStore::new();
        let registers = constraint.initialize(&mut store);
        Self {
            registers,
            trail: Trail::new(),
            statistics: Statistics::new(),
            partial: Vec::with_capacity(constraint.length_hint()),
            store,
        }
    }

    /// The partial sequence built so far.
    pub fn partial(&self) -> &[C::Item] {
        &self.partial
    }

    /// Length of the partial sequence.
    pub fn depth(&self) -> usize {
        self.partial.len()
    }

    /// Most recently chosen element, if any.
    pub fn last(&self) -> Option<C::Item> {
        self.partial.last().copied()
    }

    // Safe trail wrapper methods
    // These ensure every write to pruning state lands on this context's trail

    /// Get the current value of a pruning slot.
    pub fn get<T: TrailValue>(&self, handle: Trailed<T>) -> T {
        self.store.get(handle)
    }

    /// Set a pruning slot with trail recording.
    pub fn set<T: TrailValue>(&mut self, handle: Trailed<T>, value: T) {
        self.store.set(&mut self.trail, handle, value);
    }

    /// Set a pruning slot only if the value changes.
    pub fn maybe_set<T: TrailValue>(&mut self, handle: Trailed<T>, value: T) -> bool {
        self.store.maybe_set(&mut self.trail, handle, value)
    }

    /// Raw words of the pruning state, for checking exact restoration.
    pub fn pruning_snapshot(&self) -> Vec<u64> {
        self.store.snapshot()
    }

    /// Append a chosen element.
    pub(crate) fn push(&mut self, item: C::Item) {
        self.partial.push(item);
    }

    /// Pop back to `depth` elements and undo every pruning-state write made
    /// after `checkpoint`.
    pub fn backtrack_to(&mut self, checkpoint: usize, depth: usize) {
        self.trail.rewind_to(checkpoint, &mut self.store);
        self.partial.truncate(depth);
    }
}
