// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint trait for the sequence engine.
//!
//! A constraint describes one enumeration problem: which candidates may occupy
//! the next position, in what order, and when a sequence is complete. The
//! engine owns the control flow (depth-first order, push, pop, emission); the
//! constraint only answers questions about the current partial sequence.
//!
//! # Example
//!
//! ```
//! use seqgen::context::GenerationContext;
//! use seqgen::engine::{generate, Constraint, Feasibility};
//! use seqgen::trail::TrailedStore;
//!
//! /// Binary strings of a fixed length.
//! #[derive(Debug)]
//! struct Bits(usize);
//!
//! impl Constraint for Bits {
//!     type Item = u8;
//!     type Registers = ();
//!     type Scan = u8;
//!
//!     fn initialize(&self, _store: &mut TrailedStore) {}
//!
//!     fn is_complete(&self, ctx: &GenerationContext<Self>) -> bool {
//!         ctx.depth() == self.0
//!     }
//!
//!     fn open(&self, _ctx: &GenerationContext<Self>) -> u8 {
//!         0
//!     }
//!
//!     fn next_candidate(&self, _ctx: &GenerationContext<Self>, scan: &mut u8) -> Option<u8> {
//!         let bit = *scan;
//!         *scan += 1;
//!         (bit < 2).then_some(bit)
//!     }
//!
//!     fn can_append(&self, _ctx: &GenerationContext<Self>, _scan: &mut u8, _bit: u8) -> Feasibility {
//!         Feasibility::Feasible
//!     }
//!
//!     fn apply(&self, _ctx: &mut GenerationContext<Self>, _scan: &u8, _bit: u8) {}
//! }
//!
//! let all: Vec<Vec<u8>> = generate(Bits(2)).collect();
//! assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
//! ```

use std::fmt::Debug;

use crate::context::GenerationContext;
use crate::trail::TrailedStore;

/// Verdict of [`Constraint::can_append`] for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    /// The candidate extends the partial sequence to a valid prefix.
    Feasible,

    /// The candidate is infeasible, but a larger candidate may still fit.
    /// The engine moves on to the next candidate (`continue`).
    Skip,

    /// The candidate is infeasible and so is every larger one.
    /// The engine abandons this position immediately (`break`).
    ///
    /// Only return this when infeasibility is monotonic in candidate order;
    /// otherwise solutions are silently lost.
    Exhausted,
}

/// One enumeration problem plugged into the [`SequenceEngine`](super::SequenceEngine).
///
/// # Lifecycle
///
/// 1. `initialize` registers the trailed pruning slots for a fresh run
/// 2. If `is_complete` holds for the current partial sequence, it is emitted
/// 3. Otherwise `open` starts a scan over the next position's domain
/// 4. `next_candidate` yields candidates in ascending order; each is judged by
///    `can_append`
/// 5. A feasible candidate is pushed by the engine and `apply` updates the
///    pruning state through the trail
/// 6. On backtrack the engine truncates the partial sequence and rewinds the
///    trail, so `apply` never needs an inverse
///
/// Emission order is lexicographic exactly when `next_candidate` is ascending.
pub trait Constraint: Debug + Sized {
    /// Element type of the generated sequences.
    type Item: Copy + Debug;

    /// Handles to the trailed pruning slots, created by `initialize`.
    type Registers: Debug;

    /// Per-position scan state, alive while one position's candidates are tried.
    ///
    /// Unlike the registers this is not trailed: it carries information from
    /// one candidate to the next at the same depth.
    type Scan: Debug;

    /// Register pruning state for a new run.
    fn initialize(&self, store: &mut TrailedStore) -> Self::Registers;

    /// Expected length of a complete sequence, used to pre-size buffers.
    fn length_hint(&self) -> usize {
        0
    }

    /// Completion predicate.
    fn is_complete(&self, ctx: &GenerationContext<Self>) -> bool;

    /// Begin scanning candidates for the next position.
    fn open(&self, ctx: &GenerationContext<Self>) -> Self::Scan;

    /// Next candidate in ascending domain order, or `None` when the domain is
    /// exhausted.
    fn next_candidate(
        &self,
        ctx: &GenerationContext<Self>,
        scan: &mut Self::Scan,
    ) -> Option<Self::Item>;

    /// Feasibility predicate for `candidate` at the current position.
    fn can_append(
        &self,
        ctx: &GenerationContext<Self>,
        scan: &mut Self::Scan,
        candidate: Self::Item,
    ) -> Feasibility;

    /// Update pruning state after `candidate` was pushed.
    ///
    /// All writes must go through [`GenerationContext::set`] so they are
    /// undone on backtrack.
    fn apply(&self, ctx: &mut GenerationContext<Self>, scan: &Self::Scan, candidate: Self::Item);

    /// Get a name for this constraint (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
