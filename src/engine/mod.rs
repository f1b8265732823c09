// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first sequence engine.
//!
//! This module implements the backtracking driver shared by every generator.
//! The engine coordinates with the trail system to restore pruning state
//! exactly on every pop.
//!
//! # Architecture
//!
//! Recursion is replaced by an explicit stack of frames, one per open position.
//! Each frame tracks:
//! - The constraint's scan state for that position (which candidate is next)
//! - The trail checkpoint taken when the position was opened
//! - The partial sequence length at that point
//!
//! The execution loop:
//! 1. Re-enter the top frame: rewind the trail and truncate the partial
//!    sequence to the frame's checkpoint (the "pop" of the previous candidate)
//! 2. Ask for the next candidate; if there is none, drop the frame
//! 3. `Skip`: try the next candidate at the same position
//! 4. `Exhausted`: drop the frame without looking at larger candidates
//! 5. `Feasible`: push, apply, then either emit (complete) or open a new frame
//!
//! Because step 1 runs before anything else each time a frame is resumed, the
//! undo of a push cannot be bypassed, however the subtree below it ended.
//! Emission suspends the loop, which is what makes the engine a lazy iterator:
//! memory stays proportional to the sequence length, never to the number of
//! sequences produced.
//!
//! # Example
//!
//! ```
//! use seqgen::engine::generate;
//! use seqgen::generators::Combinations;
//!
//! let combos: Vec<Vec<usize>> = generate(Combinations::new(4, 2)).collect();
//! assert_eq!(combos.len(), 6);
//! assert_eq!(combos[0], vec![1, 2]);
//! assert_eq!(combos[5], vec![3, 4]);
//! ```

pub mod constraint;

pub use constraint::{Constraint, Feasibility};

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::context::GenerationContext;
use crate::state::{Counters, Statistics};

/// Stack entry tracking one open position.
#[derive(Debug)]
struct Frame<S> {
    /// Constraint-specific candidate scan.
    scan: S,

    /// Trail checkpoint for this position.
    trail_checkpoint: usize,

    /// Partial sequence length for this position.
    depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Exhausted,
}

/// Search engine that enumerates every complete sequence of a [`Constraint`].
///
/// The engine is consumed by iteration and cannot be restarted; call
/// [`generate`] again for a fresh enumeration.
#[derive(Debug)]
pub struct SequenceEngine<C: Constraint> {
    constraint: C,
    ctx: GenerationContext<C>,
    stack: Vec<Frame<C::Scan>>,
    phase: Phase,
}

/// Start enumerating the complete sequences of `constraint`.
pub fn generate<C: Constraint>(constraint: C) -> SequenceEngine<C> {
    SequenceEngine::new(constraint)
}

impl<C: Constraint> SequenceEngine<C> {
    /// Create an engine with freshly initialized pruning state.
    pub fn new(constraint: C) -> Self {
        let ctx = GenerationContext::new(&constraint);
        let stack = Vec::with_capacity(constraint.length_hint() + 1);
        Self {
            constraint,
            ctx,
            stack,
            phase: Phase::Fresh,
        }
    }

    /// Advance to the next complete sequence and borrow it.
    ///
    /// This is the allocation-free form of [`Iterator::next`]: the slice points
    /// into the engine's partial sequence and is only valid until the next call.
    pub fn advance(&mut self) -> Option<&[C::Item]> {
        match self.phase {
            Phase::Exhausted => return None,
            Phase::Fresh => {
                self.phase = Phase::Running;
                debug!(generator = self.constraint.name(), "starting generation");
                if self.constraint.is_complete(&self.ctx) {
                    // Nothing to choose: the empty sequence is the only solution.
                    self.ctx.statistics.increment_counter(Counters::Emitted);
                    return Some(self.ctx.partial());
                }
                self.open_frame();
            }
            Phase::Running => {}
        }

        if self.step() {
            Some(self.ctx.partial())
        } else {
            self.finish();
            None
        }
    }

    /// Counters accumulated so far by this run.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// The generation context (partial sequence, pruning state, trail).
    pub fn context(&self) -> &GenerationContext<C> {
        &self.ctx
    }

    /// The constraint being enumerated.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Run the loop until the next emission. Returns false once every frame
    /// has been exhausted.
    fn step(&mut self) -> bool {
        let Self {
            constraint,
            ctx,
            stack,
            ..
        } = self;

        while let Some(frame) = stack.last_mut() {
            ctx.backtrack_to(frame.trail_checkpoint, frame.depth);

            let Some(candidate) = constraint.next_candidate(ctx, &mut frame.scan) else {
                stack.pop();
                continue;
            };

            match constraint.can_append(ctx, &mut frame.scan, candidate) {
                Feasibility::Skip => {
                    ctx.statistics.increment_counter(Counters::Skipped);
                }
                Feasibility::Exhausted => {
                    ctx.statistics.increment_counter(Counters::Pruned);
                    trace!(depth = frame.depth, ?candidate, "pruned remaining candidates");
                    stack.pop();
                }
                Feasibility::Feasible => {
                    ctx.push(candidate);
                    constraint.apply(ctx, &frame.scan, candidate);
                    ctx.statistics.increment_counter(Counters::Appended);

                    if constraint.is_complete(ctx) {
                        ctx.statistics.increment_counter(Counters::Emitted);
                        return true;
                    }

                    let scan = constraint.open(ctx);
                    stack.push(Frame {
                        scan,
                        trail_checkpoint: ctx.trail.checkpoint(),
                        depth: ctx.depth(),
                    });
                }
            }
        }
        false
    }

    /// Push the frame for the next position of the current partial sequence.
    fn open_frame(&mut self) {
        let scan = self.constraint.open(&self.ctx);
        self.stack.push(Frame {
            scan,
            trail_checkpoint: self.ctx.trail.checkpoint(),
            depth: self.ctx.depth(),
        });
    }

    /// Tear down the run: empty partial sequence, pruning state back to its
    /// initial values.
    fn finish(&mut self) {
        self.phase = Phase::Exhausted;
        self.stack.clear();
        self.ctx.backtrack_to(0, 0);
        debug!(
            generator = self.constraint.name(),
            statistics = %self.ctx.statistics,
            "generation exhausted"
        );
    }
}

impl<C: Constraint> Iterator for SequenceEngine<C> {
    type Item = Vec<C::Item>;

    /// Copy out the next complete sequence.
    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[C::Item]>::to_vec)
    }

    fn count(mut self) -> usize {
        let mut count = 0;
        while self.advance().is_some() {
            count += 1;
        }
        count
    }
}

impl<C: Constraint> FusedIterator for SequenceEngine<C> {}
