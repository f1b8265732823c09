// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! K-element subsets of {1..N}, each listed in increasing order.
//!
//! The only pruning state is the last value chosen, which the partial
//! sequence already holds, so no trailed registers are needed.

use crate::context::GenerationContext;
use crate::engine::{Constraint, Feasibility};
use crate::error::{GenerateError, MAX_SEQUENCE_LENGTH};
use crate::trail::TrailedStore;

/// All k-of-n combinations in lexicographic order.
///
/// K > N is an infeasible domain and yields nothing; use
/// [`Combinations::checked`] to reject it instead.
///
/// # Example
///
/// ```
/// use seqgen::engine::generate;
/// use seqgen::generators::Combinations;
///
/// assert_eq!(generate(Combinations::new(5, 3)).count(), 10);
/// assert_eq!(generate(Combinations::new(3, 5)).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, k }
    }

    /// Like [`Combinations::new`], failing with
    /// [`GenerateError::InvalidArgument`] when K > N.
    pub fn checked(n: usize, k: usize) -> Result<Self, GenerateError> {
        if k > n {
            return Err(GenerateError::InvalidArgument {
                generator: "combinations",
                reason: format!("k = {} exceeds n = {}", k, n),
            });
        }
        GenerateError::check_length("combinations", k)?;
        Ok(Self::new(n, k))
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl Constraint for Combinations {
    type Item = usize;
    type Registers = ();
    type Scan = usize;

    fn initialize(&self, _store: &mut TrailedStore) {}

    fn length_hint(&self) -> usize {
        self.k.min(MAX_SEQUENCE_LENGTH)
    }

    fn is_complete(&self, ctx: &GenerationContext<Self>) -> bool {
        ctx.depth() == self.k
    }

    /// Values must strictly increase, so the scan starts just past the last
    /// value chosen.
    fn open(&self, ctx: &GenerationContext<Self>) -> usize {
        ctx.last().map_or(1, |last| last + 1)
    }

    fn next_candidate(&self, _ctx: &GenerationContext<Self>, scan: &mut usize) -> Option<usize> {
        let value = *scan;
        if value > self.n {
            return None;
        }
        *scan += 1;
        Some(value)
    }

    /// Choosing `value` leaves `n - value` larger values for the slots still
    /// open after it. That count only shrinks as `value` grows, so the first
    /// value that leaves too few ends the scan.
    fn can_append(&self, ctx: &GenerationContext<Self>, _scan: &mut usize, value: usize) -> Feasibility {
        let open_slots = self.k - ctx.depth();
        if open_slots <= self.n - value + 1 {
            Feasibility::Feasible
        } else {
            Feasibility::Exhausted
        }
    }

    fn apply(&self, _ctx: &mut GenerationContext<Self>, _scan: &usize, _value: usize) {}

    fn name(&self) -> &str {
        "combinations"
    }
}
