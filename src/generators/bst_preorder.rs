// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Preorder traversals of every binary search tree over keys {1..N}.
//!
//! A sequence is a BST preorder exactly when inserting it through a stack
//! never violates a lower bound: each key larger than the stack top is the
//! right child of some ancestor, the ancestors it passes are popped, and the
//! last one popped becomes a strict lower bound for every later key.
//!
//! The generator simulates that stack while choosing keys. The bound stack,
//! its height and the current lower bound are trailed, so a pop after
//! recursion restores the overwritten stack slot instead of copying the
//! stack per level. Each level scans keys in ascending order and stops at the
//! first key whose bound would exceed the smallest key still to be placed;
//! every push therefore leads to at least one complete preorder.

use crate::context::GenerationContext;
use crate::engine::{Constraint, Feasibility};
use crate::error::{GenerateError, MAX_SEQUENCE_LENGTH};
use crate::trail::{Trailed, TrailedArray, TrailedStore};

/// All BST preorders over {1..N}, in lexicographic order.
///
/// There are Catalan(N) of them.
///
/// # Example
///
/// ```
/// use seqgen::engine::generate;
/// use seqgen::generators::BstPreorders;
///
/// let all: Vec<Vec<usize>> = generate(BstPreorders::new(3)).collect();
/// assert_eq!(all.len(), 5);
/// assert_eq!(all[0], vec![1, 2, 3]);
/// assert_eq!(all[4], vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct BstPreorders {
    keys: usize,
}

/// Trailed pruning state.
#[derive(Debug, Clone, Copy)]
pub struct BstRegisters {
    /// `used[x - 1]` is set once key `x` is in the partial sequence.
    pub used: TrailedArray<bool>,
    /// Simulated insertion stack; only the first `top` slots are live.
    pub bound_stack: TrailedArray<usize>,
    /// Height of the insertion stack.
    pub top: Trailed<usize>,
    /// Every key placed from now on must exceed this bound.
    pub lower: Trailed<usize>,
}

/// Scan over one position.
///
/// `top` and `lower` start from the registers and only move one way as the
/// candidate grows: a larger key pops at least the same ancestors. Keeping
/// them across candidates makes the popping amortized O(1) per level.
#[derive(Debug, Clone)]
pub struct BstScan {
    next: usize,
    top: usize,
    lower: usize,
    min_unused: usize,
}

impl BstPreorders {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }

    /// Like [`BstPreorders::new`], rejecting more than
    /// [`MAX_SEQUENCE_LENGTH`] keys.
    pub fn checked(keys: usize) -> Result<Self, GenerateError> {
        GenerateError::check_length("bst-preorders", keys)?;
        Ok(Self::new(keys))
    }

    pub fn keys(&self) -> usize {
        self.keys
    }

    fn is_used(ctx: &GenerationContext<Self>, key: usize) -> bool {
        ctx.get(ctx.registers.used.at(key - 1))
    }

    /// Smallest unused key strictly greater than `after`, or N + 1.
    fn next_unused(&self, ctx: &GenerationContext<Self>, after: usize) -> usize {
        (after + 1..=self.keys)
            .find(|&key| !Self::is_used(ctx, key))
            .unwrap_or(self.keys + 1)
    }
}

impl Constraint for BstPreorders {
    type Item = usize;
    type Registers = BstRegisters;
    type Scan = BstScan;

    fn initialize(&self, store: &mut TrailedStore) -> BstRegisters {
        BstRegisters {
            used: store.register_array(self.keys, false),
            bound_stack: store.register_array(self.keys, 0usize),
            top: store.register(0usize),
            lower: store.register(0usize),
        }
    }

    fn length_hint(&self) -> usize {
        self.keys.min(MAX_SEQUENCE_LENGTH)
    }

    fn is_complete(&self, ctx: &GenerationContext<Self>) -> bool {
        ctx.depth() == self.keys
    }

    fn open(&self, ctx: &GenerationContext<Self>) -> BstScan {
        BstScan {
            next: 1,
            top: ctx.get(ctx.registers.top),
            lower: ctx.get(ctx.registers.lower),
            min_unused: self.next_unused(ctx, 0),
        }
    }

    fn next_candidate(&self, _ctx: &GenerationContext<Self>, scan: &mut BstScan) -> Option<usize> {
        let key = scan.next;
        if key > self.keys {
            return None;
        }
        scan.next += 1;
        Some(key)
    }

    /// Monotonicity: `scan.lower` never decreases as `key` grows. If `key` is
    /// the smallest unused key the bound must stay below the next unused one;
    /// any larger key leaves the smallest unused key itself still to place, and
    /// that is no larger. So once the bound reaches the key that must follow,
    /// no larger candidate can do better.
    fn can_append(&self, ctx: &GenerationContext<Self>, scan: &mut BstScan, key: usize) -> Feasibility {
        let stack = ctx.registers.bound_stack;
        while scan.top > 0 {
            let ancestor = ctx.get(stack.at(scan.top - 1));
            if key <= ancestor {
                break;
            }
            scan.lower = ancestor;
            scan.top -= 1;
        }

        if Self::is_used(ctx, key) {
            return Feasibility::Skip;
        }

        let next_min_unused = if key == scan.min_unused {
            self.next_unused(ctx, key)
        } else {
            scan.min_unused
        };

        if scan.lower >= next_min_unused {
            Feasibility::Exhausted
        } else {
            Feasibility::Feasible
        }
    }

    fn apply(&self, ctx: &mut GenerationContext<Self>, scan: &BstScan, key: usize) {
        let registers = ctx.registers;
        ctx.set(registers.used.at(key - 1), true);
        ctx.set(registers.bound_stack.at(scan.top), key);
        ctx.set(registers.top, scan.top + 1);
        ctx.maybe_set(registers.lower, scan.lower);
    }

    fn name(&self) -> &str {
        "bst-preorders"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use crate::state::Counters;

    #[test]
    fn test_three_keys() {
        let all: Vec<Vec<usize>> = generate(BstPreorders::new(3)).collect();
        assert_eq!(
            all,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_zero_and_one_key() {
        let none: Vec<Vec<usize>> = generate(BstPreorders::new(0)).collect();
        assert_eq!(none, vec![Vec::<usize>::new()]);
        let one: Vec<Vec<usize>> = generate(BstPreorders::new(1)).collect();
        assert_eq!(one, vec![vec![1]]);
    }

    #[test]
    fn test_catalan_counts() {
        let expected = [1, 1, 2, 5, 14, 42, 132, 429, 1430];
        for (keys, &count) in expected.iter().enumerate() {
            assert_eq!(generate(BstPreorders::new(keys)).count(), count, "keys = {}", keys);
        }
    }

    #[test]
    fn test_no_dead_end_pushes() {
        // Level sizes for N = 4 are the number of distinct valid prefixes of
        // each length; every one of them is extended to a complete preorder.
        let mut engine = generate(BstPreorders::new(4));
        while engine.advance().is_some() {}
        let stats = engine.statistics();
        assert_eq!(stats.get(Counters::Emitted), 14);
        assert_eq!(stats.get(Counters::Appended), 4 + 9 + 14 + 14);
    }

    #[test]
    fn test_pruning_state_restored() {
        let mut engine = generate(BstPreorders::new(5));
        let initial = engine.context().pruning_snapshot();
        while engine.advance().is_some() {}
        assert_eq!(engine.context().pruning_snapshot(), initial);
        assert!(engine.context().trail.is_empty());
    }

    #[test]
    fn test_checked() {
        assert!(BstPreorders::checked(MAX_SEQUENCE_LENGTH).is_ok());
        assert!(BstPreorders::checked(MAX_SEQUENCE_LENGTH + 1).is_err());
    }
}
