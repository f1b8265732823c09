// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distinct permutations of a multiset.
//!
//! Items are sorted once up front, so equal items sit next to each other and
//! scanning indices in order visits values in ascending order. Of a run of
//! equal items, only the first unused one may be placed at a position; the
//! others would start the same subtrees again.

use std::fmt::Debug;

use crate::context::GenerationContext;
use crate::engine::{Constraint, Feasibility};
use crate::error::{GenerateError, MAX_SEQUENCE_LENGTH};
use crate::trail::{TrailedArray, TrailedStore};

/// Every distinct ordering of `items`, in lexicographic order.
///
/// # Example
///
/// ```
/// use seqgen::engine::generate;
/// use seqgen::generators::MultisetPermutations;
///
/// let all: Vec<Vec<i64>> = generate(MultisetPermutations::new(vec![2, 1, 1])).collect();
/// assert_eq!(all, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct MultisetPermutations<T> {
    items: Vec<T>,
}

/// Trailed pruning state: which sorted indices are in the partial sequence.
#[derive(Debug, Clone, Copy)]
pub struct PermutationRegisters {
    pub used: TrailedArray<bool>,
}

/// Scan over one position: the index being tried and the next one.
#[derive(Debug, Clone, Default)]
pub struct PermutationScan {
    current: usize,
    next: usize,
}

impl<T: Ord + Copy + Debug> MultisetPermutations<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_unstable();
        Self { items }
    }

    /// Like [`MultisetPermutations::new`], rejecting more than
    /// [`MAX_SEQUENCE_LENGTH`] items.
    pub fn checked(items: Vec<T>) -> Result<Self, GenerateError> {
        GenerateError::check_length("permutations", items.len())?;
        Ok(Self::new(items))
    }

    /// The items in sorted order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Ord + Copy + Debug> Constraint for MultisetPermutations<T> {
    type Item = T;
    type Registers = PermutationRegisters;
    type Scan = PermutationScan;

    fn initialize(&self, store: &mut TrailedStore) -> PermutationRegisters {
        PermutationRegisters {
            used: store.register_array(self.items.len(), false),
        }
    }

    fn length_hint(&self) -> usize {
        self.items.len().min(MAX_SEQUENCE_LENGTH)
    }

    fn is_complete(&self, ctx: &GenerationContext<Self>) -> bool {
        ctx.depth() == self.items.len()
    }

    fn open(&self, _ctx: &GenerationContext<Self>) -> PermutationScan {
        PermutationScan::default()
    }

    fn next_candidate(
        &self,
        _ctx: &GenerationContext<Self>,
        scan: &mut PermutationScan,
    ) -> Option<T> {
        let item = *self.items.get(scan.next)?;
        scan.current = scan.next;
        scan.next += 1;
        Some(item)
    }

    /// Rejections here are never monotonic: a used index or a later twin can
    /// be followed by a usable larger value, so both only skip.
    fn can_append(
        &self,
        ctx: &GenerationContext<Self>,
        scan: &mut PermutationScan,
        _item: T,
    ) -> Feasibility {
        let used = ctx.registers.used;
        let index = scan.current;
        if ctx.get(used.at(index)) {
            return Feasibility::Skip;
        }
        if index > 0 && self.items[index] == self.items[index - 1] && !ctx.get(used.at(index - 1)) {
            return Feasibility::Skip;
        }
        Feasibility::Feasible
    }

    fn apply(&self, ctx: &mut GenerationContext<Self>, scan: &PermutationScan, _item: T) {
        let used = ctx.registers.used;
        ctx.set(used.at(scan.current), true);
    }

    fn name(&self) -> &str {
        "permutations"
    }
}
