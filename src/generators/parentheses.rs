// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Balanced parentheses with a fixed number of pairs.
//!
//! Every position chooses `(` or `)`. An opening bracket is allowed while
//! fewer than N have been placed; a closing bracket while it would close an
//! open one. Trying `(` first gives lexicographic output since `(` < `)`.

use std::fmt;

use crate::context::GenerationContext;
use crate::engine::{Constraint, Feasibility};
use crate::error::{GenerateError, MAX_SEQUENCE_LENGTH};
use crate::trail::{Trailed, TrailedStore};

/// One bracket. Ordered like the ASCII characters they print as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Paren {
    Open,
    Close,
}

impl Paren {
    pub fn as_char(self) -> char {
        match self {
            Paren::Open => '(',
            Paren::Close => ')',
        }
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Render a bracket sequence as a string, e.g. `(())`.
pub fn render(sequence: &[Paren]) -> String {
    sequence.iter().map(|paren| paren.as_char()).collect()
}

/// Balanced, properly nested strings of `pairs` bracket pairs.
///
/// # Example
///
/// ```
/// use seqgen::engine::generate;
/// use seqgen::generators::parentheses::{render, Parentheses};
///
/// let strings: Vec<String> = generate(Parentheses::new(2)).map(|s| render(&s)).collect();
/// assert_eq!(strings, vec!["(())", "()()"]);
/// ```
#[derive(Debug, Clone)]
pub struct Parentheses {
    pairs: usize,
}

/// Open and close counters, trailed.
#[derive(Debug, Clone, Copy)]
pub struct ParenthesesRegisters {
    pub open: Trailed<usize>,
    pub close: Trailed<usize>,
}

impl Parentheses {
    pub fn new(pairs: usize) -> Self {
        Self { pairs }
    }

    /// Like [`Parentheses::new`], rejecting strings longer than
    /// [`MAX_SEQUENCE_LENGTH`].
    pub fn checked(pairs: usize) -> Result<Self, GenerateError> {
        GenerateError::check_length("parentheses", pairs.saturating_mul(2))?;
        Ok(Self::new(pairs))
    }

    pub fn pairs(&self) -> usize {
        self.pairs
    }
}

impl Constraint for Parentheses {
    type Item = Paren;
    type Registers = ParenthesesRegisters;
    type Scan = Option<Paren>;

    fn initialize(&self, store: &mut TrailedStore) -> ParenthesesRegisters {
        ParenthesesRegisters {
            open: store.register(0usize),
            close: store.register(0usize),
        }
    }

    fn length_hint(&self) -> usize {
        self.pairs.min(MAX_SEQUENCE_LENGTH) * 2
    }

    fn is_complete(&self, ctx: &GenerationContext<Self>) -> bool {
        ctx.depth() == self.pairs.saturating_mul(2)
    }

    fn open(&self, _ctx: &GenerationContext<Self>) -> Option<Paren> {
        Some(Paren::Open)
    }

    fn next_candidate(
        &self,
        _ctx: &GenerationContext<Self>,
        scan: &mut Option<Paren>,
    ) -> Option<Paren> {
        let candidate = (*scan)?;
        *scan = match candidate {
            Paren::Open => Some(Paren::Close),
            Paren::Close => None,
        };
        Some(candidate)
    }

    fn can_append(
        &self,
        ctx: &GenerationContext<Self>,
        _scan: &mut Option<Paren>,
        candidate: Paren,
    ) -> Feasibility {
        let open = ctx.get(ctx.registers.open);
        let close = ctx.get(ctx.registers.close);
        match candidate {
            // Running out of `(` says nothing about `)`: no early break here.
            Paren::Open if open < self.pairs => Feasibility::Feasible,
            Paren::Open => Feasibility::Skip,
            // `)` is the largest candidate, so nothing is lost by stopping.
            Paren::Close if close < open => Feasibility::Feasible,
            Paren::Close => Feasibility::Exhausted,
        }
    }

    fn apply(&self, ctx: &mut GenerationContext<Self>, _scan: &Option<Paren>, candidate: Paren) {
        let counter = match candidate {
            Paren::Open => ctx.registers.open,
            Paren::Close => ctx.registers.close,
        };
        let value = ctx.get(counter);
        ctx.set(counter, value + 1);
    }

    fn name(&self) -> &str {
        "parentheses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use crate::state::Counters;

    fn strings(pairs: usize) -> Vec<String> {
        generate(Parentheses::new(pairs))
            .map(|sequence| render(&sequence))
            .collect()
    }

    #[test]
    fn test_three_pairs() {
        assert_eq!(
            strings(3),
            vec!["((()))", "(()())", "(())()", "()(())", "()()()"]
        );
    }

    #[test]
    fn test_zero_pairs() {
        assert_eq!(strings(0), vec![String::new()]);
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(strings(1), vec!["()"]);
    }

    #[test]
    fn test_paren_order_matches_ascii() {
        assert!(Paren::Open < Paren::Close);
        assert!(Paren::Open.as_char() < Paren::Close.as_char());
        assert_eq!(Paren::Close.to_string(), ")");
    }

    #[test]
    fn test_exhausted_open_brackets_are_skipped() {
        let mut engine = generate(Parentheses::new(4));
        while engine.advance().is_some() {}
        let stats = engine.statistics();
        assert_eq!(stats.get(Counters::Emitted), 14);
        assert!(stats.get(Counters::Skipped) > 0);
    }

    #[test]
    fn test_checked() {
        assert!(Parentheses::checked(32).is_ok());
        assert!(matches!(
            Parentheses::checked(33),
            Err(GenerateError::LengthExceeded { length: 66, .. })
        ));
    }
}
