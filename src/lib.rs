// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking generator for constrained sequences.
//!
//! Builds sequences element by element under positional constraints and emits
//! every complete valid sequence exactly once, in lexicographic order, without
//! exploring branches that cannot be completed.
//!
//! # Architecture
//!
//! ## Engine
//!
//! [`SequenceEngine`] drives a depth-first search over an explicit stack of
//! frames and is exposed as a lazy [`Iterator`]. It knows nothing about any
//! particular problem.
//!
//! ## Constraints
//!
//! A [`Constraint`] supplies the ordered candidate domain, the feasibility
//! verdict for each candidate and the completion test. The verdict
//! distinguishes a plain skip from an early break, which is only legal when
//! infeasibility is monotonic in candidate order.
//!
//! ## Trail
//!
//! Pruning state lives in trailed slots. Every write records the overwritten
//! word, and backtracking rewinds the trail, so state after a pop is exactly
//! the state before the matching push.
//!
//! # Generators
//!
//! - [`generators::Parentheses`]: balanced parentheses
//! - [`generators::Combinations`]: k-of-n combinations
//! - [`generators::BstPreorders`]: BST preorders over {1..N}
//! - [`generators::MultisetPermutations`]: distinct multiset permutations
//!
//! # Example
//!
//! ```
//! use seqgen::generate;
//! use seqgen::generators::parentheses::{render, Parentheses};
//!
//! let first = generate(Parentheses::new(3)).next().map(|s| render(&s));
//! assert_eq!(first.as_deref(), Some("((()))"));
//! ```

pub mod context;
pub mod driver;
pub mod engine;
pub mod error;
pub mod generators;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::GenerationContext;
pub use engine::{generate, Constraint, Feasibility, SequenceEngine};
pub use error::{GenerateError, MAX_SEQUENCE_LENGTH};
pub use trail::Trail;
