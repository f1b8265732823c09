// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generators.
//!
//! Each generator is a [`Constraint`](crate::engine::Constraint) for one
//! enumeration problem.
//!
//! # Organization
//!
//! - `parentheses`: balanced bracket strings of N pairs
//! - `combinations`: k-of-n subsets of {1..N}
//! - `bst_preorder`: preorders of every BST over {1..N}
//! - `permutations`: distinct orderings of a multiset
//!
//! Each one documents why its early `Exhausted` verdicts are safe, or why it
//! only ever skips.

pub mod bst_preorder;
pub mod combinations;
pub mod parentheses;
pub mod permutations;

pub use bst_preorder::BstPreorders;
pub use combinations::Combinations;
pub use parentheses::{Paren, Parentheses};
pub use permutations::MultisetPermutations;
