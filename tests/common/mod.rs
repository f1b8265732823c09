// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use seqgen::generators::Paren;

/// The nth Catalan number.
pub fn catalan(n: usize) -> usize {
    binomial(2 * n, n) / (n + 1)
}

/// C(n, k), zero when k > n.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Balanced and properly nested: no prefix closes more than it opens.
pub fn is_balanced(sequence: &[Paren]) -> bool {
    let mut depth = 0i64;
    for paren in sequence {
        depth += match paren {
            Paren::Open => 1,
            Paren::Close => -1,
        };
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

/// Every string of length `2 * pairs` over `(`/`)` that is balanced, sorted.
pub fn brute_force_parentheses(pairs: usize) -> Vec<Vec<Paren>> {
    let length = 2 * pairs;
    let mut all: Vec<Vec<Paren>> = (0u32..1 << length)
        .map(|bits| {
            (0..length)
                .map(|i| {
                    if bits & (1 << (length - 1 - i)) == 0 {
                        Paren::Open
                    } else {
                        Paren::Close
                    }
                })
                .collect()
        })
        .filter(|sequence: &Vec<Paren>| is_balanced(sequence))
        .collect();
    all.sort();
    all
}

#[derive(Debug)]
struct Node {
    key: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

fn insert(node: &mut Option<Box<Node>>, key: usize) {
    match node {
        None => {
            *node = Some(Box::new(Node {
                key,
                left: None,
                right: None,
            }))
        }
        Some(n) if key < n.key => insert(&mut n.left, key),
        Some(n) => insert(&mut n.right, key),
    }
}

fn preorder(node: &Option<Box<Node>>, out: &mut Vec<usize>) {
    if let Some(n) = node {
        out.push(n.key);
        preorder(&n.left, out);
        preorder(&n.right, out);
    }
}

/// Insert `keys` into an empty BST in order and return its preorder.
pub fn bst_preorder_of(keys: &[usize]) -> Vec<usize> {
    let mut root = None;
    for &key in keys {
        insert(&mut root, key);
    }
    let mut out = Vec::with_capacity(keys.len());
    preorder(&root, &mut out);
    out
}

/// Sorted, deduplicated permutations of `items`, by plain recursion.
pub fn brute_force_permutations(items: &[i64]) -> Vec<Vec<i64>> {
    fn recurse(rest: &mut Vec<i64>, current: &mut Vec<i64>, out: &mut Vec<Vec<i64>>) {
        if rest.is_empty() {
            out.push(current.clone());
            return;
        }
        for i in 0..rest.len() {
            let item = rest.remove(i);
            current.push(item);
            recurse(rest, current, out);
            current.pop();
            rest.insert(i, item);
        }
    }
    let mut out = Vec::new();
    recurse(&mut items.to_vec(), &mut Vec::new(), &mut out);
    out.sort();
    out.dedup();
    out
}

/// Whether `sequences` is in strictly increasing lexicographic order.
pub fn strictly_sorted<T: Ord>(sequences: &[Vec<T>]) -> bool {
    sequences.windows(2).all(|pair| pair[0] < pair[1])
}
