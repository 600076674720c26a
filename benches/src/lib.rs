// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic package and clustering trees for the benchmarks.

use icicle_tree::{RawNode, Tree};

/// Xorshift generator; deterministic across runs.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator. A zero seed is replaced, xorshift would stay at zero.
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform value in `0..n`.
    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n.max(1) as u64) as usize
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

/// Package tree with `fanout` children per inner node and `depth` inner levels below the root.
///
/// Leaves are named after their path, e.g. `p.0.3.1`.
pub fn packages(fanout: usize, depth: usize) -> Tree {
    fn level(prefix: &str, fanout: usize, depth: usize) -> RawNode {
        let children = (0..fanout)
            .map(|i| {
                let key = format!("{prefix}.{i}");
                if depth == 0 {
                    RawNode::leaf(key)
                } else {
                    level(&key, fanout, depth - 1)
                }
            })
            .collect();
        RawNode::inner(prefix, children)
    }
    Tree::build("packages", level("p", fanout, depth)).expect("generated tree is well formed")
}

/// Clustering of the leaves of `reference`: leaves are shuffled, then grouped recursively into
/// clusters of between two and `max_group` members.
pub fn clustering(reference: &Tree, max_group: usize, seed: u64) -> Tree {
    let mut rng = Rng::new(seed);
    let mut keys: Vec<String> = reference
        .leaves()
        .map(|id| reference.key(id).to_owned())
        .collect();
    for i in (1..keys.len()).rev() {
        keys.swap(i, rng.below(i + 1));
    }
    let mut nodes: Vec<RawNode> = keys.into_iter().map(RawNode::leaf).collect();
    let mut round = 0;
    while nodes.len() > max_group {
        let mut grouped = Vec::new();
        let mut rest = nodes.into_iter().peekable();
        while rest.peek().is_some() {
            let size = 2 + rng.below(max_group.saturating_sub(1).max(1));
            let members: Vec<RawNode> = rest.by_ref().take(size).collect();
            grouped.push(RawNode::inner(format!("c{round}.{}", grouped.len()), members));
        }
        nodes = grouped;
        round += 1;
    }
    Tree::build("CC.I", RawNode::inner("c", nodes)).expect("generated tree is well formed")
}
