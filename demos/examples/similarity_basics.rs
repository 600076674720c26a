// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-tree similarity with the pruned search.
//!
//! Scores every node of a small clustering against a package tree and shows how many
//! reference nodes each search visited.
//!
//! Run:
//! - `cargo run -p icicle_demos --example similarity_basics`
//! - `RUST_LOG=icicle_tree=trace cargo run -p icicle_demos --example similarity_basics`

use icicle_tree::{RawNode, Tree, TreeError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A -> [b, c]
    let query = Tree::build(
        "CC.I",
        RawNode::inner("A", vec![RawNode::leaf("b"), RawNode::leaf("c")]),
    )?;
    // X -> [b, d]
    let reference = Tree::build(
        "packages",
        RawNode::inner("X", vec![RawNode::leaf("b"), RawNode::leaf("d")]),
    )?;

    for id in query.ids() {
        let node = query.get(id);
        let mut visits = 0;
        let s = node.max_similarity_counted(reference.root_ref(), &mut visits);
        println!(
            "{:>3} {:?}  similarity {s:.3}  ({visits} reference nodes visited)",
            node.key(),
            node.leaf_keys(),
        );
    }

    // Similarity is not symmetric: only the second tree is searched.
    let b = query.get(query.find("b").unwrap_or(query.root()));
    println!(
        "b vs X = {:.3}, X vs b = {:.3}",
        b.max_similarity(reference.root_ref()),
        reference.root_ref().max_similarity(b),
    );
    Ok(())
}
