// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-to-node inversion of a [`Layout`].
//!
//! No spatial index is needed: the horizontal scale yields the depth directly and the partition
//! offsets order siblings, so a lookup is one descent of at most `levels - 1` steps.

use icicle_tree::{NodeId, Tree};
use kurbo::Point;
use tracing::trace;

use crate::layout::Layout;

/// Result of a hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The matched node.
    pub node: NodeId,
    /// Path from root to node (inclusive).
    pub path: Vec<NodeId>,
}

impl Layout {
    /// The node whose rectangle band contains `pt`, or `None` over empty canvas.
    ///
    /// Inverts the horizontal scale to a depth `d` and the vertical scale to a weight position
    /// `v`, then descends `d` times from the root, each time into the first child whose
    /// partition cell ends at or after `v`. A leaf reached before depth `d` is still hit while
    /// `pt` lies inside its rectangle, since leaves are `leaf_width` wide at any depth and may
    /// reach into deeper bands. Misses are an ordinary outcome: points outside the canvas, below
    /// the last sibling, or to the right of a shallow leaf.
    ///
    /// `tree` must be the tree this layout was computed for.
    pub fn node_at(&self, tree: &Tree, pt: Point) -> Option<NodeId> {
        let size = self.size();
        if !(0.0..size.height).contains(&pt.y) {
            return None;
        }
        let depth = self.x_scale().level_at(pt.x)?;
        let v = self.y_scale().invert(pt.y);

        let mut node = tree.root();
        for _ in 0..depth {
            if tree.is_leaf(node) {
                return (pt.x < self.rect(node).rect.x1).then_some(node);
            }
            let next = tree
                .children(node)
                .iter()
                .copied()
                .find(|&c| self.offset(c) + self.extent(c) >= v);
            match next {
                Some(child) => node = child,
                None => {
                    trace!(x = pt.x, y = pt.y, depth, "hit test fell off the tree");
                    return None;
                }
            }
        }
        Some(node)
    }

    /// [`Layout::node_at`] together with the root→node path.
    pub fn hit_test_point(&self, tree: &Tree, pt: Point) -> Option<Hit> {
        let node = self.node_at(tree, pt)?;
        Some(Hit {
            node,
            path: tree.path_to_root(node),
        })
    }
}
