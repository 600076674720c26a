// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-tree similarity: Jaccard overlap of leaf-key sets, maximized over a reference subtree.
//!
//! ## Asymmetry
//!
//! [`NodeRef::max_similarity`] descends into the *argument's* subtree only. The receiver is a
//! node of the tree being shaded (the "query"), the argument anchors the tree it is compared
//! against (the "reference"), whose finer substructure may match the query node better than the
//! anchor itself. `a.max_similarity(b)` and `b.max_similarity(a)` generally differ.
//!
//! ## Pruning
//!
//! A descendant's leaf set is a subset of its ancestor's, so once the intersection with the
//! query's leaf set is empty no descendant can score above zero and the subtree is skipped.
//! A perfect score of `1` ends the search as well.

use tracing::trace;

use crate::sets::{intersection_len, union_len};
use crate::tree::NodeRef;

impl NodeRef<'_> {
    /// Jaccard index `|A ∩ B| / |A ∪ B|` of the two nodes' leaf-key sets.
    pub fn jaccard(self, other: NodeRef<'_>) -> f64 {
        let a = self.leaf_keys();
        let b = other.leaf_keys();
        let shared = intersection_len(a, b);
        if shared == 0 {
            return 0.0;
        }
        ratio(shared, union_len(a, b, shared))
    }

    /// Highest Jaccard index between `self` and `reference` or any of its descendants.
    ///
    /// Always in `[0, 1]`; `1` for nodes with identical leaf sets.
    pub fn max_similarity(self, reference: NodeRef<'_>) -> f64 {
        self.max_similarity_counted(reference, &mut 0)
    }

    /// [`NodeRef::max_similarity`], adding the number of reference nodes examined to `visits`.
    pub fn max_similarity_counted(self, reference: NodeRef<'_>, visits: &mut usize) -> f64 {
        *visits += 1;
        let a = self.leaf_keys();
        let b = reference.leaf_keys();
        let shared = intersection_len(a, b);
        if shared == 0 {
            trace!(query = self.key(), reference = reference.key(), "disjoint, pruned");
            return 0.0;
        }

        let mut best = ratio(shared, union_len(a, b, shared));
        if best >= 1.0 {
            return 1.0;
        }
        for child in reference.children() {
            best = best.max(self.max_similarity_counted(child, visits));
            if best >= 1.0 {
                break;
            }
        }
        best
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Leaf counts stay far below 2^52."
)]
fn ratio(num: usize, den: usize) -> f64 {
    num as f64 / den as f64
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::raw::RawNode;
    use crate::tree::Tree;

    fn query() -> Tree {
        // A -> [B(b), C(c)]
        Tree::build(
            "query",
            RawNode::inner("A", vec![RawNode::leaf("b"), RawNode::leaf("c")]),
        )
        .unwrap()
    }

    fn reference() -> Tree {
        // X -> [Y(b), Z(d)]
        Tree::build(
            "reference",
            RawNode::inner("X", vec![RawNode::leaf("b"), RawNode::leaf("d")]),
        )
        .unwrap()
    }

    #[test]
    fn worked_example() {
        let q = query();
        let r = reference();
        let a = q.root_ref();
        let x = r.root_ref();
        let y = r.get(r.find("b").unwrap());
        let z = r.get(r.find("d").unwrap());

        assert!((a.jaccard(x) - 1.0 / 3.0).abs() < 1e-12);
        assert!((a.max_similarity(y) - 0.5).abs() < 1e-12);
        assert_eq!(a.max_similarity(z), 0.0);
        assert!(
            (a.max_similarity(x) - 0.5).abs() < 1e-12,
            "the child Y beats X's own 1/3"
        );
    }

    #[test]
    fn reflexive_and_short_circuits_at_top() {
        let q = query();
        let mut visits = 0;
        let s = q.root_ref().max_similarity_counted(q.root_ref(), &mut visits);
        assert_eq!(s, 1.0);
        assert_eq!(visits, 1, "identical sets stop at the first level");
    }

    #[test]
    fn disjoint_prunes_whole_subtree() {
        let q = Tree::build("q", RawNode::inner("r", vec![RawNode::leaf("m"), RawNode::leaf("n")]))
            .unwrap();
        let r = reference();
        let mut visits = 0;
        assert_eq!(
            q.root_ref().max_similarity_counted(r.root_ref(), &mut visits),
            0.0
        );
        assert_eq!(visits, 1, "no descendant of a disjoint reference is visited");
    }

    #[test]
    fn asymmetric_by_construction() {
        let q = query();
        let r = reference();
        // A against Y only sees Y's own set {b}; Y against A descends to the leaf b.
        let y = r.get(r.find("b").unwrap());
        let forward = q.root_ref().max_similarity(y);
        let backward = y.max_similarity(q.root_ref());
        assert!((forward - 0.5).abs() < 1e-12);
        assert_eq!(backward, 1.0, "leaf b of the query matches Y exactly");
    }

    #[test]
    fn bounded_for_every_pair() {
        let q = query();
        let r = reference();
        for a in q.ids() {
            for b in r.ids() {
                let s = q.get(a).max_similarity(r.get(b));
                assert!((0.0..=1.0).contains(&s), "{s} out of bounds");
            }
        }
    }
}
