// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node value functions: the per-node quantity an inner node is shaded by.
//!
//! Any `FnMut(NodeRef<'_>) -> V` is a [`NodeValue`]. The types here are the ones the comparison
//! view needs: similarity of a clustering node to the reference tree ([`SimilarityTo`]), the
//! best similarity against several clusterings ([`BestMatch`]), and [`ReferenceView`], which
//! picks between the two depending on which tree is being drawn.

use icicle_tree::{NodeRef, REFERENCE_CONCEPT, Tree, TreeError, TreeRegistry};

/// Computes the value of a node. Called at most once per node by a
/// [`ValueCache`](crate::ValueCache).
pub trait NodeValue<V> {
    /// Value of `node`.
    fn value(&mut self, node: NodeRef<'_>) -> V;
}

impl<V, F: FnMut(NodeRef<'_>) -> V> NodeValue<V> for F {
    fn value(&mut self, node: NodeRef<'_>) -> V {
        self(node)
    }
}

/// Shading intensity in `[0, 1]` together with the coupling concept that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shade {
    /// Best similarity found.
    pub intensity: f64,
    /// Concept of the tree the best similarity was found in, if any.
    pub concept: Option<String>,
}

/// Similarity of each node to the whole of one reference tree.
#[derive(Copy, Clone, Debug)]
pub struct SimilarityTo<'a> {
    reference: &'a Tree,
}

impl<'a> SimilarityTo<'a> {
    /// Score nodes against `reference`.
    pub fn new(reference: &'a Tree) -> Self {
        Self { reference }
    }
}

impl NodeValue<f64> for SimilarityTo<'_> {
    fn value(&mut self, node: NodeRef<'_>) -> f64 {
        node.max_similarity(self.reference.root_ref())
    }
}

impl NodeValue<Shade> for SimilarityTo<'_> {
    fn value(&mut self, node: NodeRef<'_>) -> Shade {
        Shade {
            intensity: node.max_similarity(self.reference.root_ref()),
            concept: Some(self.reference.coupling_concept().into()),
        }
    }
}

/// Highest similarity of each node against several candidate trees.
///
/// The first candidate wins ties. With no candidates every node gets intensity `0`.
#[derive(Clone, Debug, Default)]
pub struct BestMatch<'a> {
    candidates: Vec<&'a Tree>,
}

impl<'a> BestMatch<'a> {
    /// Score nodes against every tree in `candidates`.
    pub fn new(candidates: impl IntoIterator<Item = &'a Tree>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Candidate trees in scoring order.
    pub fn candidates(&self) -> &[&'a Tree] {
        &self.candidates
    }
}

impl NodeValue<Shade> for BestMatch<'_> {
    fn value(&mut self, node: NodeRef<'_>) -> Shade {
        let mut best = Shade::default();
        for tree in &self.candidates {
            let s = node.max_similarity(tree.root_ref());
            if best.concept.is_none() || s > best.intensity {
                best = Shade {
                    intensity: s,
                    concept: Some(tree.coupling_concept().into()),
                };
            }
        }
        best
    }
}

/// Value function for one tree of a registry.
///
/// The reference tree is shaded by its best match among the selected clusterings; every
/// clustering tree is shaded by its similarity to the reference tree.
#[derive(Clone, Debug)]
pub enum ReferenceView<'a> {
    /// Drawing the reference tree.
    Reference(BestMatch<'a>),
    /// Drawing a clustering tree.
    Clustering(SimilarityTo<'a>),
}

impl<'a> ReferenceView<'a> {
    /// Pick the value function for drawing the tree named `concept`.
    ///
    /// `selected` names the clusterings the reference tree is compared against; it is ignored
    /// for clustering trees. Fails if a named tree is not in the registry.
    pub fn for_concept(
        registry: &'a TreeRegistry,
        concept: &str,
        selected: &[&str],
    ) -> Result<Self, TreeError> {
        if concept == REFERENCE_CONCEPT {
            let candidates = selected
                .iter()
                .map(|name| registry.get(name))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self::Reference(BestMatch::new(candidates)))
        } else {
            Ok(Self::Clustering(SimilarityTo::new(registry.reference()?)))
        }
    }
}

impl NodeValue<Shade> for ReferenceView<'_> {
    fn value(&mut self, node: NodeRef<'_>) -> Shade {
        match self {
            Self::Reference(best) => best.value(node),
            Self::Clustering(sim) => sim.value(node),
        }
    }
}
