// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: construction, structure queries and cached derived data.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::OnceCell;
use core::ops::Range;

use tracing::debug;

use crate::error::TreeError;
use crate::raw::{RawNode, RawTree};
use crate::types::{Key, NodeId, NodeRole};

/// A rooted clustering tree for one coupling concept.
///
/// Nodes live in an arena indexed by [`NodeId`] and are laid out in pre-order, so every subtree
/// occupies a contiguous id range. The tree is immutable after [`Tree::build`]; derived data
/// (leaf-key sets) is computed on first access and kept for the tree's lifetime.
#[derive(Clone)]
pub struct Tree {
    coupling_concept: String,
    nodes: Vec<Node>,
    by_key: BTreeMap<Key, NodeId>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cached = self
            .nodes
            .iter()
            .filter(|n| n.leaf_keys.get().is_some())
            .count();
        f.debug_struct("Tree")
            .field("coupling_concept", &self.coupling_concept)
            .field("nodes", &self.nodes.len())
            .field("levels", &self.levels())
            .field("cached_leaf_sets", &cached)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    key: Key,
    label: String,
    sort_order: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
    height: usize,
    // One past the last id of this subtree (pre-order).
    subtree_end: u32,
    leaf_keys: OnceCell<BTreeSet<Key>>,
}

impl Tree {
    /// Build a tree from a raw root record.
    ///
    /// Validates the record (every level must carry a `children` sequence, keys must be
    /// non-empty and unique), collapses single-child chains bottom-up, orders siblings by
    /// `sort_order` (stable) and assigns ids in pre-order.
    pub fn build(
        coupling_concept: impl Into<String>,
        mut root: RawNode,
    ) -> Result<Self, TreeError> {
        let coupling_concept = coupling_concept.into();
        let mut path = Vec::new();
        validate(&root, &mut path)?;
        root.normalize();

        let mut tree = Self {
            coupling_concept,
            nodes: Vec::with_capacity(root.count()),
            by_key: BTreeMap::new(),
        };
        tree.push(root, None, 0)?;
        debug!(
            concept = %tree.coupling_concept,
            nodes = tree.nodes.len(),
            levels = tree.levels(),
            "built tree"
        );
        Ok(tree)
    }

    /// Build a tree from a complete raw document.
    pub fn from_raw(raw: RawTree) -> Result<Self, TreeError> {
        Self::build(raw.coupling_concept, raw.root)
    }

    /// Parse and build a tree from a JSON document `{ "couplingConcept", "root" }`.
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self, TreeError> {
        use alloc::string::ToString;
        let raw: RawTree =
            serde_json::from_str(text).map_err(|e| TreeError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn push(
        &mut self,
        raw: RawNode,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<NodeId, TreeError> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Trees hold at most u32::MAX nodes."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        if self.by_key.insert(raw.key.clone(), id).is_some() {
            return Err(TreeError::DuplicateKey(raw.key));
        }
        let RawNode {
            key,
            label,
            sort_order,
            children,
        } = raw;
        self.nodes.push(Node {
            label: label.unwrap_or_else(|| key.clone()),
            key,
            sort_order,
            parent,
            children: Vec::new(),
            depth,
            height: 0,
            subtree_end: id.0 + 1,
            leaf_keys: OnceCell::new(),
        });

        let mut children = children.unwrap_or_default();
        children.sort_by(|a, b| a.sort_order.total_cmp(&b.sort_order));
        let mut child_ids = Vec::with_capacity(children.len());
        let mut height = 0;
        for child in children {
            let child_id = self.push(child, Some(id), depth + 1)?;
            height = height.max(self.nodes[child_id.index()].height + 1);
            child_ids.push(child_id);
        }

        #[allow(
            clippy::cast_possible_truncation,
            reason = "Trees hold at most u32::MAX nodes."
        )]
        let end = self.nodes.len() as u32;
        let node = &mut self.nodes[id.index()];
        node.children = child_ids;
        node.height = height;
        node.subtree_end = end;
        Ok(id)
    }

    /// Name of the clustering algorithm or reference grouping this tree represents.
    pub fn coupling_concept(&self) -> &str {
        &self.coupling_concept
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Pair `id` with this tree.
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    /// The root paired with this tree.
    pub fn root_ref(&self) -> NodeRef<'_> {
        self.get(NodeId::ROOT)
    }

    /// All node ids in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.subtree(NodeId::ROOT)
    }

    /// All leaf ids in pre-order (top to bottom in an icicle).
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|id| self.is_leaf(*id))
    }

    /// Look up a node by key.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    /// Look up a leaf by key; inner nodes do not match.
    pub fn leaf_by_key(&self, key: &str) -> Option<NodeId> {
        self.find(key).filter(|id| self.is_leaf(*id))
    }

    /// Qualified key of `id`.
    pub fn key(&self, id: NodeId) -> &str {
        &self.node(id).key
    }

    /// Display label of `id`.
    pub fn label(&self, id: NodeId) -> &str {
        &self.node(id).label
    }

    /// Sibling rank of `id`.
    pub fn sort_order(&self, id: NodeId) -> f64 {
        self.node(id).sort_order
    }

    /// Parent of `id`, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Children of `id`, ordered by sort order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// True if `id` has no children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).children.is_empty()
    }

    /// Structural role of `id`. The root keeps [`NodeRole::Root`] even when it is a leaf.
    pub fn role(&self, id: NodeId) -> NodeRole {
        if id == NodeId::ROOT {
            NodeRole::Root
        } else if self.is_leaf(id) {
            NodeRole::Leaf
        } else {
            NodeRole::Inner
        }
    }

    /// Distance from the root (root is `0`).
    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth
    }

    /// Maximum distance from `id` down to a leaf (leaves are `0`).
    pub fn height(&self, id: NodeId) -> usize {
        self.node(id).height
    }

    /// Number of depth levels, i.e. the root's height plus one.
    pub fn levels(&self) -> usize {
        self.nodes.first().map_or(0, |root| root.height + 1)
    }

    /// `id` and all its descendants in pre-order.
    pub fn subtree(&self, id: NodeId) -> impl Iterator<Item = NodeId> + use<> {
        self.subtree_range(id).map(NodeId::new)
    }

    /// Number of nodes in the subtree rooted at `id`, including `id`.
    pub fn subtree_len(&self, id: NodeId) -> usize {
        self.subtree_range(id).len()
    }

    /// True if `descendant` lies in the subtree rooted at `ancestor` (inclusive).
    pub fn contains(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        self.subtree_range(ancestor).contains(&descendant.0)
    }

    /// Keys of all leaves below `id` (just its own key for a leaf).
    ///
    /// Computed from the children's sets on first access and cached for the tree's lifetime.
    pub fn leaf_key_set(&self, id: NodeId) -> &BTreeSet<Key> {
        let node = self.node(id);
        node.leaf_keys.get_or_init(|| {
            if node.children.is_empty() {
                return BTreeSet::from([node.key.clone()]);
            }
            let mut keys = BTreeSet::new();
            for &child in &node.children {
                keys.extend(self.leaf_key_set(child).iter().cloned());
            }
            keys
        })
    }

    /// Root→`id` path (inclusive).
    pub fn path_to_root(&self, mut id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.depth(id) + 1);
        loop {
            out.push(id);
            match self.parent(id) {
                Some(p) => id = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    // --- internals ---

    fn subtree_range(&self, id: NodeId) -> Range<u32> {
        id.0..self.node(id).subtree_end
    }

    /// Panics if `id` was not minted by this tree.
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

fn validate<'a>(raw: &'a RawNode, path: &mut Vec<&'a str>) -> Result<(), TreeError> {
    path.push(&raw.key);
    if raw.key.is_empty() {
        return Err(TreeError::malformed(path, "empty `key`"));
    }
    let Some(children) = raw.children.as_ref() else {
        return Err(TreeError::malformed(path, "missing `children` sequence"));
    };
    for child in children {
        validate(child, path)?;
    }
    path.pop();
    Ok(())
}

/// A node paired with the tree that owns it.
///
/// This is the handle used across tree boundaries, most notably by
/// [`NodeRef::max_similarity`].
#[derive(Copy, Clone, Debug)]
pub struct NodeRef<'t> {
    tree: &'t Tree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    /// The owning tree.
    pub fn tree(self) -> &'t Tree {
        self.tree
    }

    /// The node id within [`NodeRef::tree`].
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Qualified key.
    pub fn key(self) -> &'t str {
        self.tree.key(self.id)
    }

    /// Display label.
    pub fn label(self) -> &'t str {
        self.tree.label(self.id)
    }

    /// Structural role.
    pub fn role(self) -> NodeRole {
        self.tree.role(self.id)
    }

    /// True if the node has no children.
    pub fn is_leaf(self) -> bool {
        self.tree.is_leaf(self.id)
    }

    /// Cached leaf-key set.
    pub fn leaf_keys(self) -> &'t BTreeSet<Key> {
        self.tree.leaf_key_set(self.id)
    }

    /// Parent, `None` for the root.
    pub fn parent(self) -> Option<Self> {
        self.tree.parent(self.id).map(|id| self.tree.get(id))
    }

    /// Children in sort order.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'t>> {
        let tree = self.tree;
        tree.children(self.id).iter().map(move |&id| tree.get(id))
    }
}
