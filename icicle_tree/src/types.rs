// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for trees: node identifiers, keys and roles.

use alloc::string::String;

/// Qualified identifier of a node.
///
/// Keys are unique within one tree and stable across trees of the same project, which is what
/// makes leaf-key sets comparable between a clustering and the reference package tree.
pub type Key = String;

/// Identifier for a node in a [`Tree`](crate::Tree).
///
/// A small, copyable arena index. Trees are immutable after construction, so an id stays valid
/// for the lifetime of the tree that minted it. Ids are assigned in pre-order, the root is
/// always index `0`.
///
/// Ids from different trees are not comparable; pair an id with its tree via
/// [`NodeRef`](crate::NodeRef) when crossing tree boundaries.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// Arena index of this node, usable as a dense side-table index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Structural role of a node; drives band width and colour policy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeRole {
    /// The tree root.
    Root,
    /// A node with children that is not the root.
    Inner,
    /// A node without children.
    Leaf,
}
