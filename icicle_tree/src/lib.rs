// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icicle Tree: clustering hierarchies with cached leaf-key sets and cross-tree similarity.
//!
//! Icicle Tree is the model layer of the icicle comparison view.
//!
//! - Builds immutable, arena-backed [`Tree`]s from raw nested records ([`RawNode`]), validating
//!   them at the boundary and collapsing single-child chains.
//! - Caches each node's leaf-key set on first access.
//! - Scores a node of one tree against a subtree of another with [`NodeRef::max_similarity`],
//!   a pruned depth-first search over Jaccard indices.
//! - Keeps the trees of one project in a [`TreeRegistry`] keyed by coupling concept.
//!
//! It does not fetch data, lay out or draw anything; see `icicle_layout` and `icicle_view`.
//!
//! ## API overview
//!
//! - [`Tree`]: arena of nodes, ids in pre-order, root at [`NodeId::ROOT`].
//! - [`NodeRef`]: a node paired with its tree, the handle used across trees.
//! - [`RawNode`] / [`RawTree`]: input schema (serde).
//! - [`TreeRegistry`]: lookup by coupling concept with an explicit load step.
//! - [`sets`]: the small amount of set algebra the rest of the workspace needs.
//! - [`TreeError`]: construction and lookup failures.
//!
//! # Example
//!
//! ```rust
//! use icicle_tree::{RawNode, Tree};
//!
//! // A -> [b, c]
//! let query = Tree::build(
//!     "CC.I",
//!     RawNode::inner("A", vec![RawNode::leaf("b"), RawNode::leaf("c")]),
//! )
//! .unwrap();
//! // X -> [b, d]
//! let reference = Tree::build(
//!     "packages",
//!     RawNode::inner("X", vec![RawNode::leaf("b"), RawNode::leaf("d")]),
//! )
//! .unwrap();
//!
//! // X itself scores 1/3, its child b scores 1/2.
//! let s = query.root_ref().max_similarity(reference.root_ref());
//! assert!((s - 0.5).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod raw;
mod registry;
pub mod sets;
mod similarity;
mod tree;
mod types;

pub use error::TreeError;
pub use raw::{RawNode, RawTree};
pub use registry::{LoadReport, REFERENCE_CONCEPT, RegistryState, TreeRegistry};
pub use tree::{NodeRef, Tree};
pub use types::{Key, NodeId, NodeRole};
