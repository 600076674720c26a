// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icicle Layout: a Kurbo-native horizontal icicle partition with exact pixel-to-node inversion.
//!
//! - [`Layout::compute`] maps every node of an [`icicle_tree::Tree`] to a [`kurbo::Rect`]:
//!   depth runs left to right in fixed bands (narrow root, inner levels, leaves), siblings
//!   stack top to bottom with heights proportional to their leaf weight.
//! - [`Layout::node_at`] inverts the same scales to resolve a pointer position to a node.
//!
//! Nodes never overlap, so the layout doubles as its own hit-test structure; no spatial index
//! is kept.
//!
//! ## Geometry
//!
//! With `levels` depth levels the plot is `root + (levels - 2) * inner + leaf` pixels wide.
//! The vertical scale maps the cumulative weight range `[0, total]` onto `[0, height]` and is
//! the only part that changes on [`Layout::resize`] (unless [`InnerWidth::Fill`] is selected).
//!
//! # Example
//!
//! ```rust
//! use icicle_layout::{Layout, LayoutConfig};
//! use icicle_tree::{RawNode, Tree};
//! use kurbo::Size;
//!
//! let tree = Tree::build(
//!     "packages",
//!     RawNode::inner(
//!         "root",
//!         vec![
//!             RawNode::inner("p", vec![RawNode::leaf("a"), RawNode::leaf("b")]),
//!             RawNode::inner("q", vec![RawNode::leaf("c"), RawNode::leaf("d")]),
//!         ],
//!     ),
//! )
//! .unwrap();
//!
//! let layout = Layout::compute(&tree, Size::new(200.0, 400.0), LayoutConfig::default());
//! let q = tree.find("q").unwrap();
//! assert_eq!(layout.rect(q).rect.height(), 200.0);
//!
//! // Round trip through the hit tester.
//! assert_eq!(layout.node_at(&tree, layout.rect(q).rect.center()), Some(q));
//! ```

mod hit;
mod layout;
mod scale;

pub use hit::Hit;
pub use layout::{InnerWidth, Layout, LayoutConfig, LayoutRect, Weighting};
pub use scale::{DepthScale, LinearScale};
