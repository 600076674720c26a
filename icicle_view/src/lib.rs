// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icicle View: incremental drawing and interaction for icicle plots of clustering trees.
//!
//! ## Overview
//!
//! An [`Icicle`] binds one [`icicle_tree::Tree`] to one [`Surface`]. It lays the tree out with
//! [`icicle_layout`], draws every node once, and from then on keeps the picture current with
//! as little work as possible:
//!
//! - Inner nodes are shaded by a caller-supplied [`NodeValue`] mapped through a
//!   [`ColorMapping`]. Values are memoized per node in a [`ValueCache`], so a similarity search
//!   against another tree runs once per node, not once per frame.
//! - Leaves are coloured by their selection flags. [`Icicle::update_selection`] takes the
//!   complete new key set of a channel, diffs it against the previous one ([`Selections`]) and
//!   redraws only the leaves that changed.
//! - [`Icicle::handle_pointer`] resolves pointer input to [`IcicleEvent`]s and hands them to
//!   subscribed listeners.
//!
//! Everything is single-threaded and synchronous.
//!
//! ## Colours
//!
//! | Node  | Colour                                                       |
//! |-------|--------------------------------------------------------------|
//! | root  | [`RenderStyle::root_color`]                                  |
//! | inner | `color_mapping(value(node))`, default [`GrayRamp`]           |
//! | leaf  | [`RenderStyle::leaf_colors`]`[main][hover]`                  |
//!
//! # Example
//!
//! ```rust
//! use icicle_tree::{RawNode, Tree};
//! use icicle_view::{GrayRamp, Icicle, IcicleOptions, MAIN_CHANNEL, Recorder};
//!
//! let packages = Tree::build(
//!     "packages",
//!     RawNode::inner(
//!         "root",
//!         vec![
//!             RawNode::inner("io", vec![RawNode::leaf("io.File"), RawNode::leaf("io.Path")]),
//!             RawNode::inner("net", vec![RawNode::leaf("net.Url"), RawNode::leaf("net.Http")]),
//!         ],
//!     ),
//! )
//! .unwrap();
//! let clustering = Tree::build(
//!     "CC.I",
//!     RawNode::inner(
//!         "root",
//!         vec![
//!             RawNode::inner("c1", vec![RawNode::leaf("io.File"), RawNode::leaf("io.Path")]),
//!             RawNode::inner("c2", vec![RawNode::leaf("net.Url"), RawNode::leaf("net.Http")]),
//!         ],
//!     ),
//! )
//! .unwrap();
//!
//! let mut view = Icicle::new(
//!     &clustering,
//!     |n: icicle_tree::NodeRef<'_>| n.max_similarity(packages.root_ref()),
//!     GrayRamp::default(),
//!     Recorder::new(),
//!     IcicleOptions::default(),
//! );
//! view.surface_mut().take();
//!
//! // One leaf selected: one rectangle redrawn.
//! view.update_selection(MAIN_CHANNEL, ["net.Url"]);
//! assert_eq!(view.surface().fills(), 1);
//! ```

mod cache;
mod color;
mod events;
mod icicle;
mod render;
mod selection;
mod surface;
mod text;
mod types;
mod values;

pub use cache::ValueCache;
pub use color::{Color, ColorMapping, GrayRamp};
pub use events::{HoverState, IcicleEvent, Listeners, PointerEvent, Subscription};
pub use icicle::{Icicle, IcicleOptions};
pub use render::{RenderStyle, Renderer};
pub use selection::{SelectionDiff, Selections};
pub use surface::{DrawOp, Label, Pixmap, Recorder, Surface};
pub use text::{FixedAdvance, TextFit};
pub use types::{HOVER_CHANNEL, LeafState, MAIN_CHANNEL, Modifiers};
pub use values::{BestMatch, NodeValue, ReferenceView, Shade, SimilarityTo};
