// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view engine: one tree drawn onto one surface.

use core::fmt;
use std::collections::BTreeSet;

use icicle_layout::{Layout, LayoutConfig};
use icicle_tree::{Key, NodeId, Tree};
use kurbo::{Point, Size};
use tracing::debug;

use crate::cache::ValueCache;
use crate::color::ColorMapping;
use crate::events::{HoverState, IcicleEvent, Listeners, PointerEvent, Subscription};
use crate::render::{RenderStyle, Renderer};
use crate::selection::{SelectionDiff, Selections};
use crate::surface::Surface;
use crate::text::{FixedAdvance, TextFit};
use crate::values::NodeValue;

/// Construction parameters of an [`Icicle`].
#[derive(Clone, Debug)]
pub struct IcicleOptions<T = FixedAdvance> {
    /// Band widths and weighting.
    pub layout: LayoutConfig,
    /// Colours and label metrics.
    pub style: RenderStyle,
    /// Canvas size. The width only matters for [`icicle_layout::InnerWidth::Fill`].
    pub size: Size,
    /// Label truncation.
    pub text_fit: T,
}

impl Default for IcicleOptions {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            style: RenderStyle::default(),
            size: Size::new(0.0, 600.0),
            text_fit: FixedAdvance::default(),
        }
    }
}

/// Icicle view of one [`Tree`].
///
/// Owns the surface it draws to, the layout, the memoized node values and the selection
/// state. Construction performs the first full repaint; afterwards only
/// [`Icicle::resize`] repaints everything, and [`Icicle::update_selection`] repaints just the
/// leaves whose selection changed.
pub struct Icicle<'t, V, F, C, S, T = FixedAdvance> {
    tree: &'t Tree,
    layout: Layout,
    values: ValueCache<V, F>,
    renderer: Renderer<C, T>,
    selections: Selections,
    surface: S,
    listeners: Listeners,
    hover: HoverState,
}

impl<'t, V, F, C, S, T> Icicle<'t, V, F, C, S, T>
where
    F: NodeValue<V>,
    C: ColorMapping<V>,
    S: Surface,
    T: TextFit,
{
    /// Lay out `tree`, shade inner nodes with `color_mapping(value_fn(node))` and draw
    /// everything onto `surface`.
    pub fn new(
        tree: &'t Tree,
        value_fn: F,
        color_mapping: C,
        surface: S,
        options: IcicleOptions<T>,
    ) -> Self {
        let IcicleOptions {
            layout,
            style,
            size,
            text_fit,
        } = options;
        let mut icicle = Self {
            tree,
            layout: Layout::compute(tree, size, layout),
            values: ValueCache::with_capacity(tree.len(), value_fn),
            renderer: Renderer::with_text_fit(style, color_mapping, text_fit),
            selections: Selections::new(),
            surface,
            listeners: Listeners::new(),
            hover: HoverState::new(),
        };
        icicle.render_all();
        icicle
    }

    /// Repaint every node.
    pub fn render_all(&mut self) {
        self.renderer.render_all(
            &mut self.surface,
            self.tree,
            &self.layout,
            &mut self.values,
            &self.selections,
        );
    }

    /// Repaint one node.
    pub fn render_node(&mut self, id: NodeId) {
        self.renderer.render_node(
            &mut self.surface,
            self.tree,
            &self.layout,
            &mut self.values,
            &self.selections,
            id,
        );
    }

    /// Adopt a new canvas height and repaint everything.
    pub fn resize(&mut self, height: f64) {
        let width = self.layout.size().width;
        self.resize_to(Size::new(width, height));
    }

    /// Adopt a new canvas size and repaint everything.
    pub fn resize_to(&mut self, size: Size) {
        debug!(width = size.width, height = size.height, "resize");
        self.layout.resize(size);
        self.render_all();
    }

    /// Replace the selection of `channel` and repaint the leaves whose flag changed.
    pub fn update_selection<I>(&mut self, channel: &str, keys: I) -> SelectionDiff
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let selected: BTreeSet<Key> = keys.into_iter().map(Into::into).collect();
        let diff = self.selections.update(self.tree, channel, selected);
        for id in diff.changed() {
            self.render_node(id);
        }
        diff
    }

    /// Hit-test `event`, publish the result to listeners and return it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<IcicleEvent> {
        let resolved = event.resolve(self.tree, &self.layout)?;
        self.hover.observe(&resolved);
        self.listeners.emit(&resolved);
        Some(resolved)
    }

    /// Register a listener for pointer-derived events.
    pub fn subscribe(&mut self, listener: impl FnMut(&IcicleEvent) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.listeners.unsubscribe(subscription)
    }

    /// Node drawn at `pt`, if any.
    pub fn node_at(&self, pt: Point) -> Option<NodeId> {
        self.layout.node_at(self.tree, pt)
    }

    /// Canvas width required by the tree structure.
    pub fn natural_width(&self) -> f64 {
        self.layout.natural_width()
    }

    /// Node under the pointer as of the last pointer event.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hover.current()
    }

    /// The tree being drawn.
    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    /// Current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Current selections.
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Memoized node values.
    pub fn values(&self) -> &ValueCache<V, F> {
        &self.values
    }

    /// Value of `id`, computing it if needed.
    pub fn value(&mut self, id: NodeId) -> &V {
        self.values.get(self.tree.get(id))
    }

    /// Surface drawn to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to drain a recording.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give up the view and keep the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<V, F, C, S: fmt::Debug, T> fmt::Debug for Icicle<'_, V, F, C, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icicle")
            .field("concept", &self.tree.coupling_concept())
            .field("size", &self.layout.size())
            .field("values", &self.values)
            .field("selections", &self.selections)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
