// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full and per-node icicle drawing.

use core::f64::consts::FRAC_PI_2;

use icicle_layout::{Layout, LayoutRect};
use icicle_tree::{NodeId, NodeRole, Tree};
use kurbo::{Point, Rect, Size};
use tracing::{debug, trace};

use crate::cache::ValueCache;
use crate::color::{Color, ColorMapping};
use crate::selection::Selections;
use crate::surface::{Label, Surface};
use crate::text::{FixedAdvance, TextFit};
use crate::types::LeafState;
use crate::values::NodeValue;

/// Fixed colours and label metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Fill of the root band.
    pub root_color: Color,
    /// Leaf fills indexed `[main][hover]`.
    pub leaf_colors: [[Color; 2]; 2],
    /// Label text colour.
    pub label_color: Color,
    /// Space kept free above and below a label.
    pub label_padding: f64,
    /// Horizontal offset of the label anchor from the left edge of its node.
    pub label_offset: f64,
    /// Gap left unpainted at the right edge of every rectangle.
    pub spacing: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            root_color: Color::from_rgb24(0x000080),
            leaf_colors: [
                [Color::from_rgb24(0xFAEB9E), Color::from_rgb24(0xF3CD0D)],
                [Color::from_rgb24(0x4040C0), Color::from_rgb24(0x1A1A4D)],
            ],
            label_color: Color::WHITE,
            label_padding: 3.0,
            label_offset: 10.0,
            spacing: 1.0,
        }
    }
}

impl RenderStyle {
    /// Fill of a leaf in `state`.
    pub fn leaf_color(&self, state: LeafState) -> Color {
        let main = usize::from(state.contains(LeafState::MAIN));
        let hover = usize::from(state.contains(LeafState::HOVER));
        self.leaf_colors[main][hover]
    }
}

/// Draws a laid-out tree onto a [`Surface`].
///
/// Root and leaves get fixed colours (leaves by their [`LeafState`]); inner nodes are shaded
/// by `C` applied to their cached value and carry a rotated label. Rectangles never overlap,
/// so redrawing one node with [`Renderer::render_node`] gives the same picture as a full
/// [`Renderer::render_all`].
#[derive(Clone, Debug)]
pub struct Renderer<C, T = FixedAdvance> {
    style: RenderStyle,
    color_mapping: C,
    text_fit: T,
}

impl<C> Renderer<C> {
    /// Renderer with the default text fit.
    pub fn new(style: RenderStyle, color_mapping: C) -> Self {
        Self::with_text_fit(style, color_mapping, FixedAdvance::default())
    }
}

impl<C, T: TextFit> Renderer<C, T> {
    /// Renderer with a custom label truncation.
    pub fn with_text_fit(style: RenderStyle, color_mapping: C, text_fit: T) -> Self {
        Self {
            style,
            color_mapping,
            text_fit,
        }
    }

    /// Style in use.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Colour mapping in use.
    pub fn color_mapping(&self) -> &C {
        &self.color_mapping
    }

    /// Size the surface to the layout, clear it and draw every node.
    pub fn render_all<V, F, S>(
        &self,
        surface: &mut S,
        tree: &Tree,
        layout: &Layout,
        values: &mut ValueCache<V, F>,
        selections: &Selections,
    ) where
        C: ColorMapping<V>,
        F: NodeValue<V>,
        S: Surface + ?Sized,
    {
        let size = Size::new(layout.natural_width(), layout.size().height);
        surface.resize(size);
        surface.clear();
        for id in tree.ids() {
            self.render_node(surface, tree, layout, values, selections, id);
        }
        debug!(
            concept = tree.coupling_concept(),
            nodes = tree.len(),
            width = size.width,
            height = size.height,
            "full repaint"
        );
    }

    /// Redraw `id` alone.
    pub fn render_node<V, F, S>(
        &self,
        surface: &mut S,
        tree: &Tree,
        layout: &Layout,
        values: &mut ValueCache<V, F>,
        selections: &Selections,
        id: NodeId,
    ) where
        C: ColorMapping<V>,
        F: NodeValue<V>,
        S: Surface + ?Sized,
    {
        let LayoutRect { rect, role } = layout.rect(id);
        let color = match role {
            NodeRole::Root => self.style.root_color,
            NodeRole::Leaf => self.style.leaf_color(selections.leaf_state(id)),
            NodeRole::Inner => self.color_mapping.color(values.get(tree.get(id))),
        };
        surface.fill_rect(self.fill_area(rect), color);
        trace!(key = tree.key(id), ?role, "node repaint");

        if role == NodeRole::Inner {
            let padding = self.style.label_padding;
            let text = self.text_fit.fit(tree.label(id), rect.height() - 2.0 * padding);
            if !text.is_empty() {
                surface.draw_label(Label {
                    text: text.into_owned(),
                    origin: Point::new(rect.x0 + self.style.label_offset, rect.y0 + padding),
                    angle: FRAC_PI_2,
                    color: self.style.label_color,
                });
            }
        }
    }

    /// Area actually painted for a node rectangle: vertical edges snapped to whole pixels and
    /// the spacing gap cut off on the right.
    pub fn fill_area(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0,
            rect.y0.round(),
            rect.x1 - self.style.spacing,
            rect.y1.round(),
        )
    }
}
