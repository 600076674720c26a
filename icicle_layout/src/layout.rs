// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal icicle partition layout.

use icicle_tree::{NodeId, NodeRole, Tree};
use kurbo::{Point, Rect, Size};
use tracing::{debug, warn};

use crate::scale::{DepthScale, LinearScale};

/// How inner levels get their band width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InnerWidth {
    /// Every inner level is this wide; the plot width follows from the tree depth alone.
    Fixed(f64),
    /// Inner levels share the canvas width left over by the root and leaf bands.
    Fill,
}

/// How leaf weights are derived.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Weighting {
    /// Every leaf weighs one.
    #[default]
    Unit,
    /// Every leaf weighs its sort order; negative ranks count as zero.
    ///
    /// Falls back to [`Weighting::Unit`] when the total is not positive.
    SortOrder,
}

/// Band widths and weighting for [`Layout::compute`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Width of the root band.
    pub root_width: f64,
    /// Width policy for inner levels.
    pub inner_width: InnerWidth,
    /// Width of a leaf rectangle.
    pub leaf_width: f64,
    /// Leaf weights.
    pub weighting: Weighting,
}

impl LayoutConfig {
    /// Root band width of the default configuration.
    pub const ROOT_NODE_WIDTH: f64 = 5.0;
    /// Inner band width of the default configuration.
    pub const INNER_NODE_WIDTH: f64 = 25.0;
    /// Leaf band width of the default configuration.
    pub const LEAF_WIDTH: f64 = 15.0;
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_width: Self::ROOT_NODE_WIDTH,
            inner_width: InnerWidth::Fixed(Self::INNER_NODE_WIDTH),
            leaf_width: Self::LEAF_WIDTH,
            weighting: Weighting::Unit,
        }
    }
}

/// Canvas rectangle of one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutRect {
    /// Pixel rectangle.
    pub rect: Rect,
    /// Role of the node; decides band width and colour policy.
    pub role: NodeRole,
}

/// Partition cell in weight space: `[offset, offset + extent)` along the vertical axis.
#[derive(Copy, Clone, Debug)]
struct Cell {
    id: NodeId,
    offset: f64,
    extent: f64,
    depth: usize,
    role: NodeRole,
}

/// Per-node rectangles of one tree on one canvas.
///
/// Depth runs left to right, siblings top to bottom in their stored order, and each node's
/// vertical extent is the sum of its children's (leaves carry their weight). The vertical
/// scale follows the canvas height; the horizontal placement depends only on the tree unless
/// [`InnerWidth::Fill`] is used. For a fixed tree and canvas the layout is deterministic, which
/// is what lets [`Layout::node_at`] invert it exactly.
#[derive(Clone, Debug)]
pub struct Layout {
    config: LayoutConfig,
    cells: Vec<Cell>,
    total_weight: f64,
    x: DepthScale,
    y: LinearScale,
    size: Size,
}

impl Layout {
    /// Lay out `tree` on a canvas of `canvas` pixels.
    pub fn compute(tree: &Tree, canvas: Size, config: LayoutConfig) -> Self {
        let mut cells = accumulate(tree, config.weighting);
        if total_of(&cells) <= 0.0 && config.weighting == Weighting::SortOrder {
            warn!(
                concept = tree.coupling_concept(),
                "sort-order weights sum to zero, using unit weights"
            );
            cells = accumulate(tree, Weighting::Unit);
        }
        let total = total_of(&cells);

        // Pre-order: a parent is placed before its children.
        for id in tree.ids() {
            let mut offset = cells[id.index()].offset;
            for &child in tree.children(id) {
                let cell = &mut cells[child.index()];
                cell.offset = offset;
                offset += cell.extent;
            }
        }

        let x = depth_scale(tree.levels(), canvas.width, &config);
        let y = LinearScale::new((0.0, total), (0.0, canvas.height));
        debug!(
            concept = tree.coupling_concept(),
            nodes = cells.len(),
            width = x.total_width(),
            height = canvas.height,
            "computed layout"
        );
        Self {
            config,
            cells,
            total_weight: total,
            x,
            y,
            size: canvas,
        }
    }

    /// Adapt to a new canvas size. Only the vertical scale changes unless inner levels fill the
    /// width.
    pub fn resize(&mut self, canvas: Size) {
        self.y = self.y.with_range((0.0, canvas.height));
        if self.config.inner_width == InnerWidth::Fill {
            self.x = depth_scale(self.x.levels(), canvas.width, &self.config);
        }
        self.size = canvas;
    }

    /// Canvas size this layout was computed for.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width covered by the bands, independent of the canvas unless inner levels fill it.
    pub fn natural_width(&self) -> f64 {
        self.x.total_width()
    }

    /// Configuration in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of depth levels.
    pub fn levels(&self) -> usize {
        self.x.levels()
    }

    /// Horizontal scale.
    pub fn x_scale(&self) -> &DepthScale {
        &self.x
    }

    /// Vertical scale from weight space to pixels.
    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    /// Sum of all leaf weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Start of `id` in weight space.
    pub fn offset(&self, id: NodeId) -> f64 {
        self.cells[id.index()].offset
    }

    /// Extent of `id` in weight space.
    pub fn extent(&self, id: NodeId) -> f64 {
        self.cells[id.index()].extent
    }

    /// Pixel rectangle and role of `id`.
    pub fn rect(&self, id: NodeId) -> LayoutRect {
        let cell = &self.cells[id.index()];
        let role = cell.role;
        let width = match role {
            NodeRole::Root => self.config.root_width,
            NodeRole::Leaf => self.config.leaf_width,
            NodeRole::Inner => self.x.inner_width(),
        };
        let origin = Point::new(self.x.x(cell.depth), self.y.map(cell.offset));
        let size = Size::new(width, self.y.map_len(cell.extent));
        LayoutRect {
            rect: Rect::from_origin_size(origin, size),
            role,
        }
    }

    /// Every node's rectangle, in pre-order.
    pub fn rects(&self) -> impl Iterator<Item = (NodeId, LayoutRect)> + '_ {
        self.cells.iter().map(|cell| (cell.id, self.rect(cell.id)))
    }
}

fn depth_scale(levels: usize, canvas_width: f64, config: &LayoutConfig) -> DepthScale {
    let inner = match config.inner_width {
        InnerWidth::Fixed(w) => w,
        InnerWidth::Fill => {
            let inner_levels = levels.saturating_sub(2);
            if inner_levels == 0 {
                0.0
            } else {
                (canvas_width - config.root_width - config.leaf_width) / inner_levels as f64
            }
        }
    };
    DepthScale::new(levels, config.root_width, inner, config.leaf_width)
}

/// One cell per node, indexed like the tree arena, with extents filled in bottom-up.
fn accumulate(tree: &Tree, weighting: Weighting) -> Vec<Cell> {
    let mut cells: Vec<Cell> = tree
        .ids()
        .map(|id| Cell {
            id,
            offset: 0.0,
            extent: 0.0,
            depth: tree.depth(id),
            role: tree.role(id),
        })
        .collect();
    // Reverse pre-order visits children before their parent.
    for index in (0..cells.len()).rev() {
        let id = cells[index].id;
        let extent = if tree.is_leaf(id) {
            match weighting {
                Weighting::Unit => 1.0,
                Weighting::SortOrder => tree.sort_order(id).max(0.0),
            }
        } else {
            tree.children(id)
                .iter()
                .map(|c| cells[c.index()].extent)
                .sum()
        };
        cells[index].extent = extent;
    }
    cells
}

fn total_of(cells: &[Cell]) -> f64 {
    cells.first().map_or(0.0, |root| root.extent)
}
