// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales mapping tree space onto canvas pixels and back.

/// Linear map from a domain interval onto a range interval.
///
/// A degenerate domain maps everything onto the start of the range; a degenerate range inverts
/// everything onto the start of the domain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale mapping `domain` onto `range`.
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain interval.
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Range interval.
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Same domain, new range.
    pub const fn with_range(self, range: (f64, f64)) -> Self {
        Self {
            domain: self.domain,
            range,
        }
    }

    /// Map a domain value to the range.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (v - d0) * (r1 - r0) / (d1 - d0)
    }

    /// Map a domain length (not a position) to a range length.
    pub fn map_len(&self, len: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return 0.0;
        }
        len * (r1 - r0) / (d1 - d0)
    }

    /// Map a range value back to the domain.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) * (d1 - d0) / (r1 - r0)
    }
}

/// Horizontal scale of an icicle: depth levels onto pixel columns.
///
/// The root occupies a fixed band `[0, root_width)`, the deepest level a fixed band of
/// `leaf_width`, and every level in between a band of `inner_width`. This is the linear scale
/// over depth fractions `depth / levels` with its domain clamped to `[1/levels, 1 - 1/levels]`,
/// so only inner levels take part in the interpolation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DepthScale {
    levels: usize,
    root_width: f64,
    inner_width: f64,
    leaf_width: f64,
}

impl DepthScale {
    /// Create a depth scale for a tree with `levels` depth levels.
    pub fn new(levels: usize, root_width: f64, inner_width: f64, leaf_width: f64) -> Self {
        Self {
            levels: levels.max(1),
            root_width,
            inner_width: inner_width.max(0.0),
            leaf_width,
        }
    }

    /// Number of depth levels.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Number of inner (neither root nor deepest) levels.
    pub fn inner_levels(&self) -> usize {
        self.levels.saturating_sub(2)
    }

    /// Band width shared by inner levels.
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    /// Total width of all bands; depends only on the tree structure.
    pub fn total_width(&self) -> f64 {
        if self.levels == 1 {
            return self.root_width;
        }
        self.root_width + self.inner_levels() as f64 * self.inner_width + self.leaf_width
    }

    /// Left edge of the band for `depth`.
    pub fn x(&self, depth: usize) -> f64 {
        if depth == 0 {
            return 0.0;
        }
        self.root_width + (depth - 1) as f64 * self.inner_width
    }

    /// Depth level whose band contains `px`, or `None` outside `[0, total_width)`.
    pub fn level_at(&self, px: f64) -> Option<usize> {
        if !(0.0..self.total_width()).contains(&px) {
            return None;
        }
        if px < self.root_width {
            return Some(0);
        }
        let last = self.levels - 1;
        if self.inner_width <= 0.0 {
            return Some(last);
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "px >= root_width, so the quotient is non-negative and small."
        )]
        let inner = ((px - self.root_width) / self.inner_width).floor() as usize;
        Some((1 + inner).min(last))
    }
}
