// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surfaces.
//!
//! A [`Surface`] is the only thing the renderer draws into. Two are provided: [`Pixmap`], an
//! in-memory RGBA raster, and [`Recorder`], which keeps the draw calls for inspection.

use kurbo::{Point, Rect, Size};

use crate::color::Color;

/// A text label anchored at `origin` and rotated by `angle` radians around it.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Text, already fitted to the space available.
    pub text: String,
    /// Anchor point.
    pub origin: Point,
    /// Clockwise rotation in radians.
    pub angle: f64,
    /// Fill colour.
    pub color: Color,
}

/// Target of a [`Renderer`](crate::Renderer).
pub trait Surface {
    /// Set the drawable extent.
    fn resize(&mut self, size: Size);
    /// Erase everything.
    fn clear(&mut self);
    /// Fill `rect` with `color`, covering anything drawn there before.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Draw a text label.
    fn draw_label(&mut self, label: Label);
}

/// In-memory RGBA raster.
///
/// Rectangles are rasterised to whole pixels by rounding their edges. Glyphs are not
/// rasterised; labels are kept in an overlay list, and a fill removes the labels anchored
/// inside it the way paint would cover text.
#[derive(Clone, Debug, Default)]
pub struct Pixmap {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    labels: Vec<Label>,
}

impl Pixmap {
    /// Transparent raster of `size` (rounded up to whole pixels).
    pub fn new(size: Size) -> Self {
        let mut pixmap = Self::default();
        pixmap.resize(size);
        pixmap
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Colour of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Labels currently visible.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    fn span(lo: f64, hi: f64, limit: usize) -> core::ops::Range<usize> {
        let clamp = |v: f64| -> usize {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "The value is clamped to [0, limit] first."
            )]
            let v = v.round().clamp(0.0, limit as f64) as usize;
            v
        };
        let (lo, hi) = (clamp(lo), clamp(hi));
        lo..hi.max(lo)
    }
}

fn whole_pixels(v: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Negative and NaN extents saturate to zero."
    )]
    let n = v.ceil().max(0.0) as usize;
    n
}

impl Surface for Pixmap {
    fn resize(&mut self, size: Size) {
        self.width = whole_pixels(size.width);
        self.height = whole_pixels(size.height);
        self.pixels = vec![Color::TRANSPARENT; self.width * self.height];
        self.labels.clear();
    }

    fn clear(&mut self) {
        self.pixels.fill(Color::TRANSPARENT);
        self.labels.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.abs();
        let xs = Self::span(rect.x0, rect.x1, self.width);
        let ys = Self::span(rect.y0, rect.y1, self.height);
        for y in ys.clone() {
            let row = y * self.width;
            self.pixels[row + xs.start..row + xs.end].fill(color);
        }
        let painted = Rect::new(
            xs.start as f64,
            ys.start as f64,
            xs.end as f64,
            ys.end as f64,
        );
        self.labels.retain(|l| !painted.contains(l.origin));
    }

    fn draw_label(&mut self, label: Label) {
        self.labels.push(label);
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// [`Surface::resize`].
    Resize(Size),
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::fill_rect`].
    Fill(Rect, Color),
    /// [`Surface::draw_label`].
    Label(Label),
}

/// Surface that records draw calls instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of rectangle fills so far.
    pub fn fills(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Fill(..)))
            .count()
    }

    /// Take the recorded calls, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawOp> {
        core::mem::take(&mut self.ops)
    }
}

impl Surface for Recorder {
    fn resize(&mut self, size: Size) {
        self.ops.push(DrawOp::Resize(size));
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Fill(rect, color));
    }

    fn draw_label(&mut self, label: Label) {
        self.ops.push(DrawOp::Label(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn fill_covers_rounded_pixels() {
        let mut px = Pixmap::new(Size::new(10.0, 10.0));
        px.fill_rect(Rect::new(1.4, 2.0, 3.6, 4.0), RED);
        assert_eq!(px.pixel(0, 2), Some(Color::TRANSPARENT));
        assert_eq!(px.pixel(1, 2), Some(RED));
        assert_eq!(px.pixel(3, 3), Some(RED));
        assert_eq!(px.pixel(4, 3), Some(Color::TRANSPARENT));
        assert_eq!(px.pixel(2, 4), Some(Color::TRANSPARENT));
        assert_eq!(px.pixel(10, 0), None);
    }

    #[test]
    fn fill_clips_to_raster() {
        let mut px = Pixmap::new(Size::new(4.0, 3.0));
        px.fill_rect(Rect::new(-5.0, -5.0, 50.0, 50.0), RED);
        assert!(px.pixels().iter().all(|&c| c == RED));
        assert_eq!((px.width(), px.height()), (4, 3));
    }

    #[test]
    fn fill_covers_labels_and_clear_drops_them() {
        let mut px = Pixmap::new(Size::new(40.0, 40.0));
        let label = |x: f64| Label {
            text: "pkg".into(),
            origin: Point::new(x, 3.0),
            angle: 0.0,
            color: Color::WHITE,
        };
        px.draw_label(label(5.0));
        px.draw_label(label(30.0));
        px.fill_rect(Rect::new(0.0, 0.0, 20.0, 40.0), RED);
        assert_eq!(px.labels(), &[label(30.0)]);
        px.clear();
        assert!(px.labels().is_empty());
        assert_eq!(px.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn labels_drop_only_under_painted_pixels() {
        let mut px = Pixmap::new(Size::new(10.0, 10.0));
        let label = |x: f64| Label {
            text: "q".into(),
            origin: Point::new(x, 3.0),
            angle: 0.0,
            color: Color::WHITE,
        };
        // Rounds to columns 1..4, which covers x = 3.8.
        px.draw_label(label(3.8));
        px.fill_rect(Rect::new(1.4, 0.0, 3.6, 10.0), RED);
        assert!(px.labels().is_empty());

        // Rounds to an empty column span; nothing is painted over the label.
        px.draw_label(label(5.1));
        px.fill_rect(Rect::new(5.0, 0.0, 5.3, 10.0), RED);
        assert_eq!(px.labels(), &[label(5.1)]);
        assert_eq!(px.pixel(5, 3), Some(Color::TRANSPARENT));
    }

    #[test]
    fn recorder_keeps_calls_in_order() {
        let mut rec = Recorder::new();
        rec.resize(Size::new(1.0, 2.0));
        rec.clear();
        rec.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), RED);
        assert_eq!(rec.fills(), 1);
        assert_eq!(
            rec.take(),
            vec![
                DrawOp::Resize(Size::new(1.0, 2.0)),
                DrawOp::Clear,
                DrawOp::Fill(Rect::new(0.0, 0.0, 1.0, 1.0), RED),
            ]
        );
        assert!(rec.ops().is_empty());
    }
}
