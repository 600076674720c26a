// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colours and the value-to-colour mapping seam.

use crate::values::Shade;

/// An 8-bit RGBA colour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the colour of a cleared surface.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque colour from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour from components including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from a `0xRRGGBB` literal.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each component is masked to eight bits."
    )]
    pub const fn from_rgb24(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "v lies between two u8 values."
            )]
            let v = v.round() as u8;
            v
        };
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

/// Maps a node value to the fill colour of an inner node.
///
/// The colour encoding itself belongs to the caller; any `Fn(&V) -> Color` works.
pub trait ColorMapping<V: ?Sized> {
    /// Colour for `value`.
    fn color(&self, value: &V) -> Color;
}

impl<V: ?Sized, F: Fn(&V) -> Color> ColorMapping<V> for F {
    fn color(&self, value: &V) -> Color {
        self(value)
    }
}

/// Linear ramp from a light grey at `0` to black at `1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GrayRamp {
    /// Colour at intensity `0`.
    pub low: Color,
    /// Colour at intensity `1`.
    pub high: Color,
}

impl Default for GrayRamp {
    fn default() -> Self {
        Self {
            low: Color::from_rgb24(0xEEEEEE),
            high: Color::BLACK,
        }
    }
}

impl ColorMapping<f64> for GrayRamp {
    fn color(&self, value: &f64) -> Color {
        self.low.lerp(self.high, *value)
    }
}

impl ColorMapping<Shade> for GrayRamp {
    fn color(&self, value: &Shade) -> Color {
        self.low.lerp(self.high, value.intensity)
    }
}
