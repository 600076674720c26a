// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label truncation.

use std::borrow::Cow;

/// Shortens a label so that it fits into `max_len` pixels.
pub trait TextFit {
    /// `text` or a prefix of it; empty when nothing fits.
    fn fit<'a>(&self, text: &'a str, max_len: f64) -> Cow<'a, str>;
}

impl<F: Fn(&str, f64) -> String> TextFit for F {
    fn fit<'a>(&self, text: &'a str, max_len: f64) -> Cow<'a, str> {
        Cow::Owned(self(text, max_len))
    }
}

/// Treats every character as `advance` pixels wide and marks cut text with an ellipsis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Width of one character in pixels.
    pub advance: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { advance: 7.0 }
    }
}

impl TextFit for FixedAdvance {
    fn fit<'a>(&self, text: &'a str, max_len: f64) -> Cow<'a, str> {
        if self.advance <= 0.0 {
            return Cow::Borrowed(text);
        }
        if max_len.is_nan() || max_len < self.advance {
            return Cow::Borrowed("");
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "The quotient is at least one and saturates on overflow."
        )]
        let room = (max_len / self.advance).floor() as usize;
        match text.char_indices().nth(room) {
            None => Cow::Borrowed(text),
            Some(_) => {
                let mut fitted: String = text.chars().take(room - 1).collect();
                fitted.push('\u{2026}');
                Cow::Owned(fitted)
            }
        }
    }
}
