// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag sets shared by the renderer, the selection differ and the event layer.

/// Name of the selection channel for the persistent selection.
pub const MAIN_CHANNEL: &str = "main";
/// Name of the selection channel that follows the pointer.
pub const HOVER_CHANNEL: &str = "hover";

bitflags::bitflags! {
    /// Selection flags of one leaf; together they pick the leaf's fill colour.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LeafState: u8 {
        /// Leaf is selected on [`MAIN_CHANNEL`].
        const MAIN  = 0b0000_0001;
        /// Leaf is selected on [`HOVER_CHANNEL`].
        const HOVER = 0b0000_0010;
    }
}

impl LeafState {
    /// Flag driven by `channel`, if the channel affects leaf colours.
    pub fn for_channel(channel: &str) -> Option<Self> {
        match channel {
            MAIN_CHANNEL => Some(Self::MAIN),
            HOVER_CHANNEL => Some(Self::HOVER),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command.
        const META  = 0b0000_1000;
    }
}
