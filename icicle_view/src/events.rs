// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input, the events it resolves to, and their listeners.
//!
//! ## Flow
//!
//! 1) The host feeds a [`PointerEvent`] to
//!    [`Icicle::handle_pointer`](crate::Icicle::handle_pointer).
//! 2) The pointer position is hit-tested against the current layout.
//! 3) The resulting [`IcicleEvent`] goes to every listener in registration order, synchronously,
//!    before `handle_pointer` returns.
//!
//! | Input                | Hit      | Event                           |
//! |----------------------|----------|---------------------------------|
//! | `Move(pt)`           | node `n` | `NodeHover(n)`                  |
//! | `Move(pt)`           | none     | `PointerLeft`                   |
//! | `Click(pt, mods)`    | node `n` | `NodeClick(n, mods)`            |
//! | `Click(pt, mods)`    | none     | nothing                         |
//! | `Leave`              |          | `PointerLeft`                   |
//!
//! Listeners typically react by pushing new key sets back in through
//! [`Icicle::update_selection`](crate::Icicle::update_selection).

use core::fmt;

use icicle_layout::Layout;
use icicle_tree::{NodeId, Tree};
use kurbo::Point;

use crate::types::Modifiers;

/// Raw pointer input in canvas coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a position.
    Move(Point),
    /// Primary button clicked at a position.
    Click(Point, Modifiers),
    /// Pointer left the canvas.
    Leave,
}

/// Event published to listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IcicleEvent {
    /// Pointer is over a node.
    NodeHover(NodeId),
    /// A node was clicked.
    NodeClick(NodeId, Modifiers),
    /// Pointer is no longer over any node.
    PointerLeft,
}

impl PointerEvent {
    /// Hit-test this input against `layout` and name the event it produces, if any.
    pub fn resolve(self, tree: &Tree, layout: &Layout) -> Option<IcicleEvent> {
        match self {
            Self::Move(pt) => Some(match layout.node_at(tree, pt) {
                Some(node) => IcicleEvent::NodeHover(node),
                None => IcicleEvent::PointerLeft,
            }),
            Self::Click(pt, mods) => layout
                .node_at(tree, pt)
                .map(|node| IcicleEvent::NodeClick(node, mods)),
            Self::Leave => Some(IcicleEvent::PointerLeft),
        }
    }
}

/// Node under the pointer, as last reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<NodeId>,
}

impl HoverState {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered node.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Track `event`; returns `true` if the hovered node changed.
    pub fn observe(&mut self, event: &IcicleEvent) -> bool {
        let next = match *event {
            IcicleEvent::NodeHover(node) => Some(node),
            IcicleEvent::PointerLeft => None,
            IcicleEvent::NodeClick(..) => return false,
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&IcicleEvent)>;

/// Listener registry. Delivery is synchronous and in registration order.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(Subscription, Listener)>,
    next: u64,
}

impl Listeners {
    /// No listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it receives every later event.
    pub fn subscribe(&mut self, listener: impl FnMut(&IcicleEvent) + 'static) -> Subscription {
        let id = Subscription(self.next);
        self.next += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != subscription);
        self.entries.len() != before
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &IcicleEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    /// Number of listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nobody listens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
