// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-channel leaf selections and their incremental diff.
//!
//! A channel is an independent selection layer named by an opaque string. Each update carries
//! the complete new key set of one channel; [`Selections::update`] compares it with the
//! previous set and reports only the leaves whose flag changed, which is all the renderer
//! needs to redraw.

use std::collections::{BTreeMap, BTreeSet};

use icicle_tree::{Key, NodeId, Tree, sets};
use tracing::{trace, warn};

use crate::types::LeafState;

/// Leaves whose flag changed in one [`Selections::update`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionDiff {
    /// Leaves newly selected, in key order.
    pub added: Vec<NodeId>,
    /// Leaves no longer selected, in key order.
    pub removed: Vec<NodeId>,
    /// Keys that name no leaf of the tree and were skipped.
    pub stale: usize,
}

impl SelectionDiff {
    /// Every changed leaf: additions first, then removals.
    pub fn changed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.added.iter().chain(&self.removed).copied()
    }

    /// Number of changed leaves.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len()
    }

    /// `true` if no leaf changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Current selection of every channel, both as submitted keys and as marked leaves.
#[derive(Clone, Debug, Default)]
pub struct Selections {
    previous: BTreeMap<String, BTreeSet<Key>>,
    marked: BTreeMap<String, BTreeSet<NodeId>>,
}

impl Selections {
    /// No channel has a selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection of `channel` with `selected` and return what changed.
    ///
    /// Keys without a leaf in `tree` are remembered as submitted but mark nothing.
    pub fn update(&mut self, tree: &Tree, channel: &str, selected: BTreeSet<Key>) -> SelectionDiff {
        let previous = self.previous.remove(channel).unwrap_or_default();
        let additions = sets::difference(&selected, &previous);
        let removals = sets::difference(&previous, &selected);

        let marked = self.marked.entry(channel.into()).or_default();
        let mut diff = SelectionDiff::default();
        for key in &additions {
            match tree.leaf_by_key(key) {
                Some(leaf) => {
                    marked.insert(leaf);
                    diff.added.push(leaf);
                }
                None => diff.stale += 1,
            }
        }
        for key in &removals {
            match tree.leaf_by_key(key) {
                Some(leaf) => {
                    marked.remove(&leaf);
                    diff.removed.push(leaf);
                }
                None => diff.stale += 1,
            }
        }
        if diff.stale > 0 {
            warn!(
                concept = tree.coupling_concept(),
                channel,
                stale = diff.stale,
                "ignoring selection keys without a leaf"
            );
        }
        trace!(
            channel,
            added = diff.added.len(),
            removed = diff.removed.len(),
            "selection updated"
        );

        self.previous.insert(channel.into(), selected);
        diff
    }

    /// Keys last submitted for `channel`.
    pub fn selected(&self, channel: &str) -> Option<&BTreeSet<Key>> {
        self.previous.get(channel)
    }

    /// Leaves currently marked on `channel`.
    pub fn marked(&self, channel: &str) -> impl Iterator<Item = NodeId> + '_ {
        self.marked.get(channel).into_iter().flatten().copied()
    }

    /// `true` if `leaf` is marked on `channel`.
    pub fn is_marked(&self, channel: &str, leaf: NodeId) -> bool {
        self.marked.get(channel).is_some_and(|m| m.contains(&leaf))
    }

    /// Colour-relevant flags of `leaf`.
    pub fn leaf_state(&self, leaf: NodeId) -> LeafState {
        let mut state = LeafState::empty();
        for (channel, marked) in &self.marked {
            if let Some(flag) = LeafState::for_channel(channel)
                && marked.contains(&leaf)
            {
                state |= flag;
            }
        }
        state
    }
}
