// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized node values.

use core::fmt;

use icicle_tree::{NodeId, NodeRef};

use crate::values::NodeValue;

/// Per-node memo of a [`NodeValue`], keyed by arena index.
///
/// Each node is evaluated at most once; there is no eviction, the cache lives as long as the
/// view that owns it. All nodes passed in must come from the same [`icicle_tree::Tree`].
pub struct ValueCache<V, F> {
    values: Vec<Option<V>>,
    value_fn: F,
    evaluations: usize,
}

impl<V, F: NodeValue<V>> ValueCache<V, F> {
    /// Empty cache around `value_fn`.
    pub fn new(value_fn: F) -> Self {
        Self {
            values: Vec::new(),
            value_fn,
            evaluations: 0,
        }
    }

    /// Empty cache with room for a tree of `len` nodes.
    pub fn with_capacity(len: usize, value_fn: F) -> Self {
        let mut values = Vec::with_capacity(len);
        values.resize_with(len, || None);
        Self {
            values,
            value_fn,
            evaluations: 0,
        }
    }

    /// Value of `node`, computing it on first request.
    pub fn get(&mut self, node: NodeRef<'_>) -> &V {
        let index = node.id().index();
        if index >= self.values.len() {
            self.values.resize_with(index + 1, || None);
        }
        let value_fn = &mut self.value_fn;
        let evaluations = &mut self.evaluations;
        self.values[index].get_or_insert_with(|| {
            *evaluations += 1;
            value_fn.value(node)
        })
    }

    /// Value of `id` if it has been computed.
    pub fn cached(&self, id: NodeId) -> Option<&V> {
        self.values.get(id.index()).and_then(Option::as_ref)
    }

    /// Number of times the value function has run.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// The wrapped value function.
    pub fn value_fn(&self) -> &F {
        &self.value_fn
    }
}

impl<V, F> fmt::Debug for ValueCache<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCache")
            .field("cached", &self.values.iter().filter(|v| v.is_some()).count())
            .field("evaluations", &self.evaluations)
            .finish_non_exhaustive()
    }
}
