// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input schema as delivered by a tree source.
//!
//! Records are validated at the construction boundary by [`Tree::build`](crate::Tree::build);
//! `children` is optional here only so that a missing sequence surfaces as
//! [`TreeError::MalformedTree`](crate::TreeError::MalformedTree) with a path, rather than as a
//! generic deserialization error.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::types::Key;

/// One node record of a raw tree.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    /// Unique qualified identifier.
    #[serde(alias = "qualifiedName")]
    pub key: Key,
    /// Display name; the key is used when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Rank among siblings.
    #[serde(default)]
    pub sort_order: f64,
    /// Child records. `None` is a defect; leaves carry an empty sequence.
    #[serde(default)]
    pub children: Option<Vec<RawNode>>,
}

impl RawNode {
    /// A leaf record (explicitly empty `children`).
    pub fn leaf(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            label: None,
            sort_order: 0.0,
            children: Some(Vec::new()),
        }
    }

    /// An inner record with the given children.
    pub fn inner(key: impl Into<Key>, children: Vec<Self>) -> Self {
        Self {
            key: key.into(),
            label: None,
            sort_order: 0.0,
            children: Some(children),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the sibling rank.
    pub fn with_sort_order(mut self, sort_order: f64) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Replace every descendant that has exactly one child by that child.
    ///
    /// Applied bottom-up, so whole single-child chains collapse onto their lowest member.
    /// The record itself is never replaced: a root keeps its identity even with a single child.
    /// Idempotent.
    pub fn normalize(&mut self) {
        let Some(children) = self.children.as_mut() else {
            return;
        };
        for slot in children.iter_mut() {
            slot.normalize();
            if let Some(grandchildren) = slot.children.as_mut()
                && grandchildren.len() == 1
                && let Some(only) = grandchildren.pop()
            {
                *slot = only;
            }
        }
    }

    /// Number of records in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Self::count)
            .sum::<usize>()
    }
}

/// A complete tree document for one coupling concept.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTree {
    /// Name of the clustering algorithm or reference grouping.
    pub coupling_concept: String,
    /// Root record.
    pub root: RawNode,
}
