// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while constructing or looking up trees.

use alloc::string::String;

use crate::types::Key;

/// Failure to construct or find a [`Tree`](crate::Tree).
///
/// Construction errors are fatal for the tree being built only; a
/// [`TreeRegistry`](crate::TreeRegistry) keeps every other tree it already loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The raw record is structurally invalid, e.g. a level without a `children` sequence.
    #[error("malformed tree at `{path}`: {reason}")]
    MalformedTree {
        /// `/`-joined keys from the root to the offending record.
        path: String,
        /// What is wrong with the record.
        reason: &'static str,
    },
    /// Two nodes of the same tree share a key.
    #[error("duplicate node key `{0}`")]
    DuplicateKey(Key),
    /// No tree is registered under the requested coupling concept.
    #[error("tree `{0}` does not exist")]
    UnknownTreeName(String),
    /// The input is not a tree document at all.
    #[error("cannot parse tree document: {0}")]
    Parse(String),
}

impl TreeError {
    pub(crate) fn malformed(path: &[&str], reason: &'static str) -> Self {
        Self::MalformedTree {
            path: path.join("/"),
            reason,
        }
    }
}
