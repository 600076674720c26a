// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of the trees of one project, looked up by coupling concept.
//!
//! A registry starts out [`RegistryState::Loading`], takes one batch of documents through
//! [`TreeRegistry::load`] and becomes [`RegistryState::Ready`]. A document that fails to build
//! is reported and skipped; it never disturbs the trees that did load.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::error::TreeError;
use crate::raw::RawNode;
use crate::tree::Tree;

/// Coupling concept of the reference package hierarchy.
pub const REFERENCE_CONCEPT: &str = "packages";

/// Lifecycle of a [`TreeRegistry`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RegistryState {
    /// Documents have not been loaded yet.
    #[default]
    Loading,
    /// A load pass completed; lookups reflect every tree that built successfully.
    Ready,
}

/// Outcome of [`TreeRegistry::load`].
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    /// Coupling concepts that loaded.
    pub loaded: Vec<String>,
    /// Documents that failed, by the name they were requested under.
    pub failed: Vec<(String, TreeError)>,
}

impl LoadReport {
    /// True if every document loaded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Trees of one project keyed by coupling concept.
#[derive(Debug, Default)]
pub struct TreeRegistry {
    trees: Vec<Tree>,
    state: RegistryState,
}

impl TreeRegistry {
    /// Create an empty registry in the [`RegistryState::Loading`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RegistryState {
        self.state
    }

    /// True once a load pass completed.
    pub fn is_ready(&self) -> bool {
        self.state == RegistryState::Ready
    }

    /// Add a tree, replacing any tree with the same coupling concept. Returns the replaced tree.
    pub fn insert(&mut self, tree: Tree) -> Option<Tree> {
        match self
            .trees
            .iter_mut()
            .find(|t| t.coupling_concept() == tree.coupling_concept())
        {
            Some(slot) => Some(core::mem::replace(slot, tree)),
            None => {
                self.trees.push(tree);
                None
            }
        }
    }

    /// Build every fetched document and mark the registry ready.
    ///
    /// Each item is a coupling concept with either its raw root record or the error its source
    /// produced while fetching it.
    pub fn load<I, S>(&mut self, documents: I) -> LoadReport
    where
        I: IntoIterator<Item = (S, Result<RawNode, TreeError>)>,
        S: Into<String>,
    {
        let mut report = LoadReport::default();
        for (name, fetched) in documents {
            let name = name.into();
            match fetched.and_then(|raw| Tree::build(name.clone(), raw)) {
                Ok(tree) => {
                    self.insert(tree);
                    report.loaded.push(name);
                }
                Err(err) => {
                    warn!(concept = %name, error = %err, "tree failed to load");
                    report.failed.push((name, err));
                }
            }
        }
        self.state = RegistryState::Ready;
        debug!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "registry ready"
        );
        report
    }

    /// [`TreeRegistry::load`] for JSON documents `{ "couplingConcept", "root" }`.
    ///
    /// The tree is registered under the document's own coupling concept; `name` only labels
    /// failures.
    #[cfg(feature = "json")]
    pub fn load_json<'a, I, S>(&mut self, documents: I) -> LoadReport
    where
        I: IntoIterator<Item = (S, &'a str)>,
        S: Into<String>,
    {
        let mut report = LoadReport::default();
        for (name, text) in documents {
            let name = name.into();
            match Tree::from_json(text) {
                Ok(tree) => {
                    report.loaded.push(String::from(tree.coupling_concept()));
                    self.insert(tree);
                }
                Err(err) => {
                    warn!(concept = %name, error = %err, "tree failed to load");
                    report.failed.push((name, err));
                }
            }
        }
        self.state = RegistryState::Ready;
        debug!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "registry ready"
        );
        report
    }

    /// All registered trees, in registration order.
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// The tree for `name`.
    pub fn get(&self, name: &str) -> Result<&Tree, TreeError> {
        self.trees
            .iter()
            .find(|t| t.coupling_concept() == name)
            .ok_or_else(|| TreeError::UnknownTreeName(String::from(name)))
    }

    /// The reference package tree.
    pub fn reference(&self) -> Result<&Tree, TreeError> {
        self.get(REFERENCE_CONCEPT)
    }

    /// Every clustering tree, i.e. every tree except the reference.
    pub fn coupling_trees(&self) -> impl Iterator<Item = &Tree> + '_ {
        self.trees
            .iter()
            .filter(|t| t.coupling_concept() != REFERENCE_CONCEPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn two_leaves(a: &str, b: &str) -> RawNode {
        RawNode::inner("root", vec![RawNode::leaf(a), RawNode::leaf(b)])
    }

    #[test]
    fn load_skips_failures_and_becomes_ready() {
        let mut registry = TreeRegistry::new();
        assert_eq!(registry.state(), RegistryState::Loading);

        let mut broken = two_leaves("a", "b");
        broken.children = None;
        let report = registry.load(vec![
            ("packages", Ok(two_leaves("a", "b"))),
            ("SD.Use", Ok(broken)),
            ("CC.I", Ok(two_leaves("a", "c"))),
            (
                "FO.AggE",
                Err(TreeError::Parse(String::from("connection reset"))),
            ),
        ]);

        assert!(registry.is_ready());
        assert_eq!(report.loaded, ["packages", "CC.I"]);
        assert_eq!(report.failed.len(), 2);
        assert!(matches!(
            report.failed[0],
            (ref name, TreeError::MalformedTree { .. }) if name == "SD.Use"
        ));
        assert!(!report.is_complete());
        assert_eq!(registry.trees().len(), 2, "good trees survive a bad one");
    }

    #[test]
    fn lookup_by_concept() {
        let mut registry = TreeRegistry::new();
        let _ = registry.load(vec![
            ("packages", Ok(two_leaves("a", "b"))),
            ("CC.I", Ok(two_leaves("a", "c"))),
            ("SD.Agg", Ok(two_leaves("b", "c"))),
        ]);

        assert_eq!(registry.get("CC.I").unwrap().coupling_concept(), "CC.I");
        assert_eq!(
            registry.get("EC.Conf").unwrap_err(),
            TreeError::UnknownTreeName(String::from("EC.Conf"))
        );
        assert_eq!(registry.reference().unwrap().coupling_concept(), "packages");
        let clusterings: Vec<&str> = registry
            .coupling_trees()
            .map(Tree::coupling_concept)
            .collect();
        assert_eq!(clusterings, ["CC.I", "SD.Agg"]);
    }

    #[test]
    fn insert_replaces_same_concept() {
        let mut registry = TreeRegistry::new();
        assert!(
            registry
                .insert(Tree::build("CC.I", two_leaves("a", "b")).unwrap())
                .is_none()
        );
        let old = registry.insert(Tree::build("CC.I", two_leaves("x", "y")).unwrap());
        assert!(old.is_some());
        assert_eq!(registry.trees().len(), 1);
        assert!(registry.get("CC.I").unwrap().find("x").is_some());
    }

    #[cfg(feature = "json")]
    #[test]
    fn load_json_uses_document_concept() {
        let mut registry = TreeRegistry::new();
        let report = registry.load_json([
            (
                "packages.json",
                r#"{"couplingConcept":"packages","root":{"key":"r","children":[
                    {"key":"a","children":[]},{"key":"b","children":[]}]}}"#,
            ),
            ("broken.json", r#"{"couplingConcept":"CC.I""#),
        ]);
        assert_eq!(report.loaded, ["packages"]);
        assert_eq!(report.failed[0].0, "broken.json");
        assert!(registry.reference().is_ok());
    }
}
