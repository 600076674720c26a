// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Icicle Tree: load documents, inspect normalization, and look trees up.

use icicle_tree::TreeRegistry;

fn main() {
    let packages = r#"{ "couplingConcept": "packages", "root": { "key": "root", "children": [
        { "key": "a", "children": [] },
        { "key": "b", "children": [] } ] } }"#;
    // "wrap" has a single child and collapses into "inner".
    let clustering = r#"{ "couplingConcept": "CC.I", "root": { "key": "r", "children": [
        { "key": "wrap", "children": [
            { "key": "inner", "children": [
                { "key": "a", "children": [] },
                { "key": "b", "children": [] } ] } ] } ] } }"#;
    let broken = r#"{ "couplingConcept": "ACDC", "root": { "key": "r" } }"#;

    let mut registry = TreeRegistry::new();
    let report = registry.load_json([
        ("packages", packages),
        ("CC.I", clustering),
        ("ACDC", broken),
    ]);
    println!("loaded: {:?}", report.loaded);
    for (name, err) in &report.failed {
        println!("failed: {name}: {err}");
    }

    for tree in registry.coupling_trees() {
        let keys: Vec<&str> = tree.ids().map(|id| tree.key(id)).collect();
        println!("{}: {:?}", tree.coupling_concept(), keys);
    }
    if let Err(err) = registry.get("WCA") {
        println!("lookup: {err}");
    }
}
