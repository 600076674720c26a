// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks across tree, layout and view.

use std::collections::BTreeSet;

use icicle_layout::{InnerWidth, LayoutConfig};
use icicle_tree::{NodeRef, TreeRegistry};
use icicle_view::{
    Color, GrayRamp, HOVER_CHANNEL, Icicle, IcicleEvent, IcicleOptions, MAIN_CHANNEL, Pixmap,
    PointerEvent, Recorder, ReferenceView, Shade,
};
use kurbo::Size;

const PACKAGES: &str = r#"{
  "couplingConcept": "packages",
  "root": { "key": "root", "children": [
    { "key": "app", "children": [
      { "key": "app.ui", "children": [
        { "key": "app.ui.Window", "children": [] },
        { "key": "app.ui.Button", "children": [] }
      ]},
      { "key": "app.core", "children": [
        { "key": "app.core.Model", "children": [] },
        { "key": "app.core.Store", "children": [] },
        { "key": "app.core.Event", "children": [] }
      ]}
    ]},
    { "key": "util", "children": [
      { "key": "util.Strings", "children": [] },
      { "key": "util.Files", "children": [] }
    ]}
  ]}
}"#;

const CLUSTERING: &str = r#"{
  "couplingConcept": "CC.I",
  "root": { "key": "r", "children": [
    { "key": "k1", "label": "cluster one", "children": [
      { "key": "app.ui.Window", "children": [] },
      { "key": "app.ui.Button", "children": [] },
      { "key": "app.core.Event", "children": [] }
    ]},
    { "key": "k2", "children": [
      { "key": "k2.only", "children": [
        { "key": "k3", "children": [
          { "key": "app.core.Model", "children": [] },
          { "key": "app.core.Store", "children": [] }
        ]},
        { "key": "util.Files", "children": [] }
      ]}
    ]},
    { "key": "util.Strings", "children": [] }
  ]}
}"#;

fn registry() -> TreeRegistry {
    let mut registry = TreeRegistry::new();
    let report = registry.load_json([("packages", PACKAGES), ("CC.I", CLUSTERING)]);
    assert!(report.is_complete(), "both documents load: {report:?}");
    registry
}

fn keys(ks: &[&str]) -> BTreeSet<String> {
    ks.iter().map(|&k| k.to_owned()).collect()
}

#[test]
fn selection_marks_track_each_step_and_redraws_are_incremental() {
    let registry = registry();
    let tree = registry.get("CC.I").unwrap();
    let mut view = Icicle::new(
        tree,
        |_: NodeRef<'_>| 0.0_f64,
        GrayRamp::default(),
        Recorder::new(),
        IcicleOptions::default(),
    );

    let steps: [&[&str]; 6] = [
        &[],
        &["app.ui.Window"],
        &["app.ui.Window", "util.Files", "app.core.Store"],
        &["util.Files"],
        &["util.Files", "no.such.Key"],
        &[],
    ];
    let mut previous = BTreeSet::new();
    for step in steps {
        view.surface_mut().take();
        let next = keys(step);
        view.update_selection(MAIN_CHANNEL, next.iter().cloned());

        let valid = |s: &BTreeSet<String>| -> BTreeSet<String> {
            s.iter()
                .filter(|k| tree.leaf_by_key(k).is_some())
                .cloned()
                .collect()
        };
        let expected_redraws = valid(&previous).symmetric_difference(&valid(&next)).count();
        assert_eq!(view.surface().fills(), expected_redraws, "redraws for {step:?}");

        let marked: BTreeSet<String> = view
            .selections()
            .marked(MAIN_CHANNEL)
            .map(|id| tree.key(id).to_owned())
            .collect();
        assert_eq!(marked, valid(&next), "marks after {step:?}");
        previous = next;
    }
}

#[test]
fn worked_selection_scenario() {
    let registry = registry();
    let tree = registry.get("packages").unwrap();
    let mut view = Icicle::new(
        tree,
        |_: NodeRef<'_>| 0.0_f64,
        GrayRamp::default(),
        Recorder::new(),
        IcicleOptions::default(),
    );
    let mut counts = Vec::new();
    let steps: [&[&str]; 3] = [
        &["util.Files"],
        &["util.Files", "util.Strings"],
        &["util.Strings"],
    ];
    for step in steps {
        counts.push(view.update_selection(MAIN_CHANNEL, step.iter().copied()).len());
    }
    assert_eq!(counts, [1, 1, 1]);
    assert_eq!(
        view.selections().selected(MAIN_CHANNEL),
        Some(&keys(&["util.Strings"]))
    );
}

#[test]
fn incremental_and_full_repaints_agree() {
    let registry = registry();
    let reference = registry.reference().unwrap();
    let tree = registry.get("CC.I").unwrap();
    let view_fn = ReferenceView::for_concept(&registry, "CC.I", &[]).unwrap();
    let options = IcicleOptions {
        size: Size::new(200.0, 333.0),
        layout: LayoutConfig {
            inner_width: InnerWidth::Fill,
            ..LayoutConfig::default()
        },
        ..IcicleOptions::default()
    };
    let mut view = Icicle::new(tree, view_fn, GrayRamp::default(), Pixmap::default(), options);

    view.update_selection(MAIN_CHANNEL, ["app.ui.Button", "util.Strings"]);
    view.update_selection(HOVER_CHANNEL, ["util.Strings", "app.core.Model"]);
    view.update_selection(MAIN_CHANNEL, ["app.core.Model"]);
    let incremental = view.surface().clone();

    view.render_all();
    assert_eq!(view.surface().pixels(), incremental.pixels());
    assert_eq!(view.surface().labels(), incremental.labels());
    assert_eq!(view.surface().width(), 200);

    // k1 = {Window, Button, Event} against app.ui = {Window, Button}: 2/3.
    let k1 = tree.find("k1").unwrap();
    let Shade { intensity, concept } = view.value(k1).clone();
    assert!((intensity - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(concept.as_deref(), Some(reference.coupling_concept()));
}

#[test]
fn full_repaint_evaluates_each_inner_node_once() {
    let registry = registry();
    let tree = registry.get("CC.I").unwrap();
    let reference = registry.reference().unwrap();
    let mut view = Icicle::new(
        tree,
        |n: NodeRef<'_>| n.max_similarity(reference.root_ref()),
        GrayRamp::default(),
        Recorder::new(),
        IcicleOptions::default(),
    );
    let inner = tree
        .ids()
        .filter(|&id| tree.role(id) == icicle_tree::NodeRole::Inner)
        .count();
    for _ in 0..3 {
        view.render_all();
    }
    view.resize(1000.0);
    assert_eq!(view.values().evaluations(), inner);
}

#[test]
fn hover_events_drive_the_hover_channel() {
    let registry = registry();
    let tree = registry.get("packages").unwrap();
    let mut view = Icicle::new(
        tree,
        |_: NodeRef<'_>| 0.0_f64,
        GrayRamp::default(),
        Pixmap::default(),
        IcicleOptions::default(),
    );

    let ui = tree.find("app.ui").unwrap();
    let center = view.layout().rect(ui).rect.center();
    let Some(IcicleEvent::NodeHover(node)) = view.handle_pointer(PointerEvent::Move(center)) else {
        panic!("moving over app.ui hovers it");
    };
    let leaves: Vec<String> = tree.leaf_key_set(node).iter().cloned().collect();
    let diff = view.update_selection(HOVER_CHANNEL, leaves);
    assert_eq!(diff.added.len(), 2);

    let window = view.layout().rect(tree.find("app.ui.Window").unwrap()).rect;
    let hovered = view.surface().pixel(window.x0 as usize + 1, window.center().y as usize);
    assert_eq!(hovered, Some(Color::from_rgb24(0xF3CD0D)));

    assert_eq!(
        view.handle_pointer(PointerEvent::Leave),
        Some(IcicleEvent::PointerLeft)
    );
    view.update_selection(HOVER_CHANNEL, Vec::<String>::new());
    let plain = view.surface().pixel(window.x0 as usize + 1, window.center().y as usize);
    assert_eq!(plain, Some(Color::from_rgb24(0xFAEB9E)));
}
