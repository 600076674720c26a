// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two linked icicles: the package tree and one clustering.
//!
//! Loads both trees from JSON, shades the package tree by its best match in the clustering and
//! the clustering by its similarity to the packages, then replays a few pointer events. Hovering
//! a node highlights its leaves in both views; clicking it selects them.
//!
//! Run:
//! - `cargo run -p icicle_demos --example linked_icicles`
//! - `RUST_LOG=debug cargo run -p icicle_demos --example linked_icicles`

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use icicle_layout::{Hit, Layout};
use icicle_tree::{Tree, TreeError, TreeRegistry};
use icicle_view::{
    Color, GrayRamp, HOVER_CHANNEL, Icicle, IcicleEvent, IcicleOptions, MAIN_CHANNEL, Modifiers,
    Pixmap, PointerEvent, ReferenceView,
};
use kurbo::{Point, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PACKAGES: &str = r#"{
  "couplingConcept": "packages",
  "root": { "key": "root", "children": [
    { "key": "app", "children": [
      { "key": "app.ui", "children": [
        { "key": "app.ui.Window", "children": [] },
        { "key": "app.ui.Button", "children": [] },
        { "key": "app.ui.Menu", "children": [] }
      ]},
      { "key": "app.core", "children": [
        { "key": "app.core.Model", "children": [] },
        { "key": "app.core.Store", "children": [] }
      ]}
    ]},
    { "key": "util", "children": [
      { "key": "util.Strings", "children": [] },
      { "key": "util.Files", "children": [] },
      { "key": "util.Paths", "children": [] }
    ]}
  ]}
}"#;

const CLUSTERING: &str = r#"{
  "couplingConcept": "CC.I",
  "root": { "key": "all", "children": [
    { "key": "views", "children": [
      { "key": "app.ui.Window", "children": [] },
      { "key": "app.ui.Button", "children": [] },
      { "key": "app.ui.Menu", "children": [] },
      { "key": "util.Strings", "children": [] }
    ]},
    { "key": "storage", "children": [
      { "key": "app.core.Store", "children": [] },
      { "key": "util.Files", "children": [] },
      { "key": "util.Paths", "children": [] }
    ]},
    { "key": "app.core.Model", "children": [] }
  ]}
}"#;

type View<'t> = Icicle<'t, icicle_view::Shade, ReferenceView<'t>, GrayRamp, Pixmap>;

fn view<'t>(registry: &'t TreeRegistry, concept: &str) -> Result<View<'t>, TreeError> {
    let tree = registry.get(concept)?;
    let selected = ["CC.I"];
    let value_fn = ReferenceView::for_concept(registry, concept, &selected)?;
    let options = IcicleOptions {
        size: Size::new(0.0, 48.0),
        ..IcicleOptions::default()
    };
    Ok(Icicle::new(tree, value_fn, GrayRamp::default(), Pixmap::default(), options))
}

/// One character per 5x3 pixel block.
fn thumbnail(pixmap: &Pixmap) -> String {
    let glyph = |c: Color| match c {
        Color { a: 0, .. } => ' ',
        c if c == Color::from_rgb24(0x000080) => '|',
        c if c == Color::from_rgb24(0xFAEB9E) => '.',
        c if c == Color::from_rgb24(0xF3CD0D) => 'h',
        c if c == Color::from_rgb24(0x4040C0) => 'M',
        c if c == Color::from_rgb24(0x1A1A4D) => '#',
        c if c.r < 96 => '@',
        c if c.r < 192 => '+',
        _ => '-',
    };
    let mut out = String::new();
    for y in (1..pixmap.height()).step_by(3) {
        for x in (2..pixmap.width()).step_by(5) {
            out.push(pixmap.pixel(x, y).map_or(' ', glyph));
        }
        out.push('\n');
    }
    out
}

fn leaf_keys(tree: &Tree, event: &IcicleEvent) -> Option<BTreeSet<String>> {
    match *event {
        IcicleEvent::NodeHover(node) | IcicleEvent::NodeClick(node, _) => {
            Some(tree.leaf_key_set(node).clone())
        }
        IcicleEvent::PointerLeft => None,
    }
}

/// Root path and rectangle of the node under `pt`.
fn describe(tree: &Tree, layout: &Layout, pt: Point) -> String {
    match layout.hit_test_point(tree, pt) {
        Some(Hit { node, path }) => {
            let path: Vec<&str> = path.iter().map(|&id| tree.key(id)).collect();
            let r = layout.rect(node).rect;
            format!(
                "{} at ({:.0}, {:.0})..({:.0}, {:.0})",
                path.join(" / "),
                r.x0,
                r.y0,
                r.x1,
                r.y1
            )
        }
        None => String::from("nothing"),
    }
}

fn main() -> Result<(), TreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut registry = TreeRegistry::new();
    let report = registry.load_json([("packages", PACKAGES), ("CC.I", CLUSTERING)]);
    info!(loaded = ?report.loaded, failed = report.failed.len(), "registry loaded");

    let mut packages = view(&registry, "packages")?;
    let mut clustering = view(&registry, "CC.I")?;

    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        clustering.subscribe(move |e| events.borrow_mut().push(*e));
    }

    let storage = clustering
        .tree()
        .find("storage")
        .ok_or_else(|| TreeError::UnknownTreeName("storage".into()))?;
    let over_storage = clustering.layout().rect(storage).rect.center();
    let inputs = [
        PointerEvent::Move(over_storage),
        PointerEvent::Click(over_storage, Modifiers::empty()),
        PointerEvent::Move(Point::new(-1.0, -1.0)),
    ];

    for input in inputs {
        if let PointerEvent::Move(pt) | PointerEvent::Click(pt, _) = input {
            let target = describe(clustering.tree(), clustering.layout(), pt);
            info!(%target, "pointer over");
        }
        clustering.handle_pointer(input);
        for event in events.borrow_mut().drain(..) {
            let tree = clustering.tree();
            let keys = leaf_keys(tree, &event).unwrap_or_default();
            let channel = match event {
                IcicleEvent::NodeClick(..) => MAIN_CHANNEL,
                _ => HOVER_CHANNEL,
            };
            let here = clustering.update_selection(channel, keys.iter().cloned());
            let there = packages.update_selection(channel, keys);
            info!(?event, channel, here = here.len(), there = there.len(), "linked update");
        }
        println!("after {input:?}");
        println!("packages:\n{}", thumbnail(packages.surface()));
        println!("CC.I:\n{}", thumbnail(clustering.surface()));
    }
    Ok(())
}
