// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use icicle_benches::{Rng, clustering, packages};
use icicle_layout::{Layout, LayoutConfig};
use icicle_tree::NodeRef;
use icicle_view::{GrayRamp, Icicle, IcicleOptions, MAIN_CHANNEL, Pixmap};
use kurbo::{Point, Size};

fn bench_full_repaint(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_all");
    for (fanout, depth) in [(4, 3), (8, 3)] {
        let reference = packages(fanout, depth);
        let tree = clustering(&reference, 5, 7);
        let mut view = Icicle::new(
            &tree,
            |n: NodeRef<'_>| n.max_similarity(reference.root_ref()),
            GrayRamp::default(),
            Pixmap::default(),
            IcicleOptions::default(),
        );
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(format!("pixmap_f{fanout}_d{depth}"), |b| {
            b.iter(|| view.render_all());
        });
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_selection");
    let reference = packages(8, 3);
    let tree = clustering(&reference, 5, 11);
    let keys: Vec<String> = tree.leaves().map(|id| tree.key(id).to_owned()).collect();
    let mut view = Icicle::new(
        &tree,
        |_: NodeRef<'_>| 0.5_f64,
        GrayRamp::default(),
        Pixmap::default(),
        IcicleOptions::default(),
    );
    let mut rng = Rng::new(3);
    group.bench_function("toggle_one_of_many", |b| {
        let base: Vec<&str> = keys.iter().take(keys.len() / 2).map(String::as_str).collect();
        b.iter(|| {
            let extra = keys[rng.below(keys.len())].as_str();
            black_box(view.update_selection(MAIN_CHANNEL, base.iter().copied().chain([extra])));
        });
    });
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_at");
    let reference = packages(8, 3);
    let tree = clustering(&reference, 5, 13);
    let layout = Layout::compute(&tree, Size::new(0.0, 2000.0), LayoutConfig::default());
    let width = layout.natural_width();
    let mut rng = Rng::new(5);
    let points: Vec<Point> = (0..1024)
        .map(|_| Point::new(rng.next_f64() * width, rng.next_f64() * 2000.0))
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("random_points", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for &pt in &points {
                hits += usize::from(layout.node_at(&tree, pt).is_some());
            }
            black_box(hits)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_full_repaint, bench_selection, bench_hit_test);
criterion_main!(benches);
