// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use icicle_benches::{clustering, packages};
use icicle_tree::NodeRole;

fn bench_leaf_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_key_set");
    for (fanout, depth) in [(4, 4), (8, 3), (10, 4)] {
        let reference = packages(fanout, depth);
        group.throughput(Throughput::Elements(reference.len() as u64));
        group.bench_function(format!("cold_all_nodes_f{fanout}_d{depth}"), |b| {
            b.iter_batched(
                || packages(fanout, depth),
                |tree| {
                    for id in tree.ids() {
                        black_box(tree.leaf_key_set(id).len());
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_max_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_similarity");
    for (fanout, depth) in [(4, 4), (8, 3), (10, 4)] {
        let reference = packages(fanout, depth);
        let query = clustering(&reference, 6, 0x5eed);
        let inner: Vec<_> = query
            .ids()
            .filter(|&id| query.role(id) == NodeRole::Inner)
            .collect();
        // Warm both leaf-set memos so only the search is measured.
        for id in query.ids() {
            query.leaf_key_set(id);
        }
        for id in reference.ids() {
            reference.leaf_key_set(id);
        }
        group.throughput(Throughput::Elements(inner.len() as u64));
        group.bench_function(format!("inner_vs_root_f{fanout}_d{depth}"), |b| {
            b.iter(|| {
                let mut total = 0.0;
                for &id in &inner {
                    total += query.get(id).max_similarity(reference.root_ref());
                }
                black_box(total)
            });
        });
        group.bench_function(format!("disjoint_f{fanout}_d{depth}"), |b| {
            let other = packages(2, 1);
            b.iter(|| black_box(other.root_ref().max_similarity(reference.root_ref())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_leaf_sets, bench_max_similarity);
criterion_main!(benches);
