// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal set algebra over ordered sets.
//!
//! Only what similarity and selection diffing need: intersection, union, difference and a
//! subset check. The `*_len` variants count without allocating, which is what the similarity
//! search uses on its hot path.

use alloc::collections::BTreeSet;

/// Elements present in both `a` and `b`.
pub fn intersect<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.intersection(b).cloned().collect()
}

/// Elements present in `a`, `b` or both.
pub fn union<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.union(b).cloned().collect()
}

/// Elements of `a` that are not in `b`.
pub fn difference<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.difference(b).cloned().collect()
}

/// True if every element of `inner` is in `outer`.
pub fn contains_all<T: Ord>(outer: &BTreeSet<T>, inner: &BTreeSet<T>) -> bool {
    inner.len() <= outer.len() && inner.is_subset(outer)
}

/// `|a ∩ b|` without materializing the intersection.
///
/// Iterates the smaller set and probes the larger one.
pub fn intersection_len<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|v| large.contains(*v)).count()
}

/// `|a ∪ b|` given the already known intersection size.
#[inline]
pub fn union_len<T>(a: &BTreeSet<T>, b: &BTreeSet<T>, intersection: usize) -> usize {
    a.len() + b.len() - intersection
}
