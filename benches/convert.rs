//! Benchmarks for TOC schema conversion.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use toctree::{Section, Version, normalize, project};

/// Build a uniform tree: `width` children per node, `depth` levels.
fn sample_tree(depth: usize, width: usize) -> Section {
    let mut section = Section::new()
        .with_title(format!("Section at depth {depth}"))
        .with_external_link("chapter.md")
        .with_external(false)
        .with_header(depth == 0);

    if depth > 0 {
        for _ in 0..width {
            section = section.with_child(sample_tree(depth - 1, width));
        }
    }

    section
}

fn bench_normalize(c: &mut Criterion) {
    // 5 levels x 4 children = 1365 nodes
    let tree = sample_tree(5, 4);

    c.bench_function("normalize_v1", |b| {
        b.iter(|| normalize(Version::V1, black_box(&tree)));
    });
    c.bench_function("normalize_v2", |b| {
        b.iter(|| normalize(Version::V2, black_box(&tree)));
    });
}

fn bench_project(c: &mut Criterion) {
    let tree = normalize(Version::V1, &sample_tree(5, 4));

    c.bench_function("project_v1", |b| {
        b.iter(|| project(Version::V1, black_box(&tree)));
    });
    c.bench_function("project_v2", |b| {
        b.iter(|| project(Version::V2, black_box(&tree)));
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let tree = sample_tree(5, 4);

    c.bench_function("round_trip_v1_to_v2", |b| {
        b.iter(|| project(Version::V2, &normalize(Version::V1, black_box(&tree))));
    });
}

criterion_group!(benches, bench_normalize, bench_project, bench_round_trip);
criterion_main!(benches);
