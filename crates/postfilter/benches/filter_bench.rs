//! Benchmarks for the filter pass.
//!
//! Run with: cargo bench -p postfilter

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use postfilter::{Post, apply};
use std::hint::black_box;

fn make_posts(n: usize) -> Vec<Post> {
    (0..n)
        .map(|i| Post::new(format!("Post {i}: notes on release {}", i % 97)))
        .collect()
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/apply");

    for n in [10, 100, 1000] {
        let mut posts = make_posts(n);
        group.bench_with_input(BenchmarkId::new("ascii_query", n), &n, |b, _| {
            b.iter(|| apply(black_box("release 42"), &mut posts))
        });

        let mut posts = make_posts(n);
        group.bench_with_input(BenchmarkId::new("empty_query", n), &n, |b, _| {
            b.iter(|| apply(black_box(""), &mut posts))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply);
criterion_main!(benches);
