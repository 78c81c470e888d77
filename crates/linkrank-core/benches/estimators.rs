//! Estimator performance benchmarks
//!
//! Measures performance of:
//! - Random-walk sampling at several sample counts
//! - Iterative solving at several graph sizes

use linkrank_core::{IterativeEstimator, LinkGraph, MonteCarloEstimator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Ring of `n` pages where every page also links to the page `stride` ahead,
/// with every tenth page left dangling
fn ring_graph(n: usize, stride: usize) -> LinkGraph {
    LinkGraph::from_links((0..n).map(|i| {
        let targets = if i % 10 == 9 {
            Vec::new()
        } else {
            let mut t = vec![format!("page{}", (i + 1) % n)];
            let skip = (i + stride) % n;
            if skip != i && skip != (i + 1) % n {
                t.push(format!("page{}", skip));
            }
            t
        };
        (format!("page{}", i), targets)
    }))
    .unwrap()
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let graph = ring_graph(200, 7);

    for samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &samples| {
            let estimator = MonteCarloEstimator::new().with_samples(samples);
            b.iter(|| estimator.run_seeded(black_box(&graph), 42).unwrap());
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [10, 100, 1_000] {
        let graph = ring_graph(size, 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            let estimator = IterativeEstimator::new();
            b.iter(|| estimator.run(black_box(graph)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_iteration);
criterion_main!(benches);
