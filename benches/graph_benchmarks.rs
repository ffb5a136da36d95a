use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wgraph::{Graph, GraphBuilder};

/// Erdos-Renyi style graph: `size` nodes, ~`size * 4` random weighted edges.
fn random_graph(size: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::with_capacity(size);
    for i in 0..size.saturating_sub(1) {
        // Spanning chain keeps the graph connected
        builder
            .add_edge(&format!("n{}", i), &format!("n{}", i + 1), rng.gen_range(1.0..100.0))
            .unwrap();
    }
    for _ in 0..size * 3 {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        builder
            .add_edge(&format!("n{}", a), &format!("n{}", b), rng.gen_range(1.0..100.0))
            .unwrap();
    }
    builder.build()
}

/// Benchmark graph construction throughput
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10_000].iter() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows: Vec<(String, String, String)> = (0..size * 4)
            .map(|_| {
                (
                    format!("n{}", rng.gen_range(0..*size)),
                    format!("n{}", rng.gen_range(0..*size)),
                    format!("{:.3}", rng.gen_range(0.0..50.0)),
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let g = Graph::from_rows(rows.iter().map(|(a, b, w)| (a.as_str(), b.as_str(), w.as_str())))
                    .unwrap();
                criterion::black_box(g.num_edges());
            });
        });
    }
    group.finish();
}

/// Benchmark BFS and Dijkstra between the chain endpoints
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in [100, 1000, 10_000].iter() {
        let g = random_graph(*size, 42);
        let end = format!("n{}", size - 1);

        group.bench_with_input(BenchmarkId::new("unweighted", size), size, |b, _| {
            b.iter(|| criterion::black_box(g.shortest_path_unweighted("n0", &end).len()));
        });
        group.bench_with_input(BenchmarkId::new("weighted", size), size, |b, _| {
            b.iter(|| criterion::black_box(g.shortest_path_weighted("n0", &end).len()));
        });
    }
    group.finish();
}

/// Benchmark threshold components and the bottleneck sweep
fn bench_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold");

    for size in [100, 1000, 10_000].iter() {
        let g = random_graph(*size, 99);
        let end = format!("n{}", size - 1);

        group.bench_with_input(BenchmarkId::new("components", size), size, |b, _| {
            b.iter(|| criterion::black_box(g.connected_components(25.0).len()));
        });
        group.bench_with_input(BenchmarkId::new("smallest_connecting", size), size, |b, _| {
            b.iter(|| criterion::black_box(g.smallest_connecting_threshold("n0", &end)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_shortest_paths, bench_thresholds);
criterion_main!(benches);
