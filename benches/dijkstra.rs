use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyed_sssp::graph::generators::{grid_graph, random_graph};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");

    for &n in &[1_000usize, 10_000] {
        let graph = random_graph(n, 4.0, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| graph.shortest_paths_from(black_box(&0)).unwrap())
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = grid_graph(100, 100);
    c.bench_function("dijkstra_grid_100x100", |b| {
        b.iter(|| graph.shortest_paths_from(black_box(&0)).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
