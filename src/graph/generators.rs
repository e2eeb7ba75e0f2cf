use crate::graph::{DirectedGraph, Graph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` nodes keyed `0..n` and roughly
/// `edge_factor * n` edges with weights in `1.0..100.0`.
///
/// The same seed always yields the same graph.
pub fn random_graph(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<usize, (), f64> {
    let mut graph = DirectedGraph::from_nodes((0..n).map(|key| (key, ())));
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v && !graph.has_edge(&u, &v) {
            let weight = rng.gen_range(1.0..100.0);
            graph
                .add_edge(u, v, weight)
                .expect("both endpoints are in 0..n");
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-connectivity.
///
/// Node `y * width + x` carries its `(x, y)` coordinates as payload. Cardinal
/// moves cost 1.0, diagonal moves 1.4.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<usize, (usize, usize), f64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(y * width + x, (x, y));
        }
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph
                        .add_edge(node, neighbor, cost)
                        .expect("grid neighbors are inside the grid");
                }
            }
        }
    }

    graph
}
