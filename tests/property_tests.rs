use keyed_sssp::graph::generators::random_graph;
use keyed_sssp::graph::{DirectedGraph, Graph, MutableGraph};
use proptest::prelude::*;

// Bellman-Ford style reference: relax every edge until nothing changes
fn reference_distances(graph: &DirectedGraph<usize, (), f64>, n: usize, source: usize) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;

    for _ in 0..n {
        let mut changed = false;
        for (from, to, weight) in graph.edges() {
            if weight.is_finite() && dist[from] + weight < dist[to] {
                dist[to] = dist[from] + weight;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn build_graph(n: usize, edges: &[(usize, usize, u16)]) -> DirectedGraph<usize, (), f64> {
    let mut graph = DirectedGraph::from_nodes((0..n).map(|key| (key, ())));
    for &(from, to, weight) in edges {
        graph.add_edge(from % n, to % n, weight as f64).unwrap();
    }
    graph
}

proptest! {
    #[test]
    fn proptest_dijkstra_matches_reference(
        n in 1usize..24,
        edges in prop::collection::vec((0usize..64, 0usize..64, 0u16..100), 0..96),
        source in 0usize..64,
    ) {
        let graph = build_graph(n, &edges);
        let source = source % n;

        let result = graph.shortest_paths_from(&source).unwrap();
        let expected = reference_distances(&graph, n, source);

        prop_assert_eq!(result.distance_to(&source).unwrap(), 0.0);
        for v in 0..n {
            prop_assert_eq!(result.distance_to(&v).unwrap(), expected[v]);
        }
    }

    #[test]
    fn proptest_paths_are_consistent(
        n in 1usize..24,
        edges in prop::collection::vec((0usize..64, 0usize..64, 0u16..100), 0..96),
        source in 0usize..64,
    ) {
        let graph = build_graph(n, &edges);
        let source = source % n;
        let result = graph.shortest_paths_from(&source).unwrap();

        for v in 0..n {
            let distance = result.distance_to(&v).unwrap();
            match result.path_to(&v).unwrap() {
                Some(path) => {
                    prop_assert_eq!(path[0], source);
                    prop_assert_eq!(path[path.len() - 1], v);
                    let cost: f64 = path
                        .windows(2)
                        .map(|pair| graph.get_weight(&pair[0], &pair[1]).unwrap())
                        .sum();
                    prop_assert_eq!(cost, distance);
                }
                None => prop_assert!(distance.is_infinite()),
            }
        }
    }

    #[test]
    fn proptest_remove_node_leaves_no_dangling_edges(
        n in 1usize..24,
        edges in prop::collection::vec((0usize..64, 0usize..64, 0u16..100), 0..96),
        victim in 0usize..64,
    ) {
        let mut graph = build_graph(n, &edges);
        let victim = victim % n;

        graph.remove_node(&victim).unwrap();

        prop_assert_eq!(graph.node_count(), n - 1);
        for (from, to, _) in graph.edges() {
            prop_assert_ne!(from, victim);
            prop_assert_ne!(to, victim);
        }
    }
}

#[test]
fn test_random_graphs_match_reference() {
    for seed in 0..5 {
        let graph = random_graph(200, 4.0, seed);
        let result = graph.shortest_paths_from(&0).unwrap();
        let expected = reference_distances(&graph, 200, 0);

        for v in 0..200 {
            let actual = result.distance_to(&v).unwrap();
            if expected[v].is_infinite() {
                assert!(actual.is_infinite());
            } else {
                assert!((actual - expected[v]).abs() < 1e-9);
            }
        }
    }
}
