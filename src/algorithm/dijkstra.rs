use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over an indexed priority queue.
///
/// Every node is queued up front, the source at zero and all others at
/// infinity, and relaxations lower queued priorities in place. Edge weights
/// must be non-negative; with negative weights the outcome is unspecified
/// unless weight validation is enabled.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    /// Reject graphs with negative finite weights before running
    validate_weights: bool,
    /// Initial queue capacity, 0 sizes the queue to the node count
    queue_capacity: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Enable or disable the negative weight check before each run
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Set the initial priority queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    fn check_weights<K, W, G>(graph: &G) -> Result<()>
    where
        K: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<K, W>,
    {
        for from in graph.node_keys() {
            for to in graph.neighbors(&from) {
                if let Some(weight) = graph.get_weight(&from, &to) {
                    if weight < W::zero() {
                        return Err(Error::NegativeWeight {
                            from: format!("{:?}", from),
                            to: format!("{:?}", to),
                            weight: weight.to_f64().unwrap_or(f64::NAN),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn internal(err: Error) -> Error {
    Error::AlgorithmError(err.to_string())
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>> {
        graph.validate(&[source])?;
        if self.validate_weights {
            Self::check_weights(graph)?;
        }

        let n = graph.node_count();
        debug!("Running Dijkstra from {:?} over {} nodes", source, n);

        // Initialize distances and predecessors
        let mut distances: FxHashMap<K, W> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut predecessors: FxHashMap<K, Option<K>> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());

        let capacity = if self.queue_capacity > 0 {
            self.queue_capacity
        } else {
            n
        };
        let mut queue = IndexedPriorityQueue::with_capacity(capacity);

        for key in graph.node_keys() {
            let distance = if key == *source {
                W::zero()
            } else {
                W::infinity()
            };
            distances.insert(key.clone(), distance);
            predecessors.insert(key.clone(), None);
            queue.insert(key, OrderedFloat(distance)).map_err(internal)?;
        }

        // Main Dijkstra loop
        while !queue.is_empty() {
            let u = queue.pop_min().map_err(internal)?;
            let dist_u = distances.get(&u).copied().unwrap_or_else(W::infinity);

            // Relax all finite outgoing edges
            for v in graph.neighbors(&u) {
                let weight = match graph.get_weight(&u, &v) {
                    Some(weight) => weight,
                    None => continue,
                };

                let candidate = dist_u + weight;
                let current = distances.get(&v).copied().unwrap_or_else(W::infinity);

                if candidate < current {
                    trace!("Relaxing {:?} -> {:?}: {:?} < {:?}", u, v, candidate, current);
                    queue
                        .decrease_priority(&v, OrderedFloat(candidate))
                        .map_err(internal)?;
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v, Some(u.clone()));
                }
            }
        }

        let result = ShortestPathResult::new(source.clone(), distances, predecessors);
        debug!(
            "Dijkstra from {:?} reached {} of {} nodes",
            source,
            result.reachable_count(),
            n
        );
        Ok(result)
    }
}

impl<K, N, W> DirectedGraph<K, N, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Computes shortest paths from `source` with a default [`Dijkstra`]
    pub fn shortest_paths_from(&self, source: &K) -> Result<ShortestPathResult<K, W>> {
        Dijkstra::new().compute_shortest_paths(self, source)
    }
}
