use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};
use rustc_hash::FxHashMap;

use crate::graph::traits::{Graph, MutableGraph, Neighbors};
use crate::{Error, Result};

/// A directed graph keyed by caller-chosen node keys.
///
/// Every node carries an opaque payload `N` that the algorithms never look at.
/// Edges live in a two-level map `from -> (to -> weight)`; an infinite weight
/// keeps the edge stored but takes it out of [`Graph::neighbors`].
///
/// The graph has no internal synchronization. Mutating it while a
/// [`Neighbors`] snapshot or a shortest path computation is in progress is
/// not supported; wrap it in a lock if it is shared between threads.
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, N, W> {
    /// Optional identifier carried along with the graph
    id: Option<String>,

    /// Node payloads by key
    nodes: FxHashMap<K, N>,

    /// Outgoing edges for each node: from -> (to -> weight)
    connectivity: FxHashMap<K, FxHashMap<K, W>>,
}

impl<K, N, W> Default for DirectedGraph<K, N, W> {
    fn default() -> Self {
        DirectedGraph {
            id: None,
            nodes: FxHashMap::default(),
            connectivity: FxHashMap::default(),
        }
    }
}

impl<K, N, W> DirectedGraph<K, N, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            id: None,
            nodes: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            connectivity: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    /// Creates an edgeless graph from an already built node mapping
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
    {
        DirectedGraph {
            id: None,
            nodes: nodes.into_iter().collect(),
            connectivity: FxHashMap::default(),
        }
    }

    /// Sets the graph identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Returns an independent copy of the nodes and edges under a new identifier
    pub fn copy_with_id(&self, new_id: Option<String>) -> Self
    where
        N: Clone,
    {
        DirectedGraph {
            id: new_id,
            nodes: self.nodes.clone(),
            connectivity: self.connectivity.clone(),
        }
    }

    /// Returns the payload stored at `key`
    pub fn get_node(&self, key: &K) -> Result<&N> {
        self.nodes.get(key).ok_or_else(|| Error::unknown_node(key))
    }

    pub fn get_node_mut(&mut self, key: &K) -> Result<&mut N> {
        self.nodes.get_mut(key).ok_or_else(|| Error::unknown_node(key))
    }

    /// Returns all stored edges as `(from, to, weight)`, disabled ones included
    pub fn edges(&self) -> Vec<(K, K, W)> {
        self.connectivity
            .iter()
            .flat_map(|(from, targets)| {
                targets
                    .iter()
                    .map(move |(to, weight)| (from.clone(), to.clone(), *weight))
            })
            .collect()
    }

    /// Returns the stored outgoing edges of `from`, disabled ones included
    pub fn outgoing_edges(&self, from: &K) -> Vec<(K, W)> {
        self.connectivity
            .get(from)
            .map(|targets| {
                targets
                    .iter()
                    .map(|(to, weight)| (to.clone(), *weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sets the weight of an existing edge to infinity so it is no longer traversed
    pub fn disable_edge(&mut self, from: &K, to: &K) -> bool {
        match self
            .connectivity
            .get_mut(from)
            .and_then(|targets| targets.get_mut(to))
        {
            Some(weight) => {
                *weight = W::infinity();
                true
            }
            None => false,
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.connectivity
            .values()
            .flat_map(|targets| targets.values())
            .all(|weight| *weight >= W::zero())
    }
}

impl<K, N, W> Graph<K, W> for DirectedGraph<K, N, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.connectivity.values().map(|targets| targets.len()).sum()
    }

    fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    fn node_keys(&self) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(self.nodes.keys().cloned())
    }

    fn neighbors(&self, from: &K) -> Neighbors<K> {
        match self.connectivity.get(from) {
            Some(targets) => Neighbors::new(
                targets
                    .iter()
                    .filter(|(_, weight)| **weight != W::infinity())
                    .map(|(to, _)| to.clone())
                    .collect(),
            ),
            None => Neighbors::empty(),
        }
    }

    fn get_weight(&self, from: &K, to: &K) -> Option<W> {
        self.connectivity
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
    }
}

impl<K, N, W> MutableGraph<K, N, W> for DirectedGraph<K, N, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, key: K, payload: N) -> Option<N> {
        self.nodes.insert(key, payload)
    }

    fn remove_node(&mut self, key: &K) -> Result<N> {
        let payload = self
            .nodes
            .remove(key)
            .ok_or_else(|| Error::unknown_node(key))?;

        self.connectivity.remove(key);
        for targets in self.connectivity.values_mut() {
            targets.remove(key);
        }

        Ok(payload)
    }

    fn add_edge(&mut self, from: K, to: K, weight: W) -> Result<()> {
        self.validate(&[&from, &to])?;
        self.connectivity.entry(from).or_default().insert(to, weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: &K, to: &K) -> bool {
        self.connectivity
            .get_mut(from)
            .map_or(false, |targets| targets.remove(to).is_some())
    }
}
