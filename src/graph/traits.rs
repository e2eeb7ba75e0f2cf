use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::{Error, Result};

/// Trait representing a weighted directed graph addressed by node keys
pub trait Graph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of stored edges, disabled ones included
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, key: &K) -> bool;

    /// Returns an iterator over all node keys
    fn node_keys(&self) -> Box<dyn Iterator<Item = K> + '_>;

    /// Returns the destinations reachable from `from` over a finite-weight edge.
    ///
    /// The sequence is a snapshot taken at call time, so it stays valid when
    /// the graph is mutated afterwards. Clone it to iterate it again.
    fn neighbors(&self, from: &K) -> Neighbors<K>;

    /// Gets the weight of an edge if it exists
    fn get_weight(&self, from: &K, to: &K) -> Option<W>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &K, to: &K) -> bool {
        self.get_weight(from, to).is_some()
    }

    /// Fails with [`Error::UnknownNodeKey`] for the first key that is not in the graph
    fn validate(&self, keys: &[&K]) -> Result<()> {
        match keys.iter().find(|key| !self.contains_node(key)) {
            Some(missing) => Err(Error::unknown_node(*missing)),
            None => Ok(()),
        }
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<K, N, W>: Graph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Inserts or overwrites the node at `key`, returning the previous payload
    fn add_node(&mut self, key: K, payload: N) -> Option<N>;

    /// Removes a node together with every edge leaving or entering it
    fn remove_node(&mut self, key: &K) -> Result<N>;

    /// Inserts or overwrites the directed edge `from -> to`
    fn add_edge(&mut self, from: K, to: K, weight: W) -> Result<()>;

    /// Removes an edge, returning whether it existed
    fn remove_edge(&mut self, from: &K, to: &K) -> bool;
}

/// Snapshot of the finite-weight neighbors of a node.
#[derive(Debug, Clone)]
pub struct Neighbors<K> {
    keys: std::vec::IntoIter<K>,
}

impl<K> Neighbors<K> {
    pub(crate) fn new(keys: Vec<K>) -> Self {
        Neighbors {
            keys: keys.into_iter(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl<K> Iterator for Neighbors<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K> ExactSizeIterator for Neighbors<K> {}
