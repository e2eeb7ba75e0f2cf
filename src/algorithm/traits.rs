use std::fmt::Debug;
use std::hash::Hash;

use log::warn;
use num_traits::{Float, Zero};
use rustc_hash::FxHashMap;

use crate::graph::Graph;
use crate::{Error, Result};

/// Distances and predecessors computed from a single source.
///
/// The result owns its data and is not tied to the graph it was computed
/// from; mutating the graph afterwards leaves it untouched.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: serde::Serialize + Eq + Hash, W: serde::Serialize + Float",
        deserialize = "K: serde::Deserialize<'de> + Eq + Hash, W: serde::Deserialize<'de> + Float"
    ))
)]
pub struct ShortestPathResult<K, W> {
    /// Source node key
    source: K,

    /// Distance from source to each node, infinity when unreached
    #[cfg_attr(feature = "serde", serde(with = "unreached_as_none"))]
    distances: FxHashMap<K, W>,

    /// Predecessor of each node in the shortest path tree
    predecessors: FxHashMap<K, Option<K>>,
}

impl<K, W> ShortestPathResult<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(
        source: K,
        distances: FxHashMap<K, W>,
        predecessors: FxHashMap<K, Option<K>>,
    ) -> Self {
        ShortestPathResult {
            source,
            distances,
            predecessors,
        }
    }

    /// Builds a result from externally produced distance and predecessor maps.
    ///
    /// The node set is the key set of `distances`; it must contain `source`.
    /// Nodes missing from `predecessors` are treated as having none.
    pub fn from_parts<D, P>(source: K, distances: D, predecessors: P) -> Result<Self>
    where
        D: IntoIterator<Item = (K, W)>,
        P: IntoIterator<Item = (K, Option<K>)>,
    {
        let distances: FxHashMap<K, W> = distances.into_iter().collect();
        if !distances.contains_key(&source) {
            return Err(Error::unknown_node(&source));
        }

        let mut predecessors: FxHashMap<K, Option<K>> = predecessors
            .into_iter()
            .filter(|(key, _)| distances.contains_key(key))
            .collect();
        for key in distances.keys() {
            predecessors.entry(key.clone()).or_insert(None);
        }

        Ok(Self::new(source, distances, predecessors))
    }

    pub fn source(&self) -> &K {
        &self.source
    }

    /// Number of nodes the result covers
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Returns the distance from the source, infinity if `key` was not reached
    pub fn distance_to(&self, key: &K) -> Result<W> {
        self.distances
            .get(key)
            .copied()
            .ok_or_else(|| Error::unknown_node(key))
    }

    pub fn is_reachable(&self, key: &K) -> Result<bool> {
        Ok(self.distance_to(key)? != W::infinity())
    }

    pub fn reachable_count(&self) -> usize {
        self.distances
            .values()
            .filter(|distance| **distance != W::infinity())
            .count()
    }

    pub fn predecessor(&self, key: &K) -> Result<Option<&K>> {
        self.predecessors
            .get(key)
            .map(Option::as_ref)
            .ok_or_else(|| Error::unknown_node(key))
    }

    pub fn distances(&self) -> impl Iterator<Item = (&K, W)> + '_ {
        self.distances.iter().map(|(key, distance)| (key, *distance))
    }

    pub fn predecessors(&self) -> impl Iterator<Item = (&K, Option<&K>)> + '_ {
        self.predecessors
            .iter()
            .map(|(key, pred)| (key, pred.as_ref()))
    }

    /// Returns the path from the source to `key`, both ends included.
    ///
    /// `Ok(None)` means `key` was not reached. A predecessor chain that does not
    /// lead back to the source within `node_count` steps is reported as
    /// [`Error::CorruptPathState`].
    pub fn path_to(&self, key: &K) -> Result<Option<Vec<K>>> {
        let pred = self
            .predecessors
            .get(key)
            .ok_or_else(|| Error::unknown_node(key))?;

        if *key == self.source {
            return Ok(Some(vec![key.clone()]));
        }
        if pred.is_none() {
            return Ok(None);
        }

        let limit = self.distances.len();
        let mut path = vec![key.clone()];
        let mut current = key;

        while *current != self.source {
            match self.predecessors.get(current) {
                Some(Some(pred)) if path.len() < limit => {
                    path.push(pred.clone());
                    current = pred;
                }
                _ => {
                    warn!(
                        "Predecessor chain from {:?} does not reach source {:?}",
                        key, self.source
                    );
                    return Err(Error::CorruptPathState {
                        target: format!("{:?}", key),
                        steps: path.len(),
                    });
                }
            }
        }

        path.reverse();
        Ok(Some(path))
    }
}

/// Writes unreached distances as `None`, since text formats such as JSON
/// cannot carry infinity.
#[cfg(feature = "serde")]
mod unreached_as_none {
    use std::hash::Hash;

    use num_traits::Float;
    use rustc_hash::FxHashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<K, W, S>(
        distances: &FxHashMap<K, W>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        K: Serialize,
        W: Float + Serialize,
        S: Serializer,
    {
        serializer.collect_map(distances.iter().map(|(key, distance)| {
            let distance = if *distance == W::infinity() {
                None
            } else {
                Some(*distance)
            };
            (key, distance)
        }))
    }

    pub fn deserialize<'de, K, W, D>(
        deserializer: D,
    ) -> std::result::Result<FxHashMap<K, W>, D::Error>
    where
        K: Deserialize<'de> + Eq + Hash,
        W: Float + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let raw: FxHashMap<K, Option<W>> = Deserialize::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(key, distance)| (key, distance.unwrap_or_else(W::infinity)))
            .collect())
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<K, W>, target: &K) -> Result<Option<Vec<K>>> {
        result.path_to(target)
    }
}
