//! Keyed SSSP - single-source shortest paths over keyed weighted directed graphs
//!
//! A [`DirectedGraph`] stores opaque node payloads under caller-chosen keys and
//! directed, weighted edges between them. [`Dijkstra`] computes shortest paths
//! from one source using an [`IndexedPriorityQueue`] and returns a frozen
//! [`ShortestPathResult`] from which distances and paths can be queried.
//!
//! Edge weights must be non-negative. An infinite weight marks a disabled edge
//! which is never traversed.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use data_structures::IndexedPriorityQueue;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Graph, MutableGraph, Neighbors};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No \"{0}\" node found")]
    UnknownNodeKey(String),

    #[error("Item {0} is already in the priority queue")]
    DuplicateItem(String),

    #[error("No item {0} in priority queue")]
    ItemNotFound(String),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Corrupt predecessor chain for {target} after {steps} steps")]
    CorruptPathState { target: String, steps: usize },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

impl Error {
    pub(crate) fn unknown_node<K: std::fmt::Debug>(key: &K) -> Self {
        Error::UnknownNodeKey(format!("{:?}", key))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
