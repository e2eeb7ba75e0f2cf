pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph, Neighbors};
pub use directed::DirectedGraph;
