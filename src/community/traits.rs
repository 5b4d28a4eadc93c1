//! The petgraph-facing detection interface.

use crate::error::Result;
use petgraph::graph::UnGraph;

/// Interface for running community detection on a petgraph graph.
///
/// The divisive machinery works on an internal CSR representation;
/// this trait is the adapter for callers who already hold an
/// [`UnGraph`]. Implementors lower the graph to an edge list, run
/// their partitioning pipeline, and map the result back to node
/// indices.
pub trait CommunityDetection {
    /// Split `graph` into communities.
    ///
    /// Returns one community id per node, indexed by `NodeIndex`, with
    /// ids in `[0, num_communities)`.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>>;
}
