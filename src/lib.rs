//! # cleave
//!
//! Divisive community detection on large sparse undirected graphs.
//!
//! The crate implements the Girvan–Newman algorithm: repeatedly remove
//! the edge carrying the most shortest-path traffic (edge betweenness)
//! until the graph splits into the requested number of components. To
//! stay tractable on graphs with millions of edges, betweenness is
//! estimated from a sampled subset of BFS sources rather than from
//! every vertex.
//!
//! The pipeline, leaves first:
//!
//! - [`graph::edge_list`] — raw label remapping and a stable columnar
//!   edge list
//! - [`graph`] — doubly-stored CSR with stable edge ids and cut marks
//! - [`community::betweenness`] — Brandes accumulation over BFS
//!   shortest-path DAGs
//! - [`community`] — the divisive loop and the
//!   [`CommunityDetection`] trait
//! - [`graph::union_find`] — component labelling between cuts
//! - [`io`] / [`metrics`] — edge-list files and modularity scoring
//!
//! ```rust
//! use cleave::{GirvanNewman, SparseGraph};
//!
//! // Two triangles joined by a bridge
//! let mut graph = SparseGraph::from_pairs(&[
//!     (0, 1), (1, 2), (0, 2),
//!     (3, 4), (4, 5), (3, 5),
//!     (2, 3),
//! ]).unwrap();
//!
//! let partition = GirvanNewman::new(2).partition(&mut graph).unwrap();
//! assert_eq!(partition.num_communities(), 2);
//! assert_eq!(partition.communities[0], vec![0, 1, 2]);
//! ```

pub mod community;
pub mod error;
pub mod graph;
pub mod io;
pub mod metrics;


pub use community::{CommunityDetection, GirvanNewman, Partition, SourceSampling};
pub use error::{Error, Result};
pub use graph::{EdgeList, SparseGraph, UnionFind};
pub use metrics::modularity;
