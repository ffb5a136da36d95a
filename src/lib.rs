//! wgraph: in-memory weighted, undirected graph engine
//!
//! Builds an adjacency structure from a list of labeled edges once, then
//! answers read-only structural queries:
//!
//! - neighbor enumeration and edge-weight lookup
//! - unweighted shortest path (BFS)
//! - weighted shortest path (Dijkstra)
//! - connected components restricted to edges under a weight threshold
//! - the smallest threshold at which two nodes become connected
//!
//! Labels are mapped to dense integer ids and every algorithm runs over those
//! ids in the `wgraph-algorithms` crate. Unknown labels never raise errors;
//! each query returns a documented sentinel instead.
//!
//! ## Example Usage
//!
//! ```rust
//! use wgraph::{Graph, PathEdge};
//!
//! let graph = Graph::from_edges(vec![
//!     ("A", "B", 1.0),
//!     ("B", "C", 2.0),
//!     ("A", "C", 5.0),
//! ]).unwrap();
//!
//! assert_eq!(graph.shortest_path_unweighted("A", "C"), vec!["A", "C"]);
//! assert_eq!(
//!     graph.shortest_path_weighted("A", "C"),
//!     vec![PathEdge::new("A", "B", 1.0), PathEdge::new("B", "C", 2.0)],
//! );
//! assert_eq!(graph.smallest_connecting_threshold("A", "C"), 2.0);
//! assert_eq!(graph.edge_weight("A", "Z"), -1.0);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod loader;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, GraphConfig};
pub use graph::{
    path_cost, Graph, GraphBuilder, GraphError, GraphResult, GraphStatistics, LabelIndex,
    NodeId, PathEdge, NO_EDGE,
};
pub use loader::EdgeListReader;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
