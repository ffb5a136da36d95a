pub mod common;
pub mod community;
pub mod pathfinding;
pub mod mst;

pub use common::{AdjacencyStore, Neighbor, NodeId};
pub use community::threshold_components;
pub use pathfinding::{bfs, dijkstra, PathResult};
pub use mst::{bottleneck_threshold, DisjointSet};
