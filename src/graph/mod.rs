//! Core graph engine
//!
//! - Label index: string labels to dense ids in first-seen order
//! - Builder: the only way to populate a graph
//! - Store: the immutable graph and its query surface

pub mod builder;
pub mod labels;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::GraphBuilder;
pub use labels::LabelIndex;
pub use store::{Graph, GraphError, GraphResult};
pub use types::{path_cost, GraphStatistics, NodeId, PathEdge, NO_EDGE};
