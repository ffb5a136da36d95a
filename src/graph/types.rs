//! Core type definitions for the graph engine

use serde::Serialize;
use std::fmt;

pub use wgraph_algorithms::NodeId;

/// Returned by weight lookups when there is no edge or a label is unknown.
pub const NO_EDGE: f64 = -1.0;

/// One traversed edge of a weighted path.
///
/// A path from a node to itself is reported as a single `PathEdge` from the
/// node to itself with weight [`NO_EDGE`]: no edge needs to be crossed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl PathEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        PathEdge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Whether this is the `start == end` placeholder rather than a real edge
    pub fn is_sentinel(&self) -> bool {
        self.weight == NO_EDGE && self.from == self.to
    }
}

impl fmt::Display for PathEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]- {}", self.from, self.weight, self.to)
    }
}

impl From<(&str, &str, f64)> for PathEdge {
    fn from((from, to, weight): (&str, &str, f64)) -> Self {
        PathEdge::new(from, to, weight)
    }
}

/// Total weight of a weighted path; the self-path placeholder costs nothing.
pub fn path_cost(path: &[PathEdge]) -> f64 {
    path.iter()
        .filter(|edge| !edge.is_sentinel())
        .map(|edge| edge.weight)
        .sum()
}

/// Summary counts for a built graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub self_loop_count: usize,
    pub max_degree: usize,
    pub avg_degree: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_cost_skips_sentinel() {
        let path = vec![PathEdge::new("A", "B", 1.0), PathEdge::new("B", "C", 2.5)];
        assert_eq!(path_cost(&path), 3.5);

        let self_path = vec![PathEdge::new("A", "A", NO_EDGE)];
        assert!(self_path[0].is_sentinel());
        assert_eq!(path_cost(&self_path), 0.0);
    }

    #[test]
    fn test_path_edge_display() {
        let edge = PathEdge::from(("A", "B", 2.0));
        assert_eq!(edge.to_string(), "A -[2]- B");
    }

    #[test]
    fn test_path_edge_serializes_flat() {
        let json = serde_json::to_value(PathEdge::new("A", "B", 2.0)).unwrap();
        assert_eq!(json, serde_json::json!({"from": "A", "to": "B", "weight": 2.0}));
    }
}
