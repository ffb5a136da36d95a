//! In-memory graph storage and the label-level query surface
//!
//! A [`Graph`] owns its label index and adjacency store and never changes
//! after it is built. Queries resolve labels to dense ids, run over the
//! adjacency store, and hand back owned labels.
//!
//! Unknown labels are a negative answer, not an error: every query returns its
//! documented sentinel (`-1.0`, `0`, or an empty sequence).

use super::labels::LabelIndex;
use super::types::{GraphStatistics, NodeId, PathEdge, NO_EDGE};
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use wgraph_algorithms::{
    bfs, bottleneck_threshold, dijkstra, threshold_components, AdjacencyStore,
};

/// Errors that can occur while building a graph
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: invalid weight {text:?}")]
    InvalidWeight { line: usize, text: String },

    #[error("Line {line}: negative weight {weight}")]
    NegativeWeight { line: usize, weight: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Immutable weighted, undirected graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: LabelIndex,
    adjacency: AdjacencyStore,
    edge_count: usize,
}

impl Graph {
    /// A graph with no nodes and no edges
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(labels: LabelIndex, adjacency: AdjacencyStore, edge_count: usize) -> Self {
        Graph {
            labels,
            adjacency,
            edge_count,
        }
    }

    /// Build from already-parsed `(source, target, weight)` triples.
    pub fn from_edges<I, S>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut builder = super::GraphBuilder::new();
        for (a, b, weight) in edges {
            builder.add_edge(a.as_ref(), b.as_ref(), weight)?;
        }
        Ok(builder.build())
    }

    /// Build from raw `(source, target, weight_text)` rows.
    pub fn from_rows<I, S>(rows: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: AsRef<str>,
    {
        let mut builder = super::GraphBuilder::new();
        for (line, (a, b, weight)) in rows.into_iter().enumerate() {
            builder.add_row(line + 1, a.as_ref(), b.as_ref(), weight.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Read a comma-separated edge list with the default configuration.
    ///
    /// A file that cannot be opened yields an empty graph.
    pub fn from_csv(path: impl AsRef<Path>) -> GraphResult<Self> {
        crate::loader::EdgeListReader::default().read_path(path)
    }

    /// Dense-id view of the topology, for running algorithms directly
    pub fn adjacency(&self) -> &AdjacencyStore {
        &self.adjacency
    }

    pub fn label_index(&self) -> &LabelIndex {
        &self.labels
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Option<(NodeId, NodeId)> {
        Some((self.labels.id_of(a)?, self.labels.id_of(b)?))
    }

    fn label(&self, id: NodeId) -> String {
        self.labels.label_of(id).to_string()
    }

    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// All labels in the order they were first seen
    pub fn nodes(&self) -> Vec<String> {
        self.labels.iter().map(str::to_string).collect()
    }

    /// Input rows ingested, self-loops included
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.id_of(label).is_some()
    }

    /// Adjacency length of `label`; 0 if unknown. Self-loops count twice.
    pub fn num_neighbors(&self, label: &str) -> usize {
        self.labels
            .id_of(label)
            .map(|id| self.adjacency.degree(id))
            .unwrap_or(0)
    }

    /// Weight of the first-inserted edge between `u` and `v`, or `-1.0`.
    pub fn edge_weight(&self, u: &str, v: &str) -> f64 {
        self.resolve_pair(u, v)
            .and_then(|(u, v)| self.adjacency.first_weight(u, v))
            .unwrap_or(NO_EDGE)
    }

    /// Neighbor labels in edge-insertion order; empty if unknown.
    pub fn neighbors(&self, label: &str) -> Vec<String> {
        match self.labels.id_of(label) {
            Some(id) => self
                .adjacency
                .neighbors(id)
                .iter()
                .map(|n| self.label(n.node))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Neighbor labels paired with the weight of each stored edge, in
    /// insertion order. Parallel edges and self-loops keep their own weights.
    pub fn weighted_neighbors(&self, label: &str) -> Vec<(String, f64)> {
        match self.labels.id_of(label) {
            Some(id) => self
                .adjacency
                .neighbors(id)
                .iter()
                .map(|n| (self.label(n.node), n.weight))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Fewest-hop path from `start` to `end`, both inclusive.
    ///
    /// `[start]` when they are the same node, empty when unreachable or either
    /// label is unknown.
    pub fn shortest_path_unweighted(&self, start: &str, end: &str) -> Vec<String> {
        let Some((s, e)) = self.resolve_pair(start, end) else {
            return Vec::new();
        };
        if s == e {
            return vec![self.label(s)];
        }

        debug!("BFS {} -> {}", start, end);
        match bfs(&self.adjacency, s, e) {
            Some(result) => result.path.into_iter().map(|id| self.label(id)).collect(),
            None => Vec::new(),
        }
    }

    /// Minimum-weight path from `start` to `end` as traversed edges.
    ///
    /// When `start == end` the result is the single placeholder
    /// `(start, start, -1)`. Empty when unreachable or either label is unknown.
    /// Each reported weight is the first-inserted edge between the two nodes,
    /// which can differ from the parallel edge the search relaxed.
    pub fn shortest_path_weighted(&self, start: &str, end: &str) -> Vec<PathEdge> {
        let Some((s, e)) = self.resolve_pair(start, end) else {
            return Vec::new();
        };
        if s == e {
            return vec![PathEdge::new(self.label(s), self.label(s), NO_EDGE)];
        }

        debug!("Dijkstra {} -> {}", start, end);
        let Some(result) = dijkstra(&self.adjacency, s, e) else {
            return Vec::new();
        };

        result
            .path
            .windows(2)
            .map(|pair| {
                let (u, v) = (pair[0], pair[1]);
                let weight = self.adjacency.first_weight(u, v).unwrap_or(NO_EDGE);
                PathEdge::new(self.label(u), self.label(v), weight)
            })
            .collect()
    }

    /// Partition every node using only edges with weight <= `threshold`.
    pub fn connected_components(&self, threshold: f64) -> Vec<Vec<String>> {
        debug!("Connected components at threshold {}", threshold);
        threshold_components(&self.adjacency, threshold)
            .into_iter()
            .map(|component| component.into_iter().map(|id| self.label(id)).collect())
            .collect()
    }

    /// Smallest edge weight `t` at which `start` and `end` fall in the same
    /// component of [`connected_components`](Self::connected_components).
    ///
    /// `0.0` when they are the same node; `-1.0` when they never connect or
    /// either label is unknown.
    pub fn smallest_connecting_threshold(&self, start: &str, end: &str) -> f64 {
        let Some((s, e)) = self.resolve_pair(start, end) else {
            return NO_EDGE;
        };

        debug!("Bottleneck threshold {} -> {}", start, end);
        bottleneck_threshold(&self.adjacency, s, e).unwrap_or(NO_EDGE)
    }

    pub fn statistics(&self) -> GraphStatistics {
        let node_count = self.num_nodes();
        let degrees = (0..node_count).map(|id| self.adjacency.degree(id));
        let total_degree: usize = degrees.clone().sum();
        let self_loop_count = (0..node_count)
            .map(|id| {
                self.adjacency
                    .neighbors(id)
                    .iter()
                    .filter(|n| n.node == id)
                    .count()
                    / 2
            })
            .sum();

        GraphStatistics {
            node_count,
            edge_count: self.edge_count,
            self_loop_count,
            max_degree: degrees.max().unwrap_or(0),
            avg_degree: if node_count == 0 {
                0.0
            } else {
                total_degree as f64 / node_count as f64
            },
        }
    }
}
