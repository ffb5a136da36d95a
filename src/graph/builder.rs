//! Graph construction
//!
//! The builder is the only place a graph is mutated. It resolves labels,
//! validates weights, and stores each row as an undirected edge.

use super::labels::LabelIndex;
use super::store::{Graph, GraphError, GraphResult};
use tracing::debug;
use wgraph_algorithms::AdjacencyStore;

/// Accumulates edges, then freezes them into a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    labels: LabelIndex,
    adjacency: AdjacencyStore,
    edge_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize) -> Self {
        GraphBuilder {
            labels: LabelIndex::with_capacity(node_count),
            adjacency: AdjacencyStore::with_capacity(node_count),
            edge_count: 0,
        }
    }

    /// Add an edge with an already-parsed weight.
    ///
    /// Errors report the row number (1-based count of edges added).
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> GraphResult<()> {
        let line = self.edge_count + 1;
        let weight = validate_weight(line, weight)?;
        self.insert(a, b, weight);
        Ok(())
    }

    /// Add a raw row whose weight is still text; `line` is used in errors.
    pub fn add_row(&mut self, line: usize, a: &str, b: &str, weight_text: &str) -> GraphResult<()> {
        let weight = parse_weight(line, weight_text)?;
        self.insert(a, b, weight);
        Ok(())
    }

    fn insert(&mut self, a: &str, b: &str, weight: f64) {
        let u = self.labels.ensure(a);
        let v = self.labels.ensure(b);
        self.adjacency.add_undirected_edge(u, v, weight);
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn build(self) -> Graph {
        debug!(
            "Built graph with {} nodes, {} edges",
            self.labels.len(),
            self.edge_count
        );
        Graph::from_parts(self.labels, self.adjacency, self.edge_count)
    }
}

/// Parse weight text; surrounding whitespace is ignored.
pub fn parse_weight(line: usize, text: &str) -> GraphResult<f64> {
    let weight: f64 = text.trim().parse().map_err(|_| GraphError::InvalidWeight {
        line,
        text: text.to_string(),
    })?;
    validate_weight(line, weight)
}

/// Weights must be finite and non-negative. Negative zero becomes zero.
fn validate_weight(line: usize, weight: f64) -> GraphResult<f64> {
    if !weight.is_finite() {
        return Err(GraphError::InvalidWeight {
            line,
            text: weight.to_string(),
        });
    }
    if weight < 0.0 {
        return Err(GraphError::NegativeWeight { line, weight });
    }
    // -0.0 passes the check above; store it as +0.0
    Ok(weight + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_counts_rows() {
        let mut builder = GraphBuilder::with_capacity(3);
        builder.add_edge("A", "B", 1.0).unwrap();
        builder.add_edge("B", "B", 2.0).unwrap();
        builder.add_edge("A", "B", 3.0).unwrap();
        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.edge_count(), 3);

        let g = builder.build();
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.num_neighbors("B"), 4);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight(1, " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_weight(1, "0").unwrap(), 0.0);
        assert_eq!(parse_weight(1, "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_weight_rejects_garbage() {
        let err = parse_weight(7, "abc").unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { line: 7, .. }));

        let err = parse_weight(2, "").unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { line: 2, .. }));
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(matches!(
            parse_weight(3, "-1").unwrap_err(),
            GraphError::NegativeWeight { line: 3, .. }
        ));
        assert!(matches!(
            parse_weight(4, "NaN").unwrap_err(),
            GraphError::InvalidWeight { line: 4, .. }
        ));
        assert!(matches!(
            parse_weight(5, "inf").unwrap_err(),
            GraphError::InvalidWeight { line: 5, .. }
        ));

        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", 1.0).unwrap();
        let err = builder.add_edge("A", "C", -0.5).unwrap_err();
        assert!(matches!(err, GraphError::NegativeWeight { line: 2, .. }));
    }

    #[test]
    fn test_failed_row_leaves_builder_untouched() {
        let mut builder = GraphBuilder::new();
        assert!(builder.add_row(1, "A", "B", "x").is_err());
        assert_eq!(builder.node_count(), 0);
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_negative_zero_stored_as_zero() {
        let weight = parse_weight(1, "-0").unwrap();
        assert!(weight.is_sign_positive());

        let g = Graph::from_rows(vec![("A", "B", "-0")]).unwrap();
        assert!(g.edge_weight("A", "B").is_sign_positive());
        assert!(g.smallest_connecting_threshold("A", "B").is_sign_positive());

        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", -0.0).unwrap();
        assert!(builder.build().edge_weight("B", "A").is_sign_positive());
    }
}
