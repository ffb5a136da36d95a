//! Shared topology for graph algorithms
//!
//! Provides the dense, integer-indexed adjacency store every algorithm runs over.

/// Dense node index (0..N)
pub type NodeId = usize;

/// One adjacency entry: the node on the other end and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: f64,
}

/// Undirected, weighted adjacency lists indexed by dense node id.
///
/// Every edge is stored twice, once in each endpoint's list, in insertion
/// order. Parallel edges are kept as separate entries and a self-loop appends
/// two entries to the same list.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyStore {
    adjacency: Vec<Vec<Neighbor>>,
}

impl AdjacencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `node_count` adjacency lists.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(node_count),
        }
    }

    /// Number of nodes with an adjacency list (possibly empty)
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Grow the store so that indices `0..count` are valid.
    pub fn ensure_nodes(&mut self, count: usize) {
        if self.adjacency.len() < count {
            self.adjacency.resize_with(count, Vec::new);
        }
    }

    /// Append `(v, w)` to `u`'s list and `(u, w)` to `v`'s list.
    pub fn add_undirected_edge(&mut self, u: NodeId, v: NodeId, weight: f64) {
        self.ensure_nodes(u.max(v) + 1);
        self.adjacency[u].push(Neighbor { node: v, weight });
        self.adjacency[v].push(Neighbor { node: u, weight });
    }

    /// Adjacency entries of `idx` in insertion order
    pub fn neighbors(&self, idx: NodeId) -> &[Neighbor] {
        self.adjacency.get(idx).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of adjacency entries of `idx` (self-loops count twice)
    pub fn degree(&self, idx: NodeId) -> usize {
        self.neighbors(idx).len()
    }

    /// Weight of the first entry in `u`'s list that points at `v`.
    pub fn first_weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.neighbors(u)
            .iter()
            .find(|n| n.node == v)
            .map(|n| n.weight)
    }

    /// Every stored edge once, as `(u, v, weight)` with `u < v`.
    ///
    /// Walks the raw adjacency lists, so parallel edges are each yielded and
    /// self-loops are never yielded.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .filter(move |n| u < n.node)
                .map(move |n| (u, n.node, n.weight))
        })
    }
}
