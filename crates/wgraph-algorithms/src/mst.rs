//! Minimum spanning tree sweeps
//!
//! Kruskal-style processing of edges in ascending weight order, used to find
//! the bottleneck threshold between two nodes.

use super::common::{AdjacencyStore, NodeId};

/// Disjoint-set forest over `0..n`: union by size, find with path halving.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<NodeId>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Root of the set containing `a`.
    ///
    /// Each step repoints `a` at its grandparent before moving up.
    pub fn find(&mut self, mut a: NodeId) -> NodeId {
        while self.parent[a] != a {
            self.parent[a] = self.parent[self.parent[a]];
            a = self.parent[a];
        }
        a
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The smaller root goes under the larger; on equal sizes `b`'s root goes
    /// under `a`'s. Returns false if they were already joined.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        true
    }

    /// Whether `a` and `b` share a root
    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of elements in the set containing `a`
    pub fn set_size(&mut self, a: NodeId) -> usize {
        let root = self.find(a);
        self.size[root]
    }
}

/// Smallest `t` such that `source` and `target` are connected using only
/// edges with weight <= `t`.
///
/// This is the minimum bottleneck weight, equal to the heaviest edge on the
/// minimum spanning tree path between the two nodes. Returns `Some(0.0)` when
/// `source == target` and `None` when no edge sequence connects them.
pub fn bottleneck_threshold(store: &AdjacencyStore, source: NodeId, target: NodeId) -> Option<f64> {
    let n = store.node_count();
    if source >= n || target >= n {
        return None;
    }
    if source == target {
        return Some(0.0);
    }

    let mut edges: Vec<(NodeId, NodeId, f64)> = store.edges().collect();
    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut sets = DisjointSet::new(n);

    for (u, v, weight) in edges {
        sets.union(u, v);
        if sets.connected(source, target) {
            return Some(weight);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set_union_by_size() {
        let mut sets = DisjointSet::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 0));
        assert!(!sets.union(1, 2));

        // {0,1} was larger, so its root absorbs 2
        assert_eq!(sets.find(2), 0);
        assert_eq!(sets.set_size(1), 3);
        assert!(!sets.connected(0, 3));
        assert_eq!(sets.set_size(4), 1);
    }

    #[test]
    fn test_disjoint_set_tie_keeps_first_root() {
        let mut sets = DisjointSet::new(2);
        sets.union(1, 0);
        assert_eq!(sets.find(0), 1);
    }

    #[test]
    fn test_path_halving_flattens() {
        let mut sets = DisjointSet::new(4);
        // Build chain 3 -> 2 -> 1 -> 0 by hand
        sets.parent = vec![0, 0, 1, 2];
        assert_eq!(sets.find(3), 0);
        // 3 now points at its former grandparent
        assert_eq!(sets.parent[3], 1);
    }

    #[test]
    fn test_bottleneck_threshold() {
        // 0-1 (1), 1-2 (2), 0-2 (5)
        let mut store = AdjacencyStore::new();
        store.add_undirected_edge(0, 1, 1.0);
        store.add_undirected_edge(1, 2, 2.0);
        store.add_undirected_edge(0, 2, 5.0);

        assert_eq!(bottleneck_threshold(&store, 0, 2), Some(2.0));
        assert_eq!(bottleneck_threshold(&store, 0, 1), Some(1.0));
        assert_eq!(bottleneck_threshold(&store, 2, 2), Some(0.0));
    }

    #[test]
    fn test_bottleneck_disconnected() {
        let mut store = AdjacencyStore::new();
        store.add_undirected_edge(0, 1, 1.0);
        store.add_undirected_edge(2, 3, 1.0);

        assert_eq!(bottleneck_threshold(&store, 0, 3), None);
    }

    #[test]
    fn test_bottleneck_ignores_self_loops() {
        let mut store = AdjacencyStore::new();
        store.add_undirected_edge(0, 0, 0.5);
        store.add_undirected_edge(0, 1, 4.0);

        assert_eq!(bottleneck_threshold(&store, 0, 1), Some(4.0));
    }

    proptest::proptest! {
        #[test]
        fn prop_disjoint_set_matches_relabeling(
            unions in proptest::collection::vec((0usize..12, 0usize..12), 0..30)
        ) {
            let mut sets = DisjointSet::new(12);
            let mut label: Vec<usize> = (0..12).collect();
            for (a, b) in unions {
                let merged = sets.union(a, b);
                proptest::prop_assert_eq!(merged, label[a] != label[b]);
                let (from, to) = (label[b], label[a]);
                for l in label.iter_mut() {
                    if *l == from {
                        *l = to;
                    }
                }
            }
            for a in 0..12 {
                let expected = label.iter().filter(|&&l| l == label[a]).count();
                proptest::prop_assert_eq!(sets.set_size(a), expected);
                for b in 0..12 {
                    proptest::prop_assert_eq!(sets.connected(a, b), label[a] == label[b]);
                }
            }
        }
    }
}
