//! Community detection algorithms
//!
//! Threshold-bounded connected components.

use super::common::{AdjacencyStore, NodeId};

/// Connected components using only edges with weight <= `threshold`.
///
/// Seeds are taken in index order and each component is grown with an
/// iterative depth-first traversal on an explicit stack, so members appear in
/// pop order. Every node lands in exactly one component; a node whose edges
/// all exceed the threshold forms a singleton.
pub fn threshold_components(store: &AdjacencyStore, threshold: f64) -> Vec<Vec<NodeId>> {
    let n = store.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![seed];
        visited[seed] = true;

        while let Some(u) = stack.pop() {
            component.push(u);

            for edge in store.neighbors(u) {
                if edge.weight <= threshold && !visited[edge.node] {
                    visited[edge.node] = true;
                    stack.push(edge.node);
                }
            }
        }

        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_components() {
        // 0-1 (1), 1-2 (2), 0-2 (5), 3-4 (10), 5 isolated
        let mut store = AdjacencyStore::new();
        store.add_undirected_edge(0, 1, 1.0);
        store.add_undirected_edge(1, 2, 2.0);
        store.add_undirected_edge(0, 2, 5.0);
        store.add_undirected_edge(3, 4, 10.0);
        store.ensure_nodes(6);

        let components = threshold_components(&store, 2.0);
        assert_eq!(components, vec![vec![0, 1, 2], vec![3], vec![4], vec![5]]);

        let components = threshold_components(&store, 10.0);
        assert_eq!(components.len(), 3);
        assert_eq!(components[1], vec![3, 4]);
    }

    #[test]
    fn test_lifo_member_order() {
        // Star: 0 with leaves 1, 2, 3 pushed in that order, popped in reverse
        let mut store = AdjacencyStore::new();
        store.add_undirected_edge(0, 1, 1.0);
        store.add_undirected_edge(0, 2, 1.0);
        store.add_undirected_edge(0, 3, 1.0);

        let components = threshold_components(&store, 1.0);
        assert_eq!(components, vec![vec![0, 3, 2, 1]]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut store = AdjacencyStore::new();
        store.add_undirected_edge(0, 1, 3.0);

        assert_eq!(threshold_components(&store, 3.0).len(), 1);
        assert_eq!(threshold_components(&store, 2.999).len(), 2);
    }

    #[test]
    fn test_empty_store() {
        let store = AdjacencyStore::new();
        assert!(threshold_components(&store, 1.0).is_empty());
    }
}
